//! `/economyapiexample` 탭 완성기

use mcengine_core::{Command, CommandSender, TabCompleter};

/// 예제 탭 완성기 - 항상 후보 없음
#[derive(Debug, Clone, Copy, Default)]
pub struct EconomyApiTabCompleter;

impl EconomyApiTabCompleter {
    pub fn new() -> Self {
        Self
    }
}

impl TabCompleter for EconomyApiTabCompleter {
    fn on_tab_complete(
        &self,
        _sender: &dyn CommandSender,
        _command: &dyn Command,
        _alias: &str,
        _args: &[String],
    ) -> Vec<String> {
        Vec::new()
    }
}
