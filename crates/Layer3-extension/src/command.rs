//! `/economyapiexample` 실행 핸들러

use mcengine_core::{Command, CommandHandler, CommandSender};

/// 예제 명령어 핸들러
///
/// 아직 실제 동작이 없으며, 어떤 인자든 성공(`true`)을 반환합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct EconomyApiCommand;

impl EconomyApiCommand {
    pub fn new() -> Self {
        Self
    }
}

impl CommandHandler for EconomyApiCommand {
    fn on_command(
        &self,
        _sender: &dyn CommandSender,
        _command: &dyn Command,
        _label: &str,
        _args: &[String],
    ) -> bool {
        true
    }
}
