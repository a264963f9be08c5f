//! Dynamic Command - 핸들러 + 완성기를 하나의 명령어로 묶는 값

use super::traits::{Command, CommandHandler, TabCompleter};
use crate::host::CommandSender;

/// 동적으로 생성되는 명령어
///
/// 한 번 생성된 뒤 `Arc<dyn Command>`로 레지스트리에 넘겨집니다.
pub struct DynamicCommand {
    name: String,
    description: String,
    usage: String,
    handler: Box<dyn CommandHandler>,
    completer: Box<dyn TabCompleter>,
}

impl DynamicCommand {
    /// 새 명령어 생성 (사용법 기본값은 `"/<name>"`)
    pub fn new(
        name: impl Into<String>,
        handler: impl CommandHandler + 'static,
        completer: impl TabCompleter + 'static,
    ) -> Self {
        let name = name.into();
        Self {
            usage: format!("/{}", name),
            name,
            description: String::new(),
            handler: Box::new(handler),
            completer: Box::new(completer),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }
}

impl Command for DynamicCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn usage(&self) -> &str {
        &self.usage
    }

    fn execute(&self, sender: &dyn CommandSender, label: &str, args: &[String]) -> bool {
        self.handler.on_command(sender, self, label, args)
    }

    fn tab_complete(
        &self,
        sender: &dyn CommandSender,
        alias: &str,
        args: &[String],
    ) -> Vec<String> {
        self.completer.on_tab_complete(sender, self, alias, args)
    }
}

impl std::fmt::Debug for DynamicCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicCommand")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("usage", &self.usage)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ConsoleSender;

    struct EchoHandler;

    impl CommandHandler for EchoHandler {
        fn on_command(
            &self,
            sender: &dyn CommandSender,
            command: &dyn Command,
            label: &str,
            args: &[String],
        ) -> bool {
            sender.send_message(&format!("{} {} {}", command.name(), label, args.join(" ")));
            !args.is_empty()
        }
    }

    struct PrefixCompleter;

    impl TabCompleter for PrefixCompleter {
        fn on_tab_complete(
            &self,
            _sender: &dyn CommandSender,
            _command: &dyn Command,
            _alias: &str,
            args: &[String],
        ) -> Vec<String> {
            let partial = args.last().map(String::as_str).unwrap_or("");
            ["balance", "pay", "top"]
                .iter()
                .filter(|s| s.starts_with(partial))
                .map(|s| s.to_string())
                .collect()
        }
    }

    #[test]
    fn test_defaults() {
        let cmd = DynamicCommand::new("money", EchoHandler, PrefixCompleter);
        assert_eq!(cmd.name(), "money");
        assert_eq!(cmd.usage(), "/money");
        assert_eq!(cmd.description(), "");
    }

    #[test]
    fn test_delegates_to_handler_and_completer() {
        let cmd = DynamicCommand::new("money", EchoHandler, PrefixCompleter)
            .with_description("Money command.")
            .with_usage("/money <sub>");
        let sender = ConsoleSender::new();

        assert!(!cmd.execute(&sender, "money", &[]));
        assert!(cmd.execute(&sender, "money", &["pay".to_string()]));
        assert_eq!(
            cmd.tab_complete(&sender, "money", &["p".to_string()]),
            vec!["pay".to_string()]
        );
        assert_eq!(cmd.usage(), "/money <sub>");
    }
}
