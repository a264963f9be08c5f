//! Server console - stdin 한 줄씩 레지스트리로 전달

use mcengine_core::{
    CommandSender, ConsoleSender, EventType, ExtensionManager, ServerEvent, ServerHost,
};
use mcengine_foundation::Error;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// 한 줄 처리 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleAction {
    /// 출력할 줄들
    Output(Vec<String>),

    /// 콘솔 종료
    Quit,
}

/// 콘솔 입력 한 줄 처리
///
/// - `/label args` : 명령어 실행
/// - `?label args` : 탭 완성 후보
/// - `list`        : 등록된 명령어
/// - `extensions`  : 로드된 확장과 상태
/// - `quit`/`stop` : 종료
pub fn handle_line(
    host: &ServerHost,
    manager: &ExtensionManager,
    sender: &dyn CommandSender,
    line: &str,
) -> ConsoleAction {
    let line = line.trim();

    if line.is_empty() {
        return ConsoleAction::Output(vec![]);
    }

    if line == "quit" || line == "stop" {
        return ConsoleAction::Quit;
    }

    if line == "list" {
        let entries = host.registry().entries();
        if entries.is_empty() {
            return ConsoleAction::Output(vec!["No commands registered.".to_string()]);
        }
        return ConsoleAction::Output(
            entries
                .iter()
                .map(|e| format!("{} - {} ({})", e.key(), e.description, e.usage))
                .collect(),
        );
    }

    if line == "extensions" {
        let manifests = manager.registry().list();
        if manifests.is_empty() {
            return ConsoleAction::Output(vec!["No extensions loaded.".to_string()]);
        }
        return ConsoleAction::Output(
            manifests
                .iter()
                .map(|m| {
                    let status = manager
                        .status(&m.id)
                        .map(|s| s.to_string())
                        .unwrap_or_default();
                    format!("[{}] {} v{} - {} ({})", m.kind, m.name, m.version, m.id, status)
                })
                .collect(),
        );
    }

    if let Some(partial) = line.strip_prefix('?') {
        let suggestions = host.registry().complete(sender, partial);
        if suggestions.is_empty() {
            return ConsoleAction::Output(vec!["(no suggestions)".to_string()]);
        }
        return ConsoleAction::Output(suggestions);
    }

    match host.registry().dispatch(sender, line) {
        Ok(true) => ConsoleAction::Output(vec![]),
        Ok(false) => {
            let usage = host
                .registry()
                .entry(line.trim_start_matches('/').split_whitespace().next().unwrap_or(""))
                .map(|e| e.usage)
                .unwrap_or_default();
            ConsoleAction::Output(vec![format!("Usage: {}", usage)])
        }
        Err(Error::CommandNotFound(label)) => ConsoleAction::Output(vec![format!(
            "Unknown command: {}. Type \"list\" for help.",
            label
        )]),
        Err(e) => ConsoleAction::Output(vec![format!("Error: {}", e)]),
    }
}

/// stdin 콘솔 루프 (EOF 또는 quit까지)
pub async fn run_console(host: Arc<ServerHost>, manager: &ExtensionManager) -> anyhow::Result<()> {
    let sender = ConsoleSender::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        host.fire(ServerEvent::new(
            EventType::CommandPreprocess,
            serde_json::json!({ "sender": sender.name(), "line": line }),
            "console",
        ))
        .await;

        match handle_line(&host, manager, &sender, &line) {
            ConsoleAction::Output(out) => {
                for l in out {
                    sender.send_message(&l);
                }
            }
            ConsoleAction::Quit => break,
        }
    }

    manager.disload_all().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcengine_core::RecordingSender;
    use mcengine_economy_api_example::ExampleEconomyApi;
    use mcengine_foundation::HostConfig;

    async fn loaded(config: HostConfig) -> (Arc<ServerHost>, ExtensionManager) {
        let host = Arc::new(ServerHost::new(config));
        let manager = ExtensionManager::new(host.clone());
        manager
            .load(Arc::new(ExampleEconomyApi::new()))
            .await
            .unwrap();
        (host, manager)
    }

    #[tokio::test]
    async fn test_list() {
        let (host, manager) = loaded(HostConfig::default()).await;
        let sender = RecordingSender::new("console");

        assert_eq!(
            handle_line(&host, &manager, &sender, "list"),
            ConsoleAction::Output(vec![
                "mcengine:economyapiexample - Economy API example command. (/economyapiexample)"
                    .to_string()
            ])
        );
    }

    #[tokio::test]
    async fn test_dispatch_and_unknown() {
        let (host, manager) = loaded(HostConfig::default()).await;
        let sender = RecordingSender::new("console");

        assert_eq!(
            handle_line(&host, &manager, &sender, "/economyapiexample foo bar"),
            ConsoleAction::Output(vec![])
        );
        assert_eq!(
            handle_line(&host, &manager, &sender, "/pay"),
            ConsoleAction::Output(vec!["Unknown command: pay. Type \"list\" for help.".to_string()])
        );
    }

    #[tokio::test]
    async fn test_complete_and_quit() {
        let (host, manager) = loaded(HostConfig::default()).await;
        let sender = RecordingSender::new("console");

        assert_eq!(
            handle_line(&host, &manager, &sender, "?/economyapiexample e"),
            ConsoleAction::Output(vec!["(no suggestions)".to_string()])
        );
        assert_eq!(
            handle_line(&host, &manager, &sender, "?/eco"),
            ConsoleAction::Output(vec!["/economyapiexample".to_string()])
        );
        assert_eq!(handle_line(&host, &manager, &sender, "stop"), ConsoleAction::Quit);
    }

    #[tokio::test]
    async fn test_extensions_show_status() {
        let (host, manager) = loaded(HostConfig::default()).await;
        let sender = RecordingSender::new("console");

        assert_eq!(
            handle_line(&host, &manager, &sender, "extensions"),
            ConsoleAction::Output(vec![
                "[API] EconomyExampleAPI v1.0.0 - mcengine-economy-api-example (active)"
                    .to_string()
            ])
        );

        manager.disload_all().await;
        assert_eq!(
            handle_line(&host, &manager, &sender, "extensions"),
            ConsoleAction::Output(vec!["No extensions loaded.".to_string()])
        );
    }

    #[tokio::test]
    async fn test_sealed_host() {
        let (host, manager) =
            loaded(HostConfig::new().with_expose_command_registry(false)).await;
        let sender = RecordingSender::new("console");

        assert_eq!(
            handle_line(&host, &manager, &sender, "list"),
            ConsoleAction::Output(vec!["No commands registered.".to_string()])
        );
        assert_eq!(
            handle_line(&host, &manager, &sender, "extensions"),
            ConsoleAction::Output(vec![
                "[API] EconomyExampleAPI v1.0.0 - mcengine-economy-api-example (degraded)"
                    .to_string()
            ])
        );
    }
}
