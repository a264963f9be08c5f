//! 예제 확장 통합 테스트 - ServerHost에 로드하여 등록 결과 검증
//!
//! `cargo test -p mcengine-economy-api-example --test economy_api_example`

use mcengine_core::{
    EventType, Extension, ExtensionManager, ExtensionStatus, Host, RecordingSender,
    ServerEvent, ServerHost,
};
use mcengine_economy_api_example::{
    ExampleEconomyApi, COMMAND_DESCRIPTION, COMMAND_NAME, COMMAND_USAGE, EXTENSION_ID,
    IDENTITY_KEY, LISTENER_NAME,
};
use mcengine_foundation::{BufferSink, Error, HostConfig, IdentityRegistry};
use std::sync::Arc;

fn host_with(config: HostConfig) -> (Arc<ServerHost>, Arc<BufferSink>) {
    let sink = Arc::new(BufferSink::new());
    let host = Arc::new(ServerHost::new(config).with_log_sink(sink.clone()));
    (host, sink)
}

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_load_registers_exactly_one_command() {
    let (host, sink) = host_with(HostConfig::default());
    let before = host.registry().len();

    let outcome = ExampleEconomyApi::new().on_load(host.as_ref());

    assert!(outcome.is_loaded());
    assert_eq!(host.registry().len(), before + 1);

    let command = host.registry().get(COMMAND_NAME).expect("command registered");
    assert_eq!(command.name(), "economyapiexample");
    assert_eq!(command.usage(), "/economyapiexample");
    assert_eq!(command.description(), "Economy API example command.");
    assert_eq!(command.usage(), COMMAND_USAGE);
    assert_eq!(command.description(), COMMAND_DESCRIPTION);

    assert!(host.registry().contains("mcengine:economyapiexample"));
    assert!(sink.warnings().is_empty());
}

#[test]
fn test_registry_access_failure_leaves_registry_unchanged() {
    let (host, sink) = host_with(HostConfig::new().with_expose_command_registry(false));

    let outcome = ExampleEconomyApi::new().on_load(host.as_ref());

    assert!(!outcome.is_loaded());
    assert!(outcome.reason().unwrap().is_registration_access());
    assert!(host.registry().is_empty());

    let warnings = sink.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("Failed"));
    assert!(warnings[0].starts_with("[API][EconomyExampleAPI] "));
}

#[test]
fn test_execute_always_succeeds() {
    let (host, _sink) = host_with(HostConfig::default());
    ExampleEconomyApi::new().on_load(host.as_ref());
    let command = host.registry().get(COMMAND_NAME).unwrap();
    let sender = RecordingSender::new("Steve");

    assert!(command.execute(&sender, "economyapiexample", &[]));
    assert!(command.execute(&sender, "economyapiexample", &args(&["foo", "bar"])));
    assert!(sender.messages().is_empty());

    assert!(host.registry().dispatch(&sender, "/economyapiexample foo").unwrap());
}

#[test]
fn test_tab_complete_is_always_empty() {
    let (host, _sink) = host_with(HostConfig::default());
    ExampleEconomyApi::new().on_load(host.as_ref());
    let command = host.registry().get(COMMAND_NAME).unwrap();
    let sender = RecordingSender::new("Alex");

    assert!(command
        .tab_complete(&sender, "economyapiexample", &args(&["e"]))
        .is_empty());
    assert!(host
        .registry()
        .complete(&sender, "/economyapiexample e")
        .is_empty());
    assert_eq!(
        host.registry().complete(&sender, "/economy"),
        vec!["/economyapiexample".to_string()]
    );
}

#[test]
fn test_set_id_ignores_requested_value() {
    let ext = ExampleEconomyApi::new();

    ext.set_id("anything-else");

    assert_eq!(
        IdentityRegistry::global().get_id(IDENTITY_KEY).as_deref(),
        Some("mcengine-economy-api-example")
    );
    assert_eq!(ext.id(), EXTENSION_ID);
}

#[test]
fn test_disload_without_load_is_silent() {
    let (host, sink) = host_with(HostConfig::default());

    ExampleEconomyApi::new().on_disload(host.as_ref());

    assert!(sink.is_empty());
}

#[test]
fn test_second_load_is_rejected_as_duplicate() {
    let (host, sink) = host_with(HostConfig::default());
    let ext = ExampleEconomyApi::new();

    assert!(ext.on_load(host.as_ref()).is_loaded());
    let outcome = ext.on_load(host.as_ref());

    assert!(matches!(outcome.reason(), Some(Error::DuplicateCommand(_))));
    assert_eq!(host.registry().len(), 1);
    assert_eq!(host.event_bus().listener_count(), 1);

    let warnings = sink.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("Failed to initialize ExampleEconomyAPI"));
    assert!(warnings[0].contains("mcengine:economyapiexample"));
}

#[test]
fn test_label_taken_by_other_namespace() {
    let (lobby, _) = host_with(HostConfig::new().with_name("Lobby"));
    ExampleEconomyApi::new().on_load(lobby.as_ref());

    // 같은 레지스트리를 다른 이름으로 노출하는 호스트
    struct Alias {
        inner: Arc<ServerHost>,
    }

    impl Host for Alias {
        fn name(&self) -> &str {
            "Survival"
        }
        fn event_bus(&self) -> Arc<mcengine_core::EventBus> {
            self.inner.event_bus()
        }
        fn log_sink(&self) -> Arc<dyn mcengine_foundation::LogSink> {
            self.inner.log_sink()
        }
        fn command_registry(&self) -> Option<Arc<mcengine_core::CommandRegistry>> {
            self.inner.command_registry()
        }
    }

    let alias = Alias {
        inner: Arc::clone(&lobby),
    };
    assert!(ExampleEconomyApi::new().on_load(&alias).is_loaded());

    assert_eq!(lobby.registry().len(), 2);
    assert_eq!(lobby.registry().entry(COMMAND_NAME).unwrap().namespace, "lobby");
    assert!(!lobby
        .registry()
        .entry("survival:economyapiexample")
        .unwrap()
        .claimed_label);
}

#[tokio::test]
async fn test_manager_lifecycle() {
    let (host, sink) = host_with(HostConfig::default());
    let manager = ExtensionManager::new(host.clone());

    let outcome = manager
        .load(Arc::new(ExampleEconomyApi::new()))
        .await
        .unwrap();
    assert!(outcome.is_loaded());
    assert_eq!(manager.status(EXTENSION_ID), Some(ExtensionStatus::Active));
    assert!(host.event_bus().has_listener(LISTENER_NAME));

    host.fire(ServerEvent::simple(EventType::PlayerJoin)).await;

    manager.disload(EXTENSION_ID).await.unwrap();

    // 명령어와 리스너는 호스트 쪽에 남음
    assert!(host.registry().contains(COMMAND_NAME));
    assert!(host.event_bus().has_listener(LISTENER_NAME));
    assert_eq!(
        sink.records().last().map(|r| r.line.clone()),
        Some("[API][EconomyExampleAPI] Disabled.".to_string())
    );
}

#[tokio::test]
async fn test_manager_keeps_degraded_extension() {
    let (host, _sink) = host_with(HostConfig::new().with_expose_command_registry(false));
    let manager = ExtensionManager::new(host.clone());

    let outcome = manager
        .load(Arc::new(ExampleEconomyApi::new()))
        .await
        .unwrap();

    assert!(!outcome.is_loaded());
    assert_eq!(manager.status(EXTENSION_ID), Some(ExtensionStatus::Degraded));
    assert!(host.registry().is_empty());
}
