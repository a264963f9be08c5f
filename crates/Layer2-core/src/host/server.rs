//! Server Host - 프로세스 내 호스트 구현

use super::Host;
use crate::extension::{EventBus, ServerEvent};
use crate::registry::CommandRegistry;
use mcengine_foundation::{HostConfig, LogSink, TracingSink};
use std::sync::Arc;

/// 서버 호스트
///
/// 레지스트리와 이벤트 버스를 소유하며, 설정에 따라 레지스트리를 확장에 노출합니다.
pub struct ServerHost {
    config: HostConfig,
    registry: Arc<CommandRegistry>,
    event_bus: Arc<EventBus>,
    log_sink: Arc<dyn LogSink>,
}

impl ServerHost {
    /// 새 호스트 생성 (로그는 tracing으로)
    pub fn new(config: HostConfig) -> Self {
        Self {
            config,
            registry: Arc::new(CommandRegistry::new()),
            event_bus: Arc::new(EventBus::new()),
            log_sink: Arc::new(TracingSink),
        }
    }

    /// 로그 싱크 교체
    pub fn with_log_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.log_sink = sink;
        self
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// 호스트 소유 레지스트리 (노출 설정과 무관)
    pub fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    /// 이벤트 발행
    pub async fn fire(&self, event: ServerEvent) {
        self.event_bus.publish(event).await;
    }
}

impl Default for ServerHost {
    fn default() -> Self {
        Self::new(HostConfig::default())
    }
}

impl Host for ServerHost {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn event_bus(&self) -> Arc<EventBus> {
        Arc::clone(&self.event_bus)
    }

    fn log_sink(&self) -> Arc<dyn LogSink> {
        Arc::clone(&self.log_sink)
    }

    fn command_registry(&self) -> Option<Arc<CommandRegistry>> {
        self.config
            .expose_command_registry
            .then(|| Arc::clone(&self.registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exposes_registry_by_default() {
        let host = ServerHost::default();
        assert_eq!(host.name(), "MCEngine");
        assert_eq!(host.namespace(), "mcengine");
        assert!(host.command_registry().is_some());
    }

    #[test]
    fn test_sealed_host_hides_registry() {
        let host = ServerHost::new(HostConfig::new().with_expose_command_registry(false));
        assert!(host.command_registry().is_none());
        assert!(host.registry().is_empty());
    }

    #[test]
    fn test_shares_same_registry() {
        let host = ServerHost::default();
        let exposed = host.command_registry().unwrap();
        assert!(Arc::ptr_eq(&exposed, host.registry()));
        assert!(Arc::ptr_eq(&host.event_bus(), &host.event_bus()));
    }
}
