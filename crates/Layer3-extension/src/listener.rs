//! Economy API 이벤트 리스너

use async_trait::async_trait;
use mcengine_core::{EventListener, EventType, ServerEvent};
use mcengine_foundation::ExtensionLogger;
use tracing::debug;

/// 리스너 이름 (이벤트 버스 키)
pub const LISTENER_NAME: &str = "economy-api-example";

/// 예제 리스너 - 관심 이벤트를 관찰만 함
pub struct EconomyApiListener {
    host_name: String,
    logger: ExtensionLogger,
}

impl EconomyApiListener {
    pub fn new(host_name: impl Into<String>, logger: ExtensionLogger) -> Self {
        Self {
            host_name: host_name.into(),
            logger,
        }
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }
}

#[async_trait]
impl EventListener for EconomyApiListener {
    fn name(&self) -> &str {
        LISTENER_NAME
    }

    fn interested_events(&self) -> Vec<EventType> {
        vec![EventType::PlayerJoin, EventType::EconomyTransaction]
    }

    async fn handle(&self, event: &ServerEvent) {
        debug!(
            "[{}][{}] observed {} on {}",
            self.logger.category(),
            self.logger.name(),
            event.event_type,
            self.host_name
        );
    }
}
