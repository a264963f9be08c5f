//! # Host
//!
//! 확장이 호스트 프로세스에 요구하는 기능 표면
//!
//! - `name()` - 호스트 이름 (명령어 네임스페이스)
//! - `event_bus()` - 이벤트 리스너 구독
//! - `log_sink()` - 로그 출력 대상
//! - `command_registry()` - 늦게 로드된 확장에 노출하는 명령어 레지스트리 (선택적)

mod sender;
mod server;

pub use sender::{CommandSender, ConsoleSender, RecordingSender};
pub use server::ServerHost;

use crate::extension::EventBus;
use crate::registry::CommandRegistry;
use mcengine_foundation::LogSink;
use std::sync::Arc;

/// 호스트 기능 트레이트
pub trait Host: Send + Sync {
    /// 호스트 이름
    fn name(&self) -> &str;

    /// 이벤트 버스
    fn event_bus(&self) -> Arc<EventBus>;

    /// 로그 싱크
    fn log_sink(&self) -> Arc<dyn LogSink>;

    /// 명령어 레지스트리
    ///
    /// 호스트가 동적 등록을 허용하지 않으면 `None`.
    fn command_registry(&self) -> Option<Arc<CommandRegistry>>;

    /// 명령어 네임스페이스 (호스트 이름 소문자)
    fn namespace(&self) -> String {
        self.name().to_lowercase()
    }
}
