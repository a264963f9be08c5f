//! # Extension System
//!
//! MCEngine 확장 시스템
//!
//! ## 개요
//!
//! 확장은 호스트가 시작된 뒤에 로드되어 다음을 할 수 있습니다:
//! - 이벤트 리스너 등록
//! - 호스트 명령어 레지스트리에 명령어 추가
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    ExtensionManager                         │
//! │  ┌───────────────────────────────────────────────────────┐ │
//! │  │                 ExtensionRegistry                      │ │
//! │  │  ┌────────────┬────────────┬────────────────────┐    │ │
//! │  │  │ API ext    │ AddOn ext  │ DLC ext            │    │ │
//! │  │  └────────────┴────────────┴────────────────────┘    │ │
//! │  └───────────────────────────────────────────────────────┘ │
//! │                          │ on_load(&dyn Host)               │
//! │  ┌───────────────────────┼───────────────────────────────┐ │
//! │  │        Host           │                               │ │
//! │  │  - EventBus           │                               │ │
//! │  │  - CommandRegistry    │                               │ │
//! │  │  - LogSink            │                               │ │
//! │  └───────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 예시
//!
//! ```ignore
//! struct MyExtension;
//!
//! impl Extension for MyExtension {
//!     fn manifest(&self) -> ExtensionManifest { ... }
//!     fn on_load(&self, host: &dyn Host) -> LoadOutcome {
//!         host.event_bus().register_listener(Arc::new(MyListener)).into()
//!     }
//!     ...
//! }
//!
//! let manager = ExtensionManager::new(host);
//! manager.load(Arc::new(MyExtension)).await?;
//! ```

mod events;
mod manager;
mod manifest;
mod registry;
mod traits;

pub use events::{EventBus, EventListener, EventType, ServerEvent};
pub use manager::{ExtensionManager, ExtensionManagerConfig};
pub use manifest::{ExtensionKind, ExtensionManifest, ExtensionVersion};
pub use registry::ExtensionRegistry;
pub use traits::{Extension, ExtensionStatus, LoadOutcome};
