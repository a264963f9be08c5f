//! mcengine-core: Host-side runtime for MCEngine extensions
//!
//! Layer2 - 확장이 기대는 호스트 표면
//!
//! # 주요 모듈
//!
//! - `host`: 호스트 기능 트레이트 + 프로세스 내 `ServerHost`
//! - `registry`: 명령어 레지스트리 + `DynamicCommand`
//! - `extension`: 확장 트레이트, 매니저, 이벤트 버스
//!
//! # 사용 예시
//!
//! ```ignore
//! use mcengine_core::{ExtensionManager, ServerHost, Host};
//!
//! let host = Arc::new(ServerHost::new(HostConfig::load()?));
//! let manager = ExtensionManager::new(host.clone());
//! manager.load(Arc::new(MyExtension::new())).await?;
//!
//! host.registry().dispatch(&ConsoleSender::new(), "/mycommand")?;
//! ```

pub mod extension;
pub mod host;
pub mod registry;

// Re-exports: Extension
pub use extension::{
    EventBus, EventListener, EventType, Extension, ExtensionKind, ExtensionManager,
    ExtensionManagerConfig, ExtensionManifest, ExtensionRegistry, ExtensionStatus,
    ExtensionVersion, LoadOutcome, ServerEvent,
};

// Re-exports: Host
pub use host::{CommandSender, ConsoleSender, Host, RecordingSender, ServerHost};

// Re-exports: Command Registry
pub use registry::{
    Command, CommandEntry, CommandHandler, CommandRegistry, DynamicCommand, RegistryEvent,
    TabCompleter,
};

// Layer1 re-exports
pub use mcengine_foundation::{Error, Result};

/// Layer2 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
