//! # Command Registry
//!
//! 호스트가 소유하는 명령어 레지스트리
//!
//! ## 개요
//!
//! 호스트는 보통 시작 시점에만 명령어를 채우지만, 늦게 로드된 확장도
//! 이 레지스트리에 명령어를 추가할 수 있습니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                   CommandRegistry                        │
//! │  entries: "mcengine:economyapiexample" -> Arc<Command>   │
//! │  labels:  "economyapiexample" -> "mcengine:..."          │
//! └─────────────────────────────────────────────────────────┘
//!            ▲
//!            │ register(namespace, Arc<DynamicCommand>)
//!   ┌────────┴────────┐
//!   │ DynamicCommand  │ = name + description + usage
//!   │                 │   + CommandHandler + TabCompleter
//!   └─────────────────┘
//! ```

mod command;
mod entry;
mod map;
mod traits;

pub use command::DynamicCommand;
pub use entry::{namespaced_key, CommandEntry};
pub use map::CommandRegistry;
pub use traits::{Command, CommandHandler, RegistryEvent, TabCompleter};
