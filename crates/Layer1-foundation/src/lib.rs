//! # mcengine-foundation
//!
//! Foundation layer for MCEngine:
//! - Error: 공통 에러 타입
//! - Config: 호스트 설정 (HostConfig)
//! - Storage: JsonStore (설정 파일)
//! - Identity: 프로세스 전역 확장 ID 테이블
//! - Logger: 확장 로거 + 로그 싱크

pub mod config;
pub mod error;
pub mod identity;
pub mod logger;
pub mod storage;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config / Storage
// ============================================================================
pub use config::{HostConfig, HOST_CONFIG_FILE};
pub use storage::JsonStore;

// ============================================================================
// Identity / Logger
// ============================================================================
pub use identity::IdentityRegistry;
pub use logger::{BufferSink, ExtensionLogger, LogLevel, LogRecord, LogSink, TracingSink};
