//! Error types for MCEngine
//!
//! 호스트/확장 전반의 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// MCEngine 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 명령어 레지스트리 관련
    // ========================================================================
    /// 호스트가 해당 기능을 노출하지 않음 (예: 명령어 레지스트리)
    #[error("Host capability unavailable: {0}")]
    CapabilityUnavailable(String),

    /// 레지스트리를 얻었지만 변경할 수 없음
    #[error("Command registry access failed: {0}")]
    RegistryAccess(String),

    #[error("Duplicate command: {0}")]
    DuplicateCommand(String),

    #[error("Command not found: {0}")]
    CommandNotFound(String),

    // ========================================================================
    // 확장/이벤트 관련
    // ========================================================================
    #[error("Extension error: {0}")]
    Extension(String),

    #[error("Extension not found: {0}")]
    ExtensionNotFound(String),

    #[error("Listener error: {0}")]
    Listener(String),

    // ========================================================================
    // 일반
    // ========================================================================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // 기타
    // ========================================================================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// 레지스트리 획득/변경 실패인지 확인
    pub fn is_registration_access(&self) -> bool {
        matches!(
            self,
            Error::CapabilityUnavailable(_) | Error::RegistryAccess(_)
        )
    }

    /// 기능 부재 에러 생성 헬퍼
    pub fn capability(name: impl Into<String>) -> Self {
        Error::CapabilityUnavailable(name.into())
    }
}

// ============================================================================
// From 구현 (추가 변환)
// ============================================================================

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Internal(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Internal(s.to_string())
    }
}
