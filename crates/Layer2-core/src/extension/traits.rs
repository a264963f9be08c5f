//! Extension traits - 핵심 확장 인터페이스

use super::manifest::ExtensionManifest;
use crate::host::Host;
use mcengine_foundation::{Error, Result};
use std::any::Any;

// ============================================================================
// LoadOutcome - on_load 결과
// ============================================================================

/// 확장 로드 결과
///
/// 로드 실패는 호스트를 중단시키지 않습니다. 확장은 `Degraded`로 남고
/// 사유를 호스트에 전달합니다.
#[derive(Debug)]
pub enum LoadOutcome {
    /// 모든 등록 성공
    Loaded,

    /// 일부 등록 실패 (확장은 로드된 것으로 간주)
    Degraded(Error),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    /// 실패 사유
    pub fn reason(&self) -> Option<&Error> {
        match self {
            Self::Loaded => None,
            Self::Degraded(e) => Some(e),
        }
    }

    /// `Result`로 변환
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Loaded => Ok(()),
            Self::Degraded(e) => Err(e),
        }
    }
}

impl From<Result<()>> for LoadOutcome {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => Self::Loaded,
            Err(e) => Self::Degraded(e),
        }
    }
}

// ============================================================================
// Extension Trait - 모든 확장이 구현해야 하는 인터페이스
// ============================================================================

/// 확장 트레이트
///
/// 라이프사이클 콜백은 호스트가 직렬로 호출하며, 중간에 대기하지 않습니다.
pub trait Extension: Send + Sync {
    /// 확장 매니페스트 반환
    fn manifest(&self) -> ExtensionManifest;

    /// 고정 식별자
    fn id(&self) -> &'static str;

    /// 확장 로드 시 호출
    ///
    /// 여기서 리스너와 명령어를 등록합니다.
    fn on_load(&self, host: &dyn Host) -> LoadOutcome;

    /// 확장 언로드 시 호출
    fn on_disload(&self, _host: &dyn Host) {}

    /// 호스트가 ID를 지정할 때 호출
    fn set_id(&self, requested: &str);

    /// 타입 캐스팅을 위한 헬퍼 (다운캐스팅 지원)
    fn as_any(&self) -> &dyn Any;
}

/// 확장 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionStatus {
    /// 정상 로드됨
    Active,

    /// 로드되었지만 일부 등록 실패
    Degraded,
}

impl std::fmt::Display for ExtensionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Degraded => write!(f, "degraded"),
        }
    }
}
