//! Command Registry Accessor - 호스트 명령어 레지스트리 획득
//!
//! 레지스트리를 얻는 방법은 이 어댑터 하나에만 둡니다. 나머지 코드는
//! `CommandRegistry`만 알고, 어떻게 얻었는지는 모릅니다.

use mcengine_core::{CommandRegistry, Host};
use mcengine_foundation::{Error, Result};
use std::sync::Arc;

/// 레지스트리 접근자 트레이트
pub trait CommandRegistryAccessor: Send + Sync {
    /// 호스트의 실제 레지스트리 반환
    ///
    /// 실패는 항상 복구 가능한 에러로 반환하며 패닉하지 않습니다.
    fn access_registry(&self, host: &dyn Host) -> Result<Arc<CommandRegistry>>;
}

/// 호스트의 공개 기능(`Host::command_registry`)을 사용하는 기본 접근자
#[derive(Debug, Clone, Copy, Default)]
pub struct HostRegistryAccessor;

impl CommandRegistryAccessor for HostRegistryAccessor {
    fn access_registry(&self, host: &dyn Host) -> Result<Arc<CommandRegistry>> {
        host.command_registry().ok_or_else(|| {
            Error::capability(format!(
                "{} does not expose its command registry",
                host.name()
            ))
        })
    }
}
