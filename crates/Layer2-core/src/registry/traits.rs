//! Command Traits - 명령어 레지스트리가 요구하는 인터페이스

use crate::host::CommandSender;
use serde::{Deserialize, Serialize};

// ============================================================================
// Command - 레지스트리에 등록 가능한 명령어
// ============================================================================

/// 레지스트리가 모든 명령어에 요구하는 기능 집합
pub trait Command: Send + Sync {
    /// 호출 이름 (예: "economyapiexample")
    fn name(&self) -> &str;

    /// 짧은 설명
    fn description(&self) -> &str {
        ""
    }

    /// 사용법 문자열 (예: "/economyapiexample")
    fn usage(&self) -> &str;

    /// 명령어 실행
    fn execute(&self, sender: &dyn CommandSender, label: &str, args: &[String]) -> bool;

    /// 탭 완성 후보 (순서 유지, 비어있으면 후보 없음)
    fn tab_complete(&self, sender: &dyn CommandSender, alias: &str, args: &[String])
        -> Vec<String>;
}

// ============================================================================
// CommandHandler / TabCompleter
// ============================================================================

/// 명령어 실행 핸들러
pub trait CommandHandler: Send + Sync {
    fn on_command(
        &self,
        sender: &dyn CommandSender,
        command: &dyn Command,
        label: &str,
        args: &[String],
    ) -> bool;
}

/// 탭 완성기
pub trait TabCompleter: Send + Sync {
    fn on_tab_complete(
        &self,
        sender: &dyn CommandSender,
        command: &dyn Command,
        alias: &str,
        args: &[String],
    ) -> Vec<String>;
}

// ============================================================================
// RegistryEvent - 레지스트리 변경 이벤트
// ============================================================================

/// 레지스트리 변경 이벤트
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// 명령어 등록됨
    Registered {
        key: String,
        namespace: String,
        label_claimed: bool,
    },

    /// 명령어 등록 해제됨
    Unregistered { key: String },
}

impl RegistryEvent {
    /// 이벤트 키 반환
    pub fn key(&self) -> &str {
        match self {
            Self::Registered { key, .. } => key,
            Self::Unregistered { key } => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_event_key() {
        let event = RegistryEvent::Registered {
            key: "mcengine:economyapiexample".into(),
            namespace: "mcengine".into(),
            label_claimed: true,
        };
        assert_eq!(event.key(), "mcengine:economyapiexample");

        let event = RegistryEvent::Unregistered { key: "a:b".into() };
        assert_eq!(event.key(), "a:b");
    }
}
