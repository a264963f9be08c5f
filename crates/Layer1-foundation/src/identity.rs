//! Identity Registry - 프로세스 전역 확장 식별자 테이블
//!
//! 호스트는 이 테이블로 로드된 확장의 고정 ID를 조회합니다.
//! 키는 확장 종류(예: `"economy-api-example"`), 값은 확장이 스스로 정한 ID입니다.

use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

lazy_static::lazy_static! {
    static ref GLOBAL_IDENTITIES: IdentityRegistry = IdentityRegistry::new();
}

/// 확장 식별자 테이블
#[derive(Debug, Default)]
pub struct IdentityRegistry {
    ids: RwLock<HashMap<String, String>>,
}

impl IdentityRegistry {
    /// 새 (비어있는) 테이블 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 프로세스 전역 테이블
    pub fn global() -> &'static IdentityRegistry {
        &GLOBAL_IDENTITIES
    }

    /// ID 설정 (기존 값은 덮어씀)
    pub fn set_id(&self, key: impl Into<String>, id: impl Into<String>) {
        let key = key.into();
        let id = id.into();
        debug!("Identity set: {} -> {}", key, id);
        self.ids.write().insert(key, id);
    }

    /// ID 조회
    pub fn get_id(&self, key: &str) -> Option<String> {
        self.ids.read().get(key).cloned()
    }

    /// 등록된 키 수
    pub fn len(&self) -> usize {
        self.ids.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let registry = IdentityRegistry::new();
        assert!(registry.get_id("economy").is_none());

        registry.set_id("economy", "first");
        registry.set_id("economy", "second");

        assert_eq!(registry.get_id("economy").as_deref(), Some("second"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_global_is_shared() {
        IdentityRegistry::global().set_id("identity-test-key", "shared");
        assert_eq!(
            IdentityRegistry::global().get_id("identity-test-key").as_deref(),
            Some("shared")
        );
    }
}
