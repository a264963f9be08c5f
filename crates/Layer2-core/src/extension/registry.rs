//! Extension Registry - 로드된 확장 저장소

use super::manifest::ExtensionManifest;
use super::traits::{Extension, ExtensionStatus};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// 확장 정보
struct ExtensionInfo {
    extension: Arc<dyn Extension>,
    status: ExtensionStatus,
    load_order: usize,
}

#[derive(Default)]
struct Inner {
    extensions: HashMap<String, ExtensionInfo>,
    load_counter: usize,
}

/// 확장 레지스트리 - 매니페스트 ID 기준
#[derive(Default)]
pub struct ExtensionRegistry {
    inner: RwLock<Inner>,
}

impl ExtensionRegistry {
    /// 새 레지스트리 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 확장 등록 (이미 있으면 false)
    pub fn register(&self, extension: Arc<dyn Extension>, status: ExtensionStatus) -> bool {
        let manifest = extension.manifest();
        let id = manifest.id.clone();

        let mut inner = self.inner.write();
        if inner.extensions.contains_key(&id) {
            warn!("Extension {} is already registered", id);
            return false;
        }

        inner.load_counter += 1;
        let load_order = inner.load_counter;
        inner.extensions.insert(
            id.clone(),
            ExtensionInfo {
                extension,
                status,
                load_order,
            },
        );

        info!("Registered extension: {} (v{})", id, manifest.version);
        true
    }

    /// 확장 등록 해제
    pub fn unregister(&self, id: &str) -> Option<Arc<dyn Extension>> {
        let removed = self.inner.write().extensions.remove(id)?;
        info!("Unregistered extension: {}", id);
        Some(removed.extension)
    }

    /// 확장 조회
    pub fn get(&self, id: &str) -> Option<Arc<dyn Extension>> {
        self.inner
            .read()
            .extensions
            .get(id)
            .map(|info| Arc::clone(&info.extension))
    }

    /// 확장 상태 조회
    pub fn get_status(&self, id: &str) -> Option<ExtensionStatus> {
        self.inner.read().extensions.get(id).map(|info| info.status)
    }

    /// 모든 확장 매니페스트 (로드 순서대로)
    pub fn list(&self) -> Vec<ExtensionManifest> {
        let inner = self.inner.read();
        let mut infos: Vec<_> = inner.extensions.values().collect();
        infos.sort_by_key(|info| info.load_order);
        infos.iter().map(|info| info.extension.manifest()).collect()
    }

    /// 로드 순서에 따라 정렬된 확장 ID 목록
    pub fn load_order(&self) -> Vec<String> {
        let inner = self.inner.read();
        let mut ordered: Vec<_> = inner.extensions.iter().collect();
        ordered.sort_by_key(|(_, info)| info.load_order);
        ordered.into_iter().map(|(id, _)| id.clone()).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.read().extensions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.inner.read().extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().extensions.is_empty()
    }
}
