//! Extension Manager - 확장 라이프사이클 관리
//!
//! 호스트 쪽에서 `set_id` → `on_load` → (`on_disload`) 순서로 확장을 구동합니다.
//! 확장 콜백은 직렬로 호출되므로 여러 확장의 `on_load`가 겹치지 않습니다.

use super::events::{EventType, ServerEvent};
use super::registry::ExtensionRegistry;
use super::traits::{Extension, ExtensionStatus, LoadOutcome};
use crate::host::Host;
use mcengine_foundation::{Error, Result};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{info, warn};

/// 확장 매니저 설정
#[derive(Debug, Clone)]
pub struct ExtensionManagerConfig {
    /// `Degraded` 로드를 허용할지 여부 (false면 에러로 처리하고 언로드)
    pub continue_on_degraded: bool,
}

impl Default for ExtensionManagerConfig {
    fn default() -> Self {
        Self {
            continue_on_degraded: true,
        }
    }
}

/// 확장 매니저
pub struct ExtensionManager {
    host: Arc<dyn Host>,
    registry: ExtensionRegistry,
    config: ExtensionManagerConfig,

    /// 라이프사이클 콜백 직렬화
    lifecycle: Mutex<()>,
}

impl ExtensionManager {
    /// 새 매니저 생성
    pub fn new(host: Arc<dyn Host>) -> Self {
        Self::with_config(host, ExtensionManagerConfig::default())
    }

    /// 설정으로 생성
    pub fn with_config(host: Arc<dyn Host>, config: ExtensionManagerConfig) -> Self {
        Self {
            host,
            registry: ExtensionRegistry::new(),
            config,
            lifecycle: Mutex::new(()),
        }
    }

    // ========================================================================
    // 확장 로드/언로드
    // ========================================================================

    /// 확장 로드
    ///
    /// `Degraded` 결과는 기본적으로 에러가 아니며, 사유는 반환값으로 전달됩니다.
    pub async fn load(&self, extension: Arc<dyn Extension>) -> Result<LoadOutcome> {
        let manifest = extension.manifest();
        let id = manifest.id.clone();

        // 중복 검사 → on_load → 등록은 하나의 lifecycle lock 안에서
        let (outcome, status) = {
            let _guard = self.lifecycle.lock();

            if self.registry.contains(&id) {
                return Err(Error::Extension(format!("Extension {} is already loaded", id)));
            }

            info!("Loading extension: {} (v{})", id, manifest.version);
            extension.set_id(&id);
            let outcome = extension.on_load(self.host.as_ref());

            let status = match outcome {
                LoadOutcome::Loaded => ExtensionStatus::Active,
                LoadOutcome::Degraded(e) if !self.config.continue_on_degraded => {
                    warn!("Extension {} failed to load: {}", id, e);
                    extension.on_disload(self.host.as_ref());
                    return Err(e);
                }
                LoadOutcome::Degraded(ref e) => {
                    warn!("Extension {} loaded degraded: {}", id, e);
                    ExtensionStatus::Degraded
                }
            };

            self.registry.register(Arc::clone(&extension), status);
            (outcome, status)
        };

        self.host
            .event_bus()
            .publish(ServerEvent::new(
                EventType::ExtensionLoaded,
                serde_json::json!({ "extension_id": id, "status": status.to_string() }),
                "extension_manager",
            ))
            .await;

        info!("Extension {} loaded ({})", id, status);
        Ok(outcome)
    }

    /// 확장 언로드
    ///
    /// 확장이 등록한 명령어/리스너는 호스트가 정리하지 않습니다.
    pub async fn disload(&self, id: &str) -> Result<()> {
        let extension = self
            .registry
            .get(id)
            .ok_or_else(|| Error::ExtensionNotFound(id.to_string()))?;

        info!("Unloading extension: {}", id);
        {
            let _guard = self.lifecycle.lock();
            extension.on_disload(self.host.as_ref());
        }
        self.registry.unregister(id);

        self.host
            .event_bus()
            .publish(ServerEvent::new(
                EventType::ExtensionUnloaded,
                serde_json::json!({ "extension_id": id }),
                "extension_manager",
            ))
            .await;

        info!("Extension {} unloaded", id);
        Ok(())
    }

    /// 모든 확장 언로드 (로드 역순)
    pub async fn disload_all(&self) {
        for id in self.registry.load_order().into_iter().rev() {
            if let Err(e) = self.disload(&id).await {
                warn!("Failed to unload extension {}: {}", id, e);
            }
        }
    }

    // ========================================================================
    // 접근자
    // ========================================================================

    pub fn host(&self) -> &Arc<dyn Host> {
        &self.host
    }

    pub fn registry(&self) -> &ExtensionRegistry {
        &self.registry
    }

    pub fn status(&self, id: &str) -> Option<ExtensionStatus> {
        self.registry.get_status(id)
    }

    /// 로드된 확장 수
    pub fn extension_count(&self) -> usize {
        self.registry.len()
    }
}
