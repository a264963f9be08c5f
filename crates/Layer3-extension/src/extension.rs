//! ExampleEconomyApi - Economy API 예제 확장
//!
//! 로드 시 이벤트 리스너 하나와 `/economyapiexample` 명령어 하나를 등록합니다.

use crate::accessor::{CommandRegistryAccessor, HostRegistryAccessor};
use crate::command::EconomyApiCommand;
use crate::listener::EconomyApiListener;
use crate::tabcompleter::EconomyApiTabCompleter;
use mcengine_core::{
    CommandEntry, DynamicCommand, Extension, ExtensionKind, ExtensionManifest, ExtensionVersion,
    Host, LoadOutcome,
};
use mcengine_foundation::{ExtensionLogger, IdentityRegistry, Result};
use parking_lot::RwLock;
use std::any::Any;
use std::sync::Arc;
use tracing::debug;

/// 고정 확장 ID
pub const EXTENSION_ID: &str = "mcengine-economy-api-example";

/// 전역 식별자 테이블 키
pub const IDENTITY_KEY: &str = "economy-api-example";

/// 로거 이름
pub const LOGGER_NAME: &str = "EconomyExampleAPI";

pub const COMMAND_NAME: &str = "economyapiexample";
pub const COMMAND_DESCRIPTION: &str = "Economy API example command.";
pub const COMMAND_USAGE: &str = "/economyapiexample";

/// Economy API 예제 확장
pub struct ExampleEconomyApi {
    /// `on_load`에서 생성, `on_disload`에서 해제
    logger: RwLock<Option<ExtensionLogger>>,

    accessor: Box<dyn CommandRegistryAccessor>,
}

impl ExampleEconomyApi {
    /// 호스트 공개 기능으로 레지스트리를 얻는 확장 생성
    pub fn new() -> Self {
        Self::with_accessor(HostRegistryAccessor)
    }

    /// 레지스트리 접근 방식 지정
    pub fn with_accessor(accessor: impl CommandRegistryAccessor + 'static) -> Self {
        Self {
            logger: RwLock::new(None),
            accessor: Box::new(accessor),
        }
    }

    /// 현재 로거 (로드 전/언로드 후에는 None)
    pub fn logger(&self) -> Option<ExtensionLogger> {
        self.logger.read().clone()
    }

    /// 리스너 구독 → 레지스트리 획득 → 명령어 등록
    fn register(&self, host: &dyn Host, logger: &ExtensionLogger) -> Result<CommandEntry> {
        host.event_bus()
            .register_listener(Arc::new(EconomyApiListener::new(host.name(), logger.clone())))?;

        let registry = self.accessor.access_registry(host)?;

        let command = DynamicCommand::new(
            COMMAND_NAME,
            EconomyApiCommand::new(),
            EconomyApiTabCompleter::new(),
        )
        .with_description(COMMAND_DESCRIPTION)
        .with_usage(COMMAND_USAGE);

        registry.register(&host.namespace(), Arc::new(command))
    }
}

impl Default for ExampleEconomyApi {
    fn default() -> Self {
        Self::new()
    }
}

impl Extension for ExampleEconomyApi {
    fn manifest(&self) -> ExtensionManifest {
        ExtensionManifest::new(EXTENSION_ID, LOGGER_NAME, ExtensionKind::Api)
            .with_version(ExtensionVersion::new(1, 0, 0))
            .with_description("Registers the /economyapiexample command and related event listeners.")
    }

    fn id(&self) -> &'static str {
        EXTENSION_ID
    }

    fn on_load(&self, host: &dyn Host) -> LoadOutcome {
        let logger = ExtensionLogger::new(host.log_sink(), ExtensionKind::Api.category(), LOGGER_NAME);
        *self.logger.write() = Some(logger.clone());

        match self.register(host, &logger) {
            Ok(entry) => {
                debug!("Registered {} (label claimed: {})", entry.key(), entry.claimed_label);
                logger.info("Enabled successfully.");
                LoadOutcome::Loaded
            }
            Err(e) => {
                debug!(error = ?e, "registration failed");
                logger.warning(format!("Failed to initialize ExampleEconomyAPI: {}", e));
                LoadOutcome::Degraded(e)
            }
        }
    }

    fn on_disload(&self, _host: &dyn Host) {
        if let Some(logger) = self.logger.write().take() {
            logger.info("Disabled.");
        }
    }

    fn set_id(&self, requested: &str) {
        if requested != EXTENSION_ID {
            debug!("Ignoring requested id '{}', using '{}'", requested, EXTENSION_ID);
        }
        IdentityRegistry::global().set_id(IDENTITY_KEY, EXTENSION_ID);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
