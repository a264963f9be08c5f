//! # mcengine-economy-api-example
//!
//! Layer3 - Economy API 예제 확장
//!
//! 로드되면 다음을 등록합니다:
//! - `EconomyApiListener` → 호스트 이벤트 버스
//! - `/economyapiexample` → 호스트 명령어 레지스트리 (`CommandRegistryAccessor`로 획득)
//!
//! ```ignore
//! let manager = ExtensionManager::new(host);
//! manager.load(Arc::new(ExampleEconomyApi::new())).await?;
//! ```

mod accessor;
mod command;
mod extension;
mod listener;
mod tabcompleter;

pub use accessor::{CommandRegistryAccessor, HostRegistryAccessor};
pub use command::EconomyApiCommand;
pub use extension::{
    ExampleEconomyApi, COMMAND_DESCRIPTION, COMMAND_NAME, COMMAND_USAGE, EXTENSION_ID,
    IDENTITY_KEY, LOGGER_NAME,
};
pub use listener::{EconomyApiListener, LISTENER_NAME};
pub use tabcompleter::EconomyApiTabCompleter;
