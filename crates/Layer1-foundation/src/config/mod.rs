//! Config - 호스트 설정 관리
//!
//! - `host.rs` - HostConfig (이름, 로그 레벨, 레지스트리 노출 여부)

mod host;

pub use host::{HostConfig, HOST_CONFIG_FILE};
