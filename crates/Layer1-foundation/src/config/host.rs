//! Host Config - 호스트 프로세스 설정
//!
//! `<server>/mcengine/mcengine.json`에서 로드되며, CLI 플래그로 덮어쓸 수 있음

use crate::storage::JsonStore;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 설정 파일명
pub const HOST_CONFIG_FILE: &str = "mcengine.json";

/// 호스트 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostConfig {
    /// 호스트 이름 (소문자화하여 명령어 네임스페이스로 사용)
    #[serde(default = "default_name")]
    pub name: String,

    /// 로그 레벨 (tracing EnvFilter 문법)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// 늦게 로드된 확장에 명령어 레지스트리를 노출할지 여부
    #[serde(default = "default_true")]
    pub expose_command_registry: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
            expose_command_registry: true,
        }
    }
}

impl HostConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Load / Save
    // ========================================================================

    /// 현재 서버 디렉토리에서 로드 (파일이 없으면 기본값)
    pub fn load() -> Result<Self> {
        let store = JsonStore::current_server()?;
        Ok(store
            .load_optional::<HostConfig>(HOST_CONFIG_FILE)?
            .unwrap_or_default())
    }

    /// 지정된 파일에서 로드
    ///
    /// 파일이 없으면 기본값, 파싱에 실패하면 `Error::Config`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or(HOST_CONFIG_FILE);
        let store = JsonStore::new(dir);
        Ok(store.load_optional::<HostConfig>(filename)?.unwrap_or_default())
    }

    /// 서버 디렉토리에 저장
    pub fn save(&self, root: &Path) -> Result<()> {
        JsonStore::server(root).save(HOST_CONFIG_FILE, self)
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_expose_command_registry(mut self, expose: bool) -> Self {
        self.expose_command_registry = expose;
        self
    }

    /// 명령어 네임스페이스 (호스트 이름 소문자)
    pub fn namespace(&self) -> String {
        self.name.to_lowercase()
    }
}

fn default_name() -> String {
    "MCEngine".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}
