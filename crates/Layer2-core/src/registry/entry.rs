//! Registry Entry - 등록된 명령어의 메타데이터

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 레지스트리 항목 메타데이터
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEntry {
    /// 네임스페이스 (호스트 이름 소문자)
    pub namespace: String,

    /// 명령어 이름 (소문자)
    pub name: String,

    pub description: String,

    pub usage: String,

    /// 등록 시간
    pub registered_at: DateTime<Utc>,

    /// 등록 시점에 bare label을 차지했는지 여부
    pub claimed_label: bool,
}

impl CommandEntry {
    /// `"<namespace>:<name>"`
    pub fn key(&self) -> String {
        namespaced_key(&self.namespace, &self.name)
    }
}

/// 네임스페이스 키 생성
pub fn namespaced_key(namespace: &str, name: &str) -> String {
    format!("{}:{}", namespace.to_lowercase(), name.to_lowercase())
}
