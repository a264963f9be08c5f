//! Extension Manifest - 확장 메타데이터 정의

use serde::{Deserialize, Serialize};

/// 확장 버전
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtensionVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ExtensionVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl std::fmt::Display for ExtensionVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Default for ExtensionVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// 확장 종류 (로거 카테고리로도 사용)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtensionKind {
    Api,
    AddOn,
    Dlc,
}

impl ExtensionKind {
    /// 로그 카테고리 표기
    pub fn category(&self) -> &'static str {
        match self {
            Self::Api => "API",
            Self::AddOn => "AddOn",
            Self::Dlc => "DLC",
        }
    }
}

impl std::fmt::Display for ExtensionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.category())
    }
}

/// 확장 매니페스트
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionManifest {
    /// 고유 ID (예: "mcengine-economy-api-example")
    pub id: String,

    /// 표시 이름 (로거 이름으로 사용)
    pub name: String,

    pub kind: ExtensionKind,

    pub version: ExtensionVersion,

    pub description: String,
}

impl ExtensionManifest {
    /// 새 매니페스트 생성
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ExtensionKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            version: ExtensionVersion::default(),
            description: String::new(),
        }
    }

    /// 빌더 패턴: 버전 설정
    pub fn with_version(mut self, version: ExtensionVersion) -> Self {
        self.version = version;
        self
    }

    /// 빌더 패턴: 설명 설정
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
