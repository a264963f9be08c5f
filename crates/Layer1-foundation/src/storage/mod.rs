//! Storage module for MCEngine
//!
//! - `json`: JSON - 설정 파일 저장/로드

mod json;

pub use json::JsonStore;
