//! Extension Logger - 확장 식별 정보가 붙는 로거
//!
//! 모든 메시지는 `"[<category>][<name>] <msg>"` 형식으로 호스트의 로그 싱크에 전달됩니다.
//! 싱크 오류는 조용히 무시합니다 (best-effort).

use crate::Result;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// LogLevel
// ============================================================================

/// 확장 로거가 노출하는 두 가지 레벨
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warning,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

// ============================================================================
// LogSink - 호스트가 제공하는 로그 출력 대상
// ============================================================================

/// 로그 싱크 trait
pub trait LogSink: Send + Sync {
    /// 이미 포맷된 한 줄 기록
    fn write(&self, level: LogLevel, line: &str) -> Result<()>;
}

/// tracing으로 전달하는 기본 싱크
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, level: LogLevel, line: &str) -> Result<()> {
        match level {
            LogLevel::Info => tracing::info!(target: "mcengine::extension", "{}", line),
            LogLevel::Warning => tracing::warn!(target: "mcengine::extension", "{}", line),
        }
        Ok(())
    }
}

/// 기록된 로그 한 줄
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub line: String,
}

/// 메모리에 기록하는 싱크 (출력 캡처용)
#[derive(Debug, Default)]
pub struct BufferSink {
    records: Mutex<Vec<LogRecord>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 모든 기록
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// 특정 레벨의 줄만
    pub fn lines(&self, level: LogLevel) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.line.clone())
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.lines(LogLevel::Warning)
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl LogSink for BufferSink {
    fn write(&self, level: LogLevel, line: &str) -> Result<()> {
        self.records.lock().push(LogRecord {
            level,
            line: line.to_string(),
        });
        Ok(())
    }
}

// ============================================================================
// ExtensionLogger
// ============================================================================

/// 확장 로거
#[derive(Clone)]
pub struct ExtensionLogger {
    category: String,
    name: String,
    sink: Arc<dyn LogSink>,
}

impl ExtensionLogger {
    /// 새 로거 생성
    ///
    /// `category`는 확장 종류 (예: `"API"`), `name`은 확장 표시 이름.
    pub fn new(
        sink: Arc<dyn LogSink>,
        category: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            sink,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `"[<category>][<name>] <msg>"`
    pub fn format(&self, msg: &str) -> String {
        format!("[{}][{}] {}", self.category, self.name, msg)
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        self.log(LogLevel::Info, msg.as_ref());
    }

    pub fn warning(&self, msg: impl AsRef<str>) {
        self.log(LogLevel::Warning, msg.as_ref());
    }

    fn log(&self, level: LogLevel, msg: &str) {
        let _ = self.sink.write(level, &self.format(msg));
    }
}

impl std::fmt::Debug for ExtensionLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionLogger")
            .field("category", &self.category)
            .field("name", &self.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    struct FailingSink;

    impl LogSink for FailingSink {
        fn write(&self, _level: LogLevel, _line: &str) -> Result<()> {
            Err(Error::Internal("sink closed".into()))
        }
    }

    #[test]
    fn test_format_and_forward() {
        let sink = Arc::new(BufferSink::new());
        let logger = ExtensionLogger::new(sink.clone(), "API", "EconomyExampleAPI");

        logger.info("Enabled successfully.");
        logger.warning("Failed to do a thing");

        assert_eq!(
            sink.records(),
            vec![
                LogRecord {
                    level: LogLevel::Info,
                    line: "[API][EconomyExampleAPI] Enabled successfully.".into(),
                },
                LogRecord {
                    level: LogLevel::Warning,
                    line: "[API][EconomyExampleAPI] Failed to do a thing".into(),
                },
            ]
        );
    }

    #[test]
    fn test_sink_failure_is_swallowed() {
        let logger = ExtensionLogger::new(Arc::new(FailingSink), "API", "Quiet");
        logger.info("nobody hears this");
        logger.warning("or this");
    }

    #[test]
    fn test_tracing_sink_never_fails() {
        assert!(TracingSink.write(LogLevel::Warning, "line").is_ok());
    }
}
