//! Structured logging for conformance runs.
//!
//! Provides:
//! - [`LogEntry`]: JSONL record for one case outcome or lifecycle event.
//! - [`LogEmitter`]: writes JSONL lines to a file or an in-memory buffer.
//!
//! Logging is observability only; emit errors never affect the pass/fail
//! gate.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Error,
    Fatal,
}

/// Case outcome. Fail-fast means a run log contains at most one `fail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
}

/// One structured log record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub event: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LogEntry {
    /// New entry stamped with the current wall clock.
    #[must_use]
    pub fn new(level: LogLevel, event: &str) -> Self {
        Self {
            timestamp: format!("{:?}", std::time::SystemTime::now()),
            level,
            event: event.to_string(),
            case: None,
            value: None,
            expected: None,
            outcome: None,
            message: None,
        }
    }

    #[must_use]
    pub fn with_case(mut self, case: &str, value: f32, expected: f32) -> Self {
        self.case = Some(case.to_string());
        self.value = Some(value);
        self.expected = Some(expected);
        self
    }

    #[must_use]
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }
}

/// Writes JSONL lines to a sink.
pub struct LogEmitter {
    writer: Box<dyn Write>,
}

impl LogEmitter {
    /// Create an emitter that writes to a file.
    pub fn to_file(path: &Path) -> std::io::Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self {
            writer: Box::new(std::io::BufWriter::new(file)),
        })
    }

    /// Create an emitter that writes to an in-memory buffer (for testing).
    #[must_use]
    pub fn to_buffer() -> Self {
        Self {
            writer: Box::new(Vec::new()),
        }
    }

    /// Emit one entry as a single JSON line.
    pub fn emit(&mut self, entry: &LogEntry) -> std::io::Result<()> {
        let line = serde_json::to_string(entry).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{line}")
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}
