//! Sink for the readiness log record.
//!
//! The locator produces exactly one call shape: a tag, a fixed message and
//! the resolved path. Where that record ends up is up to the sink.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Tag prefixed to every readiness record.
pub const LOG_TAG: &str = "[CCD]";

/// Message logged when Claude Code is found through the Nix wrapper.
pub const READY_MESSAGE: &str = "Status: ready (Nix)";

/// Receives informational readiness records.
pub trait StatusLog: Send + Sync {
    /// Record that `path` was found.
    fn info(&self, tag: &str, message: &str, path: &Path);
}

/// Default sink: forwards records to `tracing` at INFO level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingStatusLog;

impl StatusLog for TracingStatusLog {
    fn info(&self, tag: &str, message: &str, path: &Path) {
        tracing::info!(path = %path.display(), "{} {}", tag, message);
    }
}

/// A single captured readiness record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub tag: String,
    pub message: String,
    pub path: PathBuf,
}

/// Sink that keeps every record in memory.
///
/// # Example
///
/// ```
/// use claude_desktop_nix::locator::{RecordingStatusLog, StatusLog};
/// use std::path::Path;
///
/// let log = RecordingStatusLog::new();
/// log.info("[CCD]", "Status: ready (Nix)", Path::new("/opt/bin/claude"));
/// assert_eq!(log.records().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingStatusLog {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingStatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records captured so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

impl StatusLog for RecordingStatusLog {
    fn info(&self, tag: &str, message: &str, path: &Path) {
        if let Ok(mut records) = self.records.lock() {
            records.push(LogRecord {
                tag: tag.to_string(),
                message: message.to_string(),
                path: path.to_path_buf(),
            });
        }
    }
}
