//! Claude Code discovery and readiness.
//!
//! This module answers the two questions the Claude Desktop bootstrap asks
//! before it tries to manage its own copy of Claude Code: where is the
//! externally installed binary, and is it ready?
//!
//! # Modules
//!
//! - [`resolver`] - Environment-driven lookup and the [`ReadinessProbe`] interface
//! - [`status`] - Readiness status values
//! - [`log`] - Sink for the readiness log record

pub mod log;
pub mod resolver;
pub mod status;

pub use log::{LogRecord, RecordingStatusLog, StatusLog, TracingStatusLog, LOG_TAG, READY_MESSAGE};
pub use resolver::{
    check_claude_ready, claude_code_path, ClaudeCodeLocator, ReadinessProbe, CLAUDE_CODE_PATH_VAR,
};
pub use status::ReadinessStatus;
