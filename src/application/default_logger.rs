//! The RMM default logger.
//!
//! `default_logger()` builds the library's logger on first use and returns the
//! same `&'static Logger` forever after. The output sink is chosen once, from
//! `RMM_DEBUG_LOG_FILE`: a non-empty value appends to that file, anything else
//! writes to stderr. Changing the variable after the first call has no effect.
//!
//! The log file is not opened until the first event is written, so a path in
//! a missing or read-only directory is reported by `tracing-subscriber` when
//! that write fails, never by `default_logger()` itself.

use crate::common::LoggerResult;
use crate::config::{LoggerConfig, LOG_FILE_ENV};
use crate::domains::{LogSink, Logger, PatternFormat};
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::util::SubscriberInitExt;

static DEFAULT_LOGGER: Lazy<Logger> = Lazy::new(|| LoggerConfig::default().build());

/// `[thread id][HH:MM:SS:micros][level] message`, thread id right-aligned and
/// level left-aligned, both six wide.
pub fn default_pattern() -> PatternFormat {
    PatternFormat
}

/// Non-empty value of `var` as a path. Unset and empty are the same thing here.
fn env_log_file(var: &str) -> Option<PathBuf> {
    env::var_os(var).filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Append to `path` when given, otherwise write to stderr.
pub fn sink_for(path: Option<PathBuf>) -> LogSink {
    match path {
        Some(path) => LogSink::append_file(path),
        None => LogSink::stderr(),
    }
}

pub fn select_sink_from(var: &str) -> LogSink {
    sink_for(env_log_file(var))
}

/// Sink for the default logger, chosen from `RMM_DEBUG_LOG_FILE`.
pub fn select_sink() -> LogSink {
    select_sink_from(LOG_FILE_ENV)
}

/// The process-wide RMM logger.
///
/// Concurrent first callers block until the single construction finishes. If
/// construction panics, that panic reaches the caller and every later call
/// panics as well.
pub fn default_logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

/// Make the default logger the global `tracing` dispatcher and route `log`
/// crate records through it.
pub fn install_default_logger() -> LoggerResult<()> {
    default_logger().dispatch().clone().try_init()?;
    Ok(())
}
