//! Package-level logging to a process-wide default logger.
//!
//! The default logger writes to standard error with an empty tag, so the
//! crate can be used without constructing anything:
//!
//! ```rust
//! distillog::infoln(&[&"service", &"started"]);
//! distillog::errorf(format_args!("retrying in {}s", 5));
//! ```
//!
//! Replace it with [`set_default`] or [`set_output`] during start-up, before
//! other threads begin logging.

use std::{
    fmt,
    sync::{Arc, OnceLock, PoisonError, RwLock},
};

use crate::log::{logger::Logger, log_sink::LogSink, stream_logger::StreamLogger};

static STD: OnceLock<RwLock<Arc<dyn Logger>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<dyn Logger>> {
    STD.get_or_init(|| RwLock::new(Arc::new(StreamLogger::stderr(""))))
}

/// Returns the current default logger.
#[must_use]
pub fn default_logger() -> Arc<dyn Logger> {
    slot()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replaces the default logger wholesale and returns the previous one, so
/// the caller can close it.
///
/// Call this before any concurrent logging starts. A call that already
/// fetched the previous logger may still write to it after the swap.
pub fn set_default(logger: Arc<dyn Logger>) -> Arc<dyn Logger> {
    let mut current = slot().write().unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *current, logger)
}

/// Points the default logger at `sink`, keeping the empty tag.
///
/// Same restrictions as [`set_default`].
pub fn set_output(sink: impl LogSink + 'static) -> Arc<dyn Logger> {
    set_default(Arc::new(StreamLogger::new("", sink)))
}

/// Logs a message at debug level to the default logger.
pub fn debugf(args: fmt::Arguments<'_>) {
    default_logger().debugf(args);
}

/// Logs a message at debug level to the default logger.
pub fn debugln(args: &[&dyn fmt::Display]) {
    default_logger().debugln(args);
}

/// Logs a message at info level to the default logger.
pub fn infof(args: fmt::Arguments<'_>) {
    default_logger().infof(args);
}

/// Logs a message at info level to the default logger.
pub fn infoln(args: &[&dyn fmt::Display]) {
    default_logger().infoln(args);
}

/// Logs a message at warn level to the default logger.
pub fn warningf(args: fmt::Arguments<'_>) {
    default_logger().warningf(args);
}

/// Logs a message at warn level to the default logger.
pub fn warningln(args: &[&dyn fmt::Display]) {
    default_logger().warningln(args);
}

/// Logs a message at error level to the default logger.
pub fn errorf(args: fmt::Arguments<'_>) {
    default_logger().errorf(args);
}

/// Logs a message at error level to the default logger.
pub fn errorln(args: &[&dyn fmt::Display]) {
    default_logger().errorln(args);
}
