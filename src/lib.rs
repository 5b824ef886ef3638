//! distillog is a minimalistic leveled logger.
//!
//! It offers four levels (debug, info, warning, error), each in a formatted
//! (`infof`) and a line (`infoln`) style, and a choice of destination:
//! standard output, standard error, a discard sink, any caller-supplied
//! [`LogSink`], a file, or the local syslog daemon.
//!
//! Stream loggers render one line per call:
//!
//! ```text
//! Mon Jan 2 15:04:05 tag [INFO ] message
//! ```
//!
//! Either construct a logger, or use the package-level functions and macros
//! that route to a process-wide default logger writing to standard error:
//!
//! ```rust
//! use distillog::{Logger, StreamLogger};
//!
//! let log = StreamLogger::stdout("api");
//! log.infof(format_args!("listening on port {}", 8080));
//!
//! distillog::warningln!("cache", "miss", 42);
//! ```
//!
//! Log rotation is not provided; point a stream logger at a writer that
//! rotates if you need it.

/// INI-style configuration loading.
pub mod config;
/// Loggers, sinks and the line writer.
pub mod log;

pub use log::{
    line_writer::LineWriter,
    log_error::LogError,
    log_level::LogLevel,
    log_output::{LogOutput, logger_from_config},
    log_sink::LogSink,
    logger::Logger,
    noop_log_sink::NoopCloseSink,
    std_logger::{
        debugf, debugln, default_logger, errorf, errorln, infof, infoln, set_default, set_output,
        warningf, warningln,
    },
    stream_logger::StreamLogger,
};

#[cfg(unix)]
pub use log::syslog_logger::{SyslogFacility, SyslogLogger};
