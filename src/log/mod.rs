pub mod line_writer;
pub mod log_error;
pub mod log_level;
pub mod log_macros;
pub mod log_msg;
pub mod log_output;
pub mod log_sink;
pub mod logger;
pub mod noop_log_sink;
pub mod std_logger;
pub mod stream_logger;
#[cfg(unix)]
pub mod syslog_logger;
pub mod timestamp;
pub use noop_log_sink::NoopCloseSink;
