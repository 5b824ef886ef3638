use std::{fmt, io};

/// Errors reported by logger construction and `close()`.
///
/// Failures while writing a line are never reported through this type;
/// they are counted by the line writer instead.
#[derive(Debug)]
pub enum LogError {
    /// The sink could not be opened, flushed or closed.
    Io(io::Error),
    /// No local syslog daemon socket accepted a connection.
    SyslogUnavailable(io::Error),
    /// The tag cannot be handed to the system logger (interior NUL byte).
    InvalidTag(String),
    /// The logging configuration could not be read or is invalid.
    Config(String),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use LogError::*;
        match self {
            Io(e) => write!(f, "log sink i/o error: {e}"),
            SyslogUnavailable(e) => write!(f, "unable to connect to the syslog daemon: {e}"),
            InvalidTag(tag) => write!(f, "invalid log tag: {tag:?}"),
            Config(msg) => write!(f, "invalid logging configuration: {msg}"),
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogError::Io(e) | LogError::SyslogUnavailable(e) => Some(e),
            LogError::InvalidTag(_) | LogError::Config(_) => None,
        }
    }
}

impl From<io::Error> for LogError {
    fn from(e: io::Error) -> Self {
        LogError::Io(e)
    }
}
