//! Logger that hands messages to the local syslog daemon.
//!
//! Messages go through libc `openlog`/`syslog`. The daemon adds its own
//! framing, so no timestamp, tag or level brackets are rendered here; only
//! the message text is built (formatted or space-joined).
//!
//! POSIX keeps a single `openlog` configuration per process. Creating a
//! second `SyslogLogger` replaces the ident and facility of the first.

use std::{
    ffi::{CStr, CString},
    fmt, io,
    os::unix::net::{UnixDatagram, UnixStream},
    ptr,
};

use crate::log::{log_error::LogError, log_level::LogLevel, logger::Logger};

/// Local daemon sockets, in the order they are tried.
pub const SYSLOG_SOCKETS: [&str; 3] = ["/dev/log", "/var/run/syslog", "/var/run/log"];

/// Syslog facility codes accepted by `openlog(3)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
#[repr(i32)]
pub enum SyslogFacility {
    User = libc::LOG_USER,
    #[default]
    Daemon = libc::LOG_DAEMON,
    Local0 = libc::LOG_LOCAL0,
    Local1 = libc::LOG_LOCAL1,
    Local2 = libc::LOG_LOCAL2,
    Local3 = libc::LOG_LOCAL3,
    Local4 = libc::LOG_LOCAL4,
    Local5 = libc::LOG_LOCAL5,
    Local6 = libc::LOG_LOCAL6,
    Local7 = libc::LOG_LOCAL7,
}

impl SyslogFacility {
    /// Parses a facility name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "user" => Some(Self::User),
            "daemon" => Some(Self::Daemon),
            "local0" => Some(Self::Local0),
            "local1" => Some(Self::Local1),
            "local2" => Some(Self::Local2),
            "local3" => Some(Self::Local3),
            "local4" => Some(Self::Local4),
            "local5" => Some(Self::Local5),
            "local6" => Some(Self::Local6),
            "local7" => Some(Self::Local7),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Daemon => "daemon",
            Self::Local0 => "local0",
            Self::Local1 => "local1",
            Self::Local2 => "local2",
            Self::Local3 => "local3",
            Self::Local4 => "local4",
            Self::Local5 => "local5",
            Self::Local6 => "local6",
            Self::Local7 => "local7",
        }
    }
}

impl fmt::Display for SyslogFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syslog priority used for each level.
#[must_use]
pub const fn priority(level: LogLevel) -> libc::c_int {
    match level {
        LogLevel::Debug => libc::LOG_DEBUG,
        LogLevel::Info => libc::LOG_INFO,
        LogLevel::Warn => libc::LOG_WARNING,
        LogLevel::Error => libc::LOG_ERR,
    }
}

#[derive(Debug)]
pub struct SyslogLogger {
    facility: SyslogFacility,
}

impl SyslogLogger {
    /// Connects to the local daemon with the `daemon` facility.
    ///
    /// # Panics
    ///
    /// Panics if no local syslog daemon is reachable. Logging setup is a
    /// startup precondition; use [`try_new`](Self::try_new) to handle the
    /// failure instead.
    pub fn new(tag: &str) -> Self {
        match Self::try_new(tag) {
            Ok(logger) => logger,
            Err(e) => panic!("{e}"),
        }
    }

    /// Connects to the local daemon with the `daemon` facility.
    ///
    /// # Errors
    ///
    /// - [`LogError::SyslogUnavailable`] if no daemon socket accepts a connection.
    /// - [`LogError::InvalidTag`] if `tag` contains a NUL byte.
    pub fn try_new(tag: &str) -> Result<Self, LogError> {
        Self::with_facility(tag, SyslogFacility::default())
    }

    /// Connects to the local daemon with the given facility.
    ///
    /// An empty tag lets the C library use the program name.
    ///
    /// # Errors
    ///
    /// See [`try_new`](Self::try_new).
    pub fn with_facility(tag: &str, facility: SyslogFacility) -> Result<Self, LogError> {
        let ident = CString::new(tag).map_err(|_| LogError::InvalidTag(tag.to_string()))?;
        probe_daemon(&SYSLOG_SOCKETS).map_err(LogError::SyslogUnavailable)?;

        // syslog(3) keeps the ident pointer, so it must live for the rest of
        // the process.
        let ident: Option<&'static CStr> = if tag.is_empty() {
            None
        } else {
            Some(Box::leak(ident.into_boxed_c_str()))
        };

        // SAFETY: the ident pointer is either null or 'static.
        unsafe {
            libc::openlog(
                ident.map_or(ptr::null(), CStr::as_ptr),
                libc::LOG_PID,
                facility as libc::c_int,
            );
        }

        Ok(Self { facility })
    }
}

impl Logger for SyslogLogger {
    fn log(&self, level: LogLevel, msg: &str) {
        let c_msg = c_message(msg);

        // SAFETY: "%s" keeps `%` in the message from being read as a
        // conversion; both pointers are valid NUL-terminated strings.
        unsafe {
            libc::syslog(
                priority(level) | self.facility as libc::c_int,
                c"%s".as_ptr(),
                c_msg.as_ptr(),
            );
        }
    }

    fn close(&self) -> Result<(), LogError> {
        Ok(())
    }
}

/// Checks that one of `paths` accepts a connection, datagram first, then
/// stream.
///
/// # Errors
///
/// Returns the last connection error when no socket is reachable.
pub fn probe_daemon(paths: &[&str]) -> io::Result<()> {
    let mut last_err = io::Error::new(io::ErrorKind::NotFound, "no syslog socket configured");

    for path in paths {
        if UnixDatagram::unbound()
            .and_then(|sock| sock.connect(path))
            .is_ok()
        {
            return Ok(());
        }
        match UnixStream::connect(path) {
            Ok(_) => return Ok(()),
            Err(e) => last_err = e,
        }
    }

    Err(last_err)
}

/// Message handed to syslog(3). NUL bytes cannot cross the C boundary, so
/// they are replaced with spaces instead of dropping the message.
fn c_message(msg: &str) -> CString {
    CString::new(msg).unwrap_or_else(|_| CString::new(msg.replace('\0', " ")).unwrap_or_default())
}
