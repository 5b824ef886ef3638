use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
};

use crate::log::{
    line_writer::LineWriter, log_error::LogError, log_level::LogLevel, log_sink::LogSink,
    logger::Logger, noop_log_sink::NoopCloseSink, timestamp,
};

/// Logger that writes framed lines to a [`LogSink`].
///
/// Every call renders `<timestamp> <tag> [<LEVEL>] <message>` through a
/// shared [`LineWriter`], so concurrent callers never interleave partial
/// lines.
///
/// # Example
///
/// ```rust
/// use distillog::{Logger, StreamLogger};
///
/// let log = StreamLogger::stderr("worker");
/// log.infof(format_args!("started {} jobs", 4));
/// log.warningln(&[&"queue", &"is", &"full"]);
/// ```
pub struct StreamLogger {
    writer: LineWriter,
}

impl StreamLogger {
    /// Logger writing to a caller-supplied sink. The logger owns the sink
    /// and closes it on [`Logger::close`].
    pub fn new(tag: impl Into<String>, sink: impl LogSink + 'static) -> Self {
        Self {
            writer: LineWriter::new(tag, Box::new(sink)),
        }
    }

    /// Logger writing to standard output.
    pub fn stdout(tag: impl Into<String>) -> Self {
        Self::new(tag, NoopCloseSink::stdout())
    }

    /// Logger writing to standard error.
    pub fn stderr(tag: impl Into<String>) -> Self {
        Self::new(tag, NoopCloseSink::stderr())
    }

    /// Logger that drops every message.
    pub fn null(tag: impl Into<String>) -> Self {
        Self::new(tag, NoopCloseSink::discard())
    }

    /// Logger appending to `path`. Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Io`] if the directory or the file cannot be
    /// created.
    pub fn file(tag: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(tag, file))
    }

    /// Logger appending to a per-process file in `dir`.
    ///
    /// The file is named after the start time and the process id, with an
    /// optional `app_name` prefix:
    ///
    /// `worker-20251102_023045-pid1234.log`
    ///
    /// Returns the logger together with the path of the file it writes to.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Io`] if the directory or the file cannot be
    /// created.
    pub fn file_in_dir(
        tag: impl Into<String>,
        dir: impl AsRef<Path>,
        app_name: Option<&str>,
    ) -> Result<(Self, PathBuf), LogError> {
        let path = dir.as_ref().join(log_file_name(app_name));
        let logger = Self::file(tag, &path)?;
        Ok((logger, path))
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        self.writer.tag()
    }

    /// Number of lines the sink failed to accept.
    #[must_use]
    pub fn failed_writes(&self) -> u64 {
        self.writer.failed_writes()
    }
}

impl Logger for StreamLogger {
    fn log(&self, level: LogLevel, msg: &str) {
        let now = timestamp::now_stamp();
        self.writer.output(&now, level.label(), msg);
    }

    fn close(&self) -> Result<(), LogError> {
        self.writer.close().map_err(LogError::Io)
    }
}

/// Builds `<app_name>-<YYYYMMDD_HHMMSS>-pid<pid>.log`.
fn log_file_name(app_name: Option<&str>) -> String {
    let ts = timestamp::CivilTime::now().filename_stamp();
    let pid = std::process::id();

    if let Some(name) = app_name.filter(|n| !n.is_empty()) {
        format!("{name}-{ts}-pid{pid}.log")
    } else {
        format!("{ts}-pid{pid}.log")
    }
}
