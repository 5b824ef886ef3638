use std::io::{self, Write};

use crate::log::log_sink::LogSink;

/// Wraps any writer and provides a dummy `close`.
///
/// Used for the process streams and the discard sink, which must stay usable
/// after a logger that writes to them is closed.
#[derive(Debug, Clone, Default)]
pub struct NoopCloseSink<W>(pub W);

impl<W> NoopCloseSink<W> {
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl NoopCloseSink<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self(io::stdout())
    }
}

impl NoopCloseSink<io::Stderr> {
    #[must_use]
    pub fn stderr() -> Self {
        Self(io::stderr())
    }
}

impl NoopCloseSink<io::Sink> {
    /// Sink that drops every byte.
    #[must_use]
    pub fn discard() -> Self {
        Self(io::sink())
    }
}

impl<W: Write + Send> LogSink for NoopCloseSink<W> {
    #[inline]
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.0.write_all(line)
    }

    #[inline]
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}
