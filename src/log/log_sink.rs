use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

/// Destination of rendered log lines.
///
/// A sink receives each complete line in a single `write_line` call and is
/// closed exactly once by the logger that owns it.
pub trait LogSink: Send {
    /// Writes one complete, newline-terminated line.
    fn write_line(&mut self, line: &[u8]) -> io::Result<()>;

    /// Releases the destination.
    fn close(&mut self) -> io::Result<()>;
}

impl LogSink for File {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.write_all(line)
    }

    fn close(&mut self) -> io::Result<()> {
        self.sync_data()
    }
}

impl<W: Write + Send> LogSink for BufWriter<W> {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.write_all(line)
    }

    fn close(&mut self) -> io::Result<()> {
        self.flush()
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    #[inline]
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }

    #[inline]
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}
