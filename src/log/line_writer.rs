use std::{
    io,
    sync::{
        Mutex, MutexGuard, PoisonError,
        atomic::{AtomicU64, Ordering},
    },
};

use crate::log::log_sink::LogSink;

/// Width of the level label between the brackets.
pub const LEVEL_WIDTH: usize = 5;

/// Serializes rendered log lines onto a single sink.
///
/// Every line is assembled in a buffer that is reused across calls (cleared,
/// never shrunk), so steady-state logging does not allocate. The mutex covers
/// both the buffer and the sink write: lines from one writer are totally
/// ordered and never interleave.
///
/// Line layout:
///
/// ```text
/// <timestamp> <tag> [<LEVEL>] <message>\n
/// ```
pub struct LineWriter {
    tag: String,
    state: Mutex<LineState>,
    failed_writes: AtomicU64,
}

struct LineState {
    linebuf: Vec<u8>,
    sink: Box<dyn LogSink>,
}

impl LineWriter {
    pub fn new(tag: impl Into<String>, sink: Box<dyn LogSink>) -> Self {
        Self {
            tag: tag.into(),
            state: Mutex::new(LineState {
                linebuf: Vec::new(),
                sink,
            }),
            failed_writes: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Renders one line and writes it to the sink in a single call.
    ///
    /// A trailing newline is appended only if `msg` does not already end in
    /// one. Sink errors are swallowed and counted; the caller never sees
    /// them.
    pub fn output(&self, time_str: &str, level: &str, msg: &str) {
        let mut state = self.lock();
        let LineState { linebuf, sink } = &mut *state;

        linebuf.clear();

        linebuf.extend_from_slice(time_str.as_bytes());
        linebuf.push(b' ');
        linebuf.extend_from_slice(self.tag.as_bytes());
        linebuf.push(b' ');

        linebuf.push(b'[');
        push_fixed_width(linebuf, LEVEL_WIDTH, level);
        linebuf.push(b']');

        linebuf.push(b' ');
        linebuf.extend_from_slice(msg.as_bytes());

        if !msg.ends_with('\n') {
            linebuf.push(b'\n');
        }

        if sink.write_line(linebuf).is_err() {
            self.failed_writes.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Closes the sink and reports its error.
    ///
    /// Lines rendered after `close` are still handed to the sink; what the
    /// sink does with them is up to the sink.
    pub fn close(&self) -> io::Result<()> {
        self.lock().sink.close()
    }

    /// Number of lines the sink refused since construction.
    #[must_use]
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    // A panic in a sink must not disable logging for every other thread.
    fn lock(&self) -> MutexGuard<'_, LineState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Appends `s` left-justified in a field of `width` characters.
///
/// Shorter strings are padded with trailing spaces; longer ones contribute
/// only their first `width` characters.
pub fn push_fixed_width(buf: &mut Vec<u8>, width: usize, s: &str) {
    let mut used = 0;
    for (idx, ch) in s.char_indices() {
        if used == width {
            break;
        }
        buf.extend_from_slice(&s.as_bytes()[idx..idx + ch.len_utf8()]);
        used += 1;
    }
    buf.resize(buf.len() + (width - used), b' ');
}
