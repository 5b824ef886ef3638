#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::{
    io,
    sync::{Arc, Mutex},
    thread,
};

use distillog::{LogSink, Logger, StreamLogger, logger_infoln};

#[derive(Clone, Default)]
struct SharedBuf {
    buf: Arc<Mutex<Vec<u8>>>,
    writes: Arc<Mutex<usize>>,
}

impl LogSink for SharedBuf {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.buf.lock().unwrap().extend_from_slice(line);
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

const THREADS: usize = 8;
const CALLS: usize = 500;

#[test]
fn concurrent_callers_never_interleave_lines() {
    let sink = SharedBuf::default();
    let log = Arc::new(StreamLogger::new("TAG", sink.clone()));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                for i in 0..CALLS {
                    if i % 2 == 0 {
                        log.infof(format_args!("thread={t} call={i} payload={}", "x".repeat(64)));
                    } else {
                        logger_infoln!(log, "thread", t, "call", i, "x".repeat(64));
                    }
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(*sink.writes.lock().unwrap(), THREADS * CALLS);

    let text = String::from_utf8(sink.buf.lock().unwrap().clone()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), THREADS * CALLS);

    let payload = "x".repeat(64);
    let mut seen = vec![0usize; THREADS];
    for line in lines {
        let (_, body) = line
            .split_once(" TAG [INFO ] ")
            .unwrap_or_else(|| panic!("malformed line {line:?}"));
        assert!(body.ends_with(&payload), "torn line {line:?}");
        let t: usize = body
            .split(|c| c == '=' || c == ' ')
            .nth(1)
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| panic!("no thread id in {line:?}"));
        seen[t] += 1;
    }
    assert!(seen.iter().all(|&n| n == CALLS));
}

#[test]
fn null_logger_sustains_concurrent_volume() {
    let log = Arc::new(StreamLogger::null(""));

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..10_000 {
                    log.infoln(&[&"one", &"iteration"]);
                }
            });
        }
    });

    assert_eq!(log.failed_writes(), 0);
    assert!(log.close().is_ok());
}
