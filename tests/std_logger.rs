#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::{
    io,
    sync::{Arc, Mutex},
};

use distillog::{LogSink, Logger, StreamLogger};

#[derive(Clone, Default)]
struct DummyStream(Arc<Mutex<Vec<u8>>>);

impl DummyStream {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl LogSink for DummyStream {
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.0.lock().unwrap().extend_from_slice(line);
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// The default logger is process-wide; everything touching it lives in one
// test so no other test thread can swap it mid-way.
#[test]
fn default_logger_follows_replacement() {
    let first = DummyStream::default();
    let _stderr = distillog::set_output(first.clone());

    distillog::infoln(&[&"random", &"message"]);
    distillog::errorf(format_args!("code {}", 7));
    distillog::debugf!("via {}", "macro");
    distillog::warningln!("via", "macro");

    let out = first.contents();
    assert!(out.contains("  [INFO ] random message\n"), "{out:?}");
    assert!(out.contains("  [ERROR] code 7\n"), "{out:?}");
    assert!(out.contains("  [DEBUG] via macro\n"), "{out:?}");
    assert!(out.contains("  [WARN ] via macro\n"), "{out:?}");

    let second = DummyStream::default();
    let previous = distillog::set_default(Arc::new(StreamLogger::new("svc", second.clone())));
    previous.close().unwrap();

    distillog::infof(format_args!("after swap"));
    distillog::errorln!("still", "routed");

    assert_eq!(first.contents(), out, "old sink received lines after replacement");
    let routed = second.contents();
    assert!(routed.contains(" svc [INFO ] after swap\n"));
    assert!(routed.contains(" svc [ERROR] still routed\n"));
    assert_eq!(routed.lines().count(), 2);

    let current = distillog::default_logger();
    current.warningf(format_args!("direct"));
    assert!(second.contents().ends_with(" svc [WARN ] direct\n"));
}
