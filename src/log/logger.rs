use std::{fmt, sync::Arc};

use crate::log::{
    log_error::LogError,
    log_level::LogLevel,
    log_msg::{sprintf, sprintln},
};

/// Leveled logging interface implemented by every destination.
///
/// Each level comes in two styles:
/// - `*f` takes pre-built [`fmt::Arguments`] (use `format_args!` or the
///   `logger_*f!` macros);
/// - `*ln` takes a list of operands, joined with single spaces and
///   terminated with a newline.
///
/// All methods append a trailing newline if the message lacks one. Logging
/// never fails from the caller's point of view; only [`close`](Self::close)
/// reports errors.
pub trait Logger: Send + Sync {
    /// Hands a fully expanded message to the destination.
    fn log(&self, level: LogLevel, msg: &str);

    /// Releases the destination.
    ///
    /// # Errors
    ///
    /// Returns the error reported by the underlying sink, if any.
    fn close(&self) -> Result<(), LogError>;

    #[inline]
    fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.log(level, &sprintf(args));
    }

    #[inline]
    fn logln(&self, level: LogLevel, args: &[&dyn fmt::Display]) {
        self.log(level, &sprintln(args));
    }

    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Debug, args);
    }

    fn debugln(&self, args: &[&dyn fmt::Display]) {
        self.logln(LogLevel::Debug, args);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Info, args);
    }

    fn infoln(&self, args: &[&dyn fmt::Display]) {
        self.logln(LogLevel::Info, args);
    }

    fn warningf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Warn, args);
    }

    fn warningln(&self, args: &[&dyn fmt::Display]) {
        self.logln(LogLevel::Warn, args);
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Error, args);
    }

    fn errorln(&self, args: &[&dyn fmt::Display]) {
        self.logln(LogLevel::Error, args);
    }
}

// Wrappers forward every method, so overrides on the inner logger are kept.
macro_rules! forward_logger {
    ($wrapper:ident) => {
        impl<L: Logger + ?Sized> Logger for $wrapper<L> {
            #[inline]
            fn log(&self, level: LogLevel, msg: &str) {
                (**self).log(level, msg);
            }

            fn close(&self) -> Result<(), LogError> {
                (**self).close()
            }

            #[inline]
            fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
                (**self).logf(level, args);
            }

            #[inline]
            fn logln(&self, level: LogLevel, args: &[&dyn fmt::Display]) {
                (**self).logln(level, args);
            }

            fn debugf(&self, args: fmt::Arguments<'_>) {
                (**self).debugf(args);
            }

            fn debugln(&self, args: &[&dyn fmt::Display]) {
                (**self).debugln(args);
            }

            fn infof(&self, args: fmt::Arguments<'_>) {
                (**self).infof(args);
            }

            fn infoln(&self, args: &[&dyn fmt::Display]) {
                (**self).infoln(args);
            }

            fn warningf(&self, args: fmt::Arguments<'_>) {
                (**self).warningf(args);
            }

            fn warningln(&self, args: &[&dyn fmt::Display]) {
                (**self).warningln(args);
            }

            fn errorf(&self, args: fmt::Arguments<'_>) {
                (**self).errorf(args);
            }

            fn errorln(&self, args: &[&dyn fmt::Display]) {
                (**self).errorln(args);
            }
        }
    };
}

forward_logger!(Arc);
forward_logger!(Box);

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(LogLevel, String)>>,
    }

    impl Logger for Recorder {
        fn log(&self, level: LogLevel, msg: &str) {
            self.calls.lock().unwrap().push((level, msg.to_string()));
        }

        fn close(&self) -> Result<(), LogError> {
            Ok(())
        }
    }

    #[test]
    fn level_methods_route_to_their_level() {
        let rec = Recorder::default();
        rec.debugf(format_args!("d{}", 1));
        rec.infoln(&[&"i", &2]);
        rec.warningf(format_args!("w"));
        rec.errorln(&[&"e"]);

        let calls = rec.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                (LogLevel::Debug, "d1".to_string()),
                (LogLevel::Info, "i 2\n".to_string()),
                (LogLevel::Warn, "w".to_string()),
                (LogLevel::Error, "e\n".to_string()),
            ]
        );
    }

    /// Overrides the formatted info path and the generic line path.
    #[derive(Default)]
    struct Prefixing {
        calls: Mutex<Vec<String>>,
    }

    impl Logger for Prefixing {
        fn log(&self, _level: LogLevel, msg: &str) {
            self.calls.lock().unwrap().push(format!("log:{msg}"));
        }

        fn close(&self) -> Result<(), LogError> {
            Ok(())
        }

        fn infof(&self, args: fmt::Arguments<'_>) {
            self.calls.lock().unwrap().push(format!("infof:{args}"));
        }

        fn logln(&self, level: LogLevel, args: &[&dyn fmt::Display]) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("logln:{level}:{}", args.len()));
        }
    }

    #[test]
    fn wrappers_keep_inner_overrides() {
        let inner = Arc::new(Prefixing::default());
        let shared: Arc<dyn Logger> = inner.clone();
        shared.infof(format_args!("arc {}", 1));
        shared.errorln(&[&"a", &"b"]);

        let boxed: Box<dyn Logger> = Box::new(shared.clone());
        boxed.infof(format_args!("box"));
        boxed.warningf(format_args!("plain"));

        assert_eq!(
            *inner.calls.lock().unwrap(),
            vec![
                "infof:arc 1".to_string(),
                "logln:ERROR:2".to_string(),
                "infof:box".to_string(),
                "log:plain".to_string(),
            ]
        );
    }

    #[test]
    fn shared_logger_is_a_logger() {
        let rec = Arc::new(Recorder::default());
        let shared: Arc<dyn Logger> = rec.clone();
        shared.infof(format_args!("via arc"));
        Box::new(shared).errorln(&[&"via box"]);
        assert_eq!(rec.calls.lock().unwrap().len(), 2);
    }
}
