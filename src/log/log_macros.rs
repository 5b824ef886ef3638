//! Leveled logging macros.
//!
//! Two families, both in formatted (`*f`) and line (`*ln`) style:
//! - `logger_<level>f!` / `logger_<level>ln!` log through an explicit logger
//!   (anything implementing [`Logger`](crate::Logger), including
//!   `Arc<dyn Logger>`);
//! - `<level>f!` / `<level>ln!` log through the process-wide default logger.
//!
//! ```rust
//! use distillog::{StreamLogger, logger_infof, logger_warningln, errorf};
//!
//! let log = StreamLogger::null("jobs");
//! logger_infof!(log, "picked up job {}", 17);
//! logger_warningln!(log, "job", 17, "is slow");
//! errorf!("job {} failed", 17);
//! ```
//!
//! The formatted style goes through `format_args!`, so a literal message
//! without operands is never copied.

// ============================================================================
// 1. GENERIC MACROS
// ============================================================================

#[macro_export]
macro_rules! logger_logf {
    ($logger:expr, $lvl:expr, $($arg:tt)*) => {{
        use $crate::Logger as _;
        $logger.logf($lvl, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! logger_logln {
    ($logger:expr, $lvl:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::Logger as _;
        $logger.logln($lvl, &[$(&$arg as &dyn ::core::fmt::Display),*]);
    }};
}

#[macro_export]
macro_rules! std_logf {
    ($lvl:expr, $($arg:tt)*) => {{
        $crate::logger_logf!($crate::default_logger(), $lvl, $($arg)*)
    }};
}

#[macro_export]
macro_rules! std_logln {
    ($lvl:expr $(, $arg:expr)* $(,)?) => {{
        $crate::logger_logln!($crate::default_logger(), $lvl $(, $arg)*)
    }};
}

// Level macros call the per-level method, so loggers overriding it are honored.
#[doc(hidden)]
#[macro_export]
macro_rules! __logger_callf {
    ($logger:expr, $method:ident, $($arg:tt)*) => {{
        use $crate::Logger as _;
        $logger.$method(format_args!($($arg)*));
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __logger_callln {
    ($logger:expr, $method:ident $(, $arg:expr)* $(,)?) => {{
        use $crate::Logger as _;
        $logger.$method(&[$(&$arg as &dyn ::core::fmt::Display),*]);
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS
// ============================================================================

// ---------------------- DEBUG ----------------------
#[macro_export]
macro_rules! logger_debugf { ($logger:expr, $($arg:tt)*) => { $crate::__logger_callf!($logger, debugf, $($arg)*) } }
#[macro_export]
macro_rules! logger_debugln { ($logger:expr $(, $arg:expr)* $(,)?) => { $crate::__logger_callln!($logger, debugln $(, $arg)*) } }
#[macro_export]
macro_rules! debugf { ($($arg:tt)*) => { $crate::__logger_callf!($crate::default_logger(), debugf, $($arg)*) } }
#[macro_export]
macro_rules! debugln { ($($arg:expr),* $(,)?) => { $crate::__logger_callln!($crate::default_logger(), debugln $(, $arg)*) } }

// ---------------------- INFO ----------------------
#[macro_export]
macro_rules! logger_infof { ($logger:expr, $($arg:tt)*) => { $crate::__logger_callf!($logger, infof, $($arg)*) } }
#[macro_export]
macro_rules! logger_infoln { ($logger:expr $(, $arg:expr)* $(,)?) => { $crate::__logger_callln!($logger, infoln $(, $arg)*) } }
#[macro_export]
macro_rules! infof { ($($arg:tt)*) => { $crate::__logger_callf!($crate::default_logger(), infof, $($arg)*) } }
#[macro_export]
macro_rules! infoln { ($($arg:expr),* $(,)?) => { $crate::__logger_callln!($crate::default_logger(), infoln $(, $arg)*) } }

// ---------------------- WARN ----------------------
#[macro_export]
macro_rules! logger_warningf { ($logger:expr, $($arg:tt)*) => { $crate::__logger_callf!($logger, warningf, $($arg)*) } }
#[macro_export]
macro_rules! logger_warningln { ($logger:expr $(, $arg:expr)* $(,)?) => { $crate::__logger_callln!($logger, warningln $(, $arg)*) } }
#[macro_export]
macro_rules! warningf { ($($arg:tt)*) => { $crate::__logger_callf!($crate::default_logger(), warningf, $($arg)*) } }
#[macro_export]
macro_rules! warningln { ($($arg:expr),* $(,)?) => { $crate::__logger_callln!($crate::default_logger(), warningln $(, $arg)*) } }

// ---------------------- ERROR ----------------------
#[macro_export]
macro_rules! logger_errorf { ($logger:expr, $($arg:tt)*) => { $crate::__logger_callf!($logger, errorf, $($arg)*) } }
#[macro_export]
macro_rules! logger_errorln { ($logger:expr $(, $arg:expr)* $(,)?) => { $crate::__logger_callln!($logger, errorln $(, $arg)*) } }
#[macro_export]
macro_rules! errorf { ($($arg:tt)*) => { $crate::__logger_callf!($crate::default_logger(), errorf, $($arg)*) } }
#[macro_export]
macro_rules! errorln { ($($arg:expr),* $(,)?) => { $crate::__logger_callln!($crate::default_logger(), errorln $(, $arg)*) } }
