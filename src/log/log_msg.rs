//! Message construction shared by every logger.
//!
//! Loggers receive either pre-built `fmt::Arguments` (the formatted style)
//! or a list of operands (the line style). Both are turned into the message
//! text here, before any framing is applied.

use std::{
    borrow::Cow,
    fmt::{self, Write},
};

/// Expands formatted arguments into the message text.
///
/// Arguments without runtime operands (a plain literal) are borrowed as-is.
///
/// # Example
///
/// ```rust
/// use distillog::log::log_msg::sprintf;
///
/// assert_eq!(sprintf(format_args!("{} of {}", 1, 2)), "1 of 2");
/// ```
#[must_use]
pub fn sprintf(args: fmt::Arguments<'_>) -> Cow<'_, str> {
    match args.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(fmt::format(args)),
    }
}

/// Joins operands with single spaces and terminates the result with one
/// newline.
///
/// # Example
///
/// ```rust
/// use distillog::log::log_msg::sprintln;
///
/// assert_eq!(sprintln(&[&"one", &2, &'3']), "one 2 3\n");
/// ```
#[must_use]
pub fn sprintln(args: &[&dyn fmt::Display]) -> String {
    let mut msg = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            msg.push(' ');
        }
        // Writing into a String only fails if a Display impl reports an error.
        let _ = write!(msg, "{arg}");
    }
    msg.push('\n');
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_arguments_are_borrowed() {
        assert!(matches!(sprintf(format_args!("plain")), Cow::Borrowed("plain")));
    }

    #[test]
    fn positional_arguments_are_expanded() {
        let name = "disk";
        let pct = 93;
        assert_eq!(
            sprintf(format_args!("{name} at {pct}% ({1}/{0})", 100, 93)),
            "disk at 93% (93/100)"
        );
    }

    #[test]
    fn operands_are_space_joined_with_one_newline() {
        assert_eq!(sprintln(&[&"one", &"iteration"]), "one iteration\n");
        assert_eq!(sprintln(&[&1.5, &true]), "1.5 true\n");
    }

    #[test]
    fn no_operands_is_a_bare_newline() {
        assert_eq!(sprintln(&[]), "\n");
    }

    #[test]
    fn operands_are_expanded_not_listed() {
        let values = [1, 2, 3];
        let text = sprintln(&[&values[0], &values[1], &values[2]]);
        assert_eq!(text, "1 2 3\n");
        assert!(!text.contains('['));
    }
}
