use std::path::{Path, PathBuf};

use crate::{
    config::Config,
    log::{log_error::LogError, logger::Logger, stream_logger::StreamLogger},
};

#[cfg(unix)]
use crate::log::syslog_logger::{SyslogFacility, SyslogLogger};

/// Configuration section read by [`LogOutput::from_config`].
pub const LOGGING_SECTION: &str = "Logging";

/// Where a configured logger sends its lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogOutput {
    #[default]
    Stderr,
    Stdout,
    Null,
    /// Append to this exact file.
    File(PathBuf),
    /// One file per process inside `dir`.
    Dir {
        dir: PathBuf,
        app_name: Option<String>,
    },
    #[cfg(unix)]
    Syslog(SyslogFacility),
}

impl LogOutput {
    /// Reads the `[Logging]` section.
    ///
    /// | key        | values                                                 |
    /// |------------|--------------------------------------------------------|
    /// | `output`   | `stderr` (default), `stdout`, `null`, `file`, `syslog` |
    /// | `file`     | exact log file path (`output = file`)                  |
    /// | `dir`      | log directory, default `logs/` next to the executable  |
    /// | `app_name` | file name prefix for `dir`                             |
    /// | `facility` | syslog facility, default `daemon`                      |
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Config`] for unknown `output` or `facility` values.
    pub fn from_config(config: &Config) -> Result<Self, LogError> {
        let output = config
            .get_non_empty(LOGGING_SECTION, "output")
            .unwrap_or("stderr");

        match output.to_ascii_lowercase().as_str() {
            "stderr" => Ok(Self::Stderr),
            "stdout" => Ok(Self::Stdout),
            "null" | "discard" => Ok(Self::Null),
            "file" => {
                if let Some(file) = config.get_non_empty(LOGGING_SECTION, "file") {
                    return Ok(Self::File(expand_path(file)));
                }
                let dir = config
                    .get_non_empty(LOGGING_SECTION, "dir")
                    .map_or_else(|| exe_dir_fallback_cwd().join("logs"), expand_path);
                let app_name = config
                    .get_non_empty(LOGGING_SECTION, "app_name")
                    .map(str::to_string);
                Ok(Self::Dir { dir, app_name })
            }
            #[cfg(unix)]
            "syslog" => {
                let name = config
                    .get_non_empty(LOGGING_SECTION, "facility")
                    .unwrap_or("daemon");
                SyslogFacility::from_name(name)
                    .map(Self::Syslog)
                    .ok_or_else(|| LogError::Config(format!("unknown syslog facility {name:?}")))
            }
            other => Err(LogError::Config(format!("unknown log output {other:?}"))),
        }
    }

    /// Creates the logger for this output.
    ///
    /// # Errors
    ///
    /// - [`LogError::Io`] if a log file cannot be created.
    /// - [`LogError::SyslogUnavailable`] / [`LogError::InvalidTag`] for syslog.
    pub fn build(&self, tag: &str) -> Result<Box<dyn Logger>, LogError> {
        let logger: Box<dyn Logger> = match self {
            Self::Stderr => Box::new(StreamLogger::stderr(tag)),
            Self::Stdout => Box::new(StreamLogger::stdout(tag)),
            Self::Null => Box::new(StreamLogger::null(tag)),
            Self::File(path) => Box::new(StreamLogger::file(tag, path)?),
            Self::Dir { dir, app_name } => {
                Box::new(StreamLogger::file_in_dir(tag, dir, app_name.as_deref())?.0)
            }
            #[cfg(unix)]
            Self::Syslog(facility) => Box::new(SyslogLogger::with_facility(tag, *facility)?),
        };
        Ok(logger)
    }
}

/// Builds the logger described by the `[Logging]` section, tagged with its
/// `tag` key (section, then global, default empty).
///
/// # Errors
///
/// See [`LogOutput::from_config`] and [`LogOutput::build`].
pub fn logger_from_config(config: &Config) -> Result<Box<dyn Logger>, LogError> {
    let tag = config.get_or_default(LOGGING_SECTION, "tag", "");
    LogOutput::from_config(config)?.build(tag)
}

/// Locates the directory of the executable, or falls back to the current
/// working directory on error.
fn exe_dir_fallback_cwd() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Expands a leading `~` to the user's home directory.
fn expand_path(path_str: &str) -> PathBuf {
    if path_str.starts_with('~') {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from);

        if let Some(mut home_path) = home {
            if path_str == "~" {
                return home_path;
            }
            if let Some(rest) = path_str
                .strip_prefix("~/")
                .or_else(|| path_str.strip_prefix("~\\"))
            {
                home_path.push(rest);
                return home_path;
            }
        }
    }
    PathBuf::from(path_str)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::fs;

    fn output(text: &str) -> Result<LogOutput, LogError> {
        LogOutput::from_config(&Config::parse(text))
    }

    #[test]
    fn defaults_to_stderr() {
        assert_eq!(output("").unwrap(), LogOutput::Stderr);
        assert_eq!(output("[Logging]\noutput =\n").unwrap(), LogOutput::Stderr);
    }

    #[test]
    fn parses_console_and_null_outputs() {
        assert_eq!(output("[Logging]\noutput = STDOUT").unwrap(), LogOutput::Stdout);
        assert_eq!(output("[Logging]\noutput = null").unwrap(), LogOutput::Null);
    }

    #[test]
    fn file_output_prefers_exact_path() {
        let out = output("[Logging]\noutput = file\nfile = /tmp/a.log\ndir = /tmp/x").unwrap();
        assert_eq!(out, LogOutput::File(PathBuf::from("/tmp/a.log")));
    }

    #[test]
    fn file_output_falls_back_to_directory() {
        let out = output("[Logging]\noutput = file\ndir = /var/log/app\napp_name = svc").unwrap();
        assert_eq!(
            out,
            LogOutput::Dir {
                dir: PathBuf::from("/var/log/app"),
                app_name: Some("svc".to_string()),
            }
        );

        match output("[Logging]\noutput = file").unwrap() {
            LogOutput::Dir { dir, app_name } => {
                assert!(dir.ends_with("logs"));
                assert_eq!(app_name, None);
            }
            other => panic!("expected Dir, got: {other:?}"),
        }
    }

    #[test]
    fn config_can_be_supplied_in_memory() {
        let cfg = Config::parse("[Logging]\noutput = null\ntag = mem");
        let log = logger_from_config(&cfg).unwrap();
        log.errorf(format_args!("discarded"));
        log.close().unwrap();
    }

    #[test]
    fn rejects_unknown_output() {
        assert!(matches!(
            output("[Logging]\noutput = kafka"),
            Err(LogError::Config(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn parses_syslog_facility() {
        assert_eq!(
            output("[Logging]\noutput = syslog").unwrap(),
            LogOutput::Syslog(SyslogFacility::Daemon)
        );
        assert_eq!(
            output("[Logging]\noutput = syslog\nfacility = local4").unwrap(),
            LogOutput::Syslog(SyslogFacility::Local4)
        );
        assert!(output("[Logging]\noutput = syslog\nfacility = nope").is_err());
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Ok(home) = std::env::var("HOME") {
            assert_eq!(expand_path("~"), PathBuf::from(&home));
            assert_eq!(expand_path("~/logs"), PathBuf::from(&home).join("logs"));
        }
        assert_eq!(expand_path("/abs/~x"), PathBuf::from("/abs/~x"));
    }

    #[test]
    fn builds_a_file_logger_from_config() {
        let path = std::env::temp_dir().join(format!(
            "distillog-config-{}/out.log",
            std::process::id()
        ));
        let text = format!(
            "[Logging]\noutput = file\ntag = cfg\nfile = {}\n",
            path.display()
        );

        let log = logger_from_config(&Config::parse(&text)).unwrap();
        log.infof(format_args!("from config"));
        log.close().unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.ends_with(" cfg [INFO ] from config\n"));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
