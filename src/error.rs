//! Errors raised around the converter
//!
//! `convert` is total and never reports an error. Everything that touches the
//! outside world does: reading a draft, the settings file, naming a template
//! on the command line, and the system clipboard.

use crate::export::ClipboardError;
use log::warn;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Boxed cause attached to configuration failures.
type Cause = Box<dyn std::error::Error + Send + Sync>;

/// Result of a fallible glyphdown operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong outside the conversion pipeline.
#[derive(Debug)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────
    // Drafts
    // ─────────────────────────────────────────────────────────────────────────
    /// Reading stdin or another stream failed
    Io(io::Error),

    /// A draft file could not be read
    FileRead { path: PathBuf, source: io::Error },

    // ─────────────────────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────────────────────
    /// The settings file exists but could not be read
    ConfigLoad { path: PathBuf, source: Cause },

    /// The settings file could not be written or renamed into place
    ConfigSave { path: PathBuf, source: Cause },

    /// The settings file is not valid settings JSON
    ConfigParse {
        message: String,
        source: Option<Cause>,
    },

    /// No platform configuration directory (e.g. `HOME` unset)
    ConfigDirNotFound,

    // ─────────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────────
    /// A template name that matches none of the built-in posts
    UnknownTemplate(String),

    /// Copying the converted post failed
    Clipboard(ClipboardError),

    Application(String),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigParse {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<ClipboardError> for Error {
    fn from(err: ClipboardError) -> Self {
        Error::Clipboard(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "could not read input: {}", err),
            Error::FileRead { path, source } => {
                write!(f, "could not read draft '{}': {}", path.display(), source)
            }
            Error::ConfigLoad { path, source } => {
                write!(f, "could not read settings '{}': {}", path.display(), source)
            }
            Error::ConfigSave { path, source } => {
                write!(f, "could not save settings '{}': {}", path.display(), source)
            }
            Error::ConfigParse { message, .. } => write!(f, "invalid settings: {}", message),
            Error::ConfigDirNotFound => write!(f, "no configuration directory on this platform"),
            Error::UnknownTemplate(name) => {
                let known: Vec<&str> = crate::Template::all().iter().map(|t| t.name()).collect();
                write!(
                    f,
                    "unknown template '{}' (expected one of: {})",
                    name,
                    known.join(", ")
                )
            }
            Error::Clipboard(err) => write!(f, "{}", err),
            Error::Application(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::FileRead { source, .. } => Some(source),
            Error::ConfigLoad { source, .. } | Error::ConfigSave { source, .. } => {
                Some(source.as_ref())
            }
            Error::ConfigParse { source, .. } => source
                .as_ref()
                .map(|s| s.as_ref() as &(dyn std::error::Error + 'static)),
            Error::Clipboard(err) => Some(err),
            Error::ConfigDirNotFound | Error::UnknownTemplate(_) | Error::Application(_) => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Graceful Degradation Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Fall back to a default instead of failing, leaving a warning in the log.
pub trait ResultExt<T> {
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T {
        self.unwrap_or_else(|err| {
            warn!("{}: {}. Using default.", context, err);
            default
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_file_read_names_the_draft() {
        let err = Error::FileRead {
            path: PathBuf::from("drafts/launch.md"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "could not read draft 'drafts/launch.md': missing"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_unknown_template_lists_choices() {
        let msg = Error::UnknownTemplate("poem".to_string()).to_string();
        assert_eq!(
            msg,
            "unknown template 'poem' (expected one of: announcement, tip, story)"
        );
    }

    #[test]
    fn test_clipboard_failure_keeps_cause() {
        let err: Error = ClipboardError::AccessError("no display".to_string()).into();
        assert!(matches!(err, Error::Clipboard(_)));
        assert!(err.to_string().contains("no display"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_bad_settings_json_is_parse_error() {
        let parsed: std::result::Result<crate::config::Settings, _> =
            serde_json::from_str(r#"{"history_limit": "lots"}"#);
        let err = Error::from(parsed.unwrap_err());
        assert!(matches!(err, Error::ConfigParse { source: Some(_), .. }));
        assert!(err.to_string().starts_with("invalid settings: "));
    }

    #[test]
    fn test_stdin_failure_wraps_io() {
        let err: Error = io::Error::new(io::ErrorKind::InvalidData, "not utf-8").into();
        assert_eq!(err.to_string(), "could not read input: not utf-8");
    }

    #[test]
    fn test_warn_default_falls_back_only_on_error() {
        let ok: Result<usize> = Ok(7);
        assert_eq!(ok.unwrap_or_warn_default(100, "history limit"), 7);

        let failed: Result<usize> = Err(Error::ConfigDirNotFound);
        assert_eq!(failed.unwrap_or_warn_default(100, "history limit"), 100);
    }
}
