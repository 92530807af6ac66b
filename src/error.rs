//! Crate-level error types.

use std::fmt;

/// Errors produced by the landing-motion crate.
///
/// Page behaviour itself never surfaces these to the user: handlers log
/// and carry on. They exist so the seams (DOM, clipboard, options loading)
/// can report what went wrong.
#[derive(Debug)]
pub enum MotionError {
    /// A DOM call threw a JavaScript exception.
    Dom(String),
    /// A browser global (`window`, `document`, ...) is unavailable.
    MissingGlobal(&'static str),
    /// The asynchronous clipboard write was rejected.
    Clipboard(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dom(msg) => write!(f, "DOM error: {msg}"),
            Self::MissingGlobal(name) => {
                write!(f, "browser global `{name}` is not available")
            }
            Self::Clipboard(msg) => write!(f, "clipboard write rejected: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for MotionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MotionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for MotionError {
    fn from(e: toml::de::Error) -> Self {
        Self::OptionsParse(e.to_string())
    }
}
