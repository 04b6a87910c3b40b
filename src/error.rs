//! Central error types for DateTime Clippy.
//!
//! `PatternError` is the only recoverable failure: a pattern that cannot be
//! rendered is left out of the current menu build. Everything else is a
//! `ClippyError` and ends up in the log or terminates setup.

use thiserror::Error;

/// Why a date/time pattern could not be rendered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,

    /// ASCII letter that is neither a specifier nor quoted
    #[error("unknown format specifier '{ch}' at offset {offset}")]
    UnknownSpecifier { ch: char, offset: usize },

    #[error("'{0}' is not a standard format")]
    UnknownStandardFormat(char),

    #[error("unterminated quoted literal starting at offset {offset}")]
    UnterminatedQuote { offset: usize },

    #[error("pattern ends with an escape character")]
    DanglingEscape,

    #[error("'%' must be followed by a single specifier")]
    DanglingPercent,

    #[error("fraction specifier too long ({count} digits, at most 7)")]
    FractionTooLong { count: usize },
}

/// Main error type for DateTime Clippy operations.
#[derive(Error, Debug)]
pub enum ClippyError {
    /// Tray, menu or runtime failure reported by Tauri
    #[error("Tauri error: {0}")]
    Tauri(#[from] tauri::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Icon error: {0}")]
    Icon(String),

    #[error("{0}")]
    Other(String),
}

/// Extension trait for adding context to Option types.
pub trait OptionExt<T> {
    /// Convert None to ClippyError::Other with the given message.
    fn context(self, msg: &str) -> ClippyResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn context(self, msg: &str) -> ClippyResult<T> {
        self.ok_or_else(|| ClippyError::Other(msg.to_string()))
    }
}

/// Type alias for Results using ClippyError.
pub type ClippyResult<T> = Result<T, ClippyError>;
