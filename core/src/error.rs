//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Validation findings are never errors: they are collected as
//! diagnostics in a report. `AppError` only covers host failures such as
//! unreadable files or text that is not YAML/JSON.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The document text could not be parsed as YAML or JSON.
    /// Created explicitly so `From<String>` keeps targeting `General`.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::NotFound, "missing.yaml");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        // String must land in General, not Parse
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_parse_display() {
        let app_err = AppError::Parse("unexpected end of stream".into());
        assert_eq!(
            format!("{}", app_err),
            "Parse Error: unexpected end of stream"
        );
    }
}
