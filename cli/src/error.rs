#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};
use oas_lint_core::AppError;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// Failure raised by the validation core (unreadable or unparsable document).
    #[display("{}", _0)]
    Core(AppError),

    /// Report serialization failure.
    #[display("Serialization Error: {}", _0)]
    Json(serde_json::Error),

    /// General failure message.
    #[display("Operation failed: {}", _0)]
    General(String),
}

/// Manual implementation of the standard Error trait.
///
/// We implement this manually (instead of `derive(Error)`) because the `General(String)`
/// variant contains a `String`, which does not implement `std::error::Error`, causing
/// auto-derived `source()` implementations to fail compilation.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_display_passes_through() {
        let err: CliError = AppError::Parse("bad indentation".into()).into();
        assert_eq!(err.to_string(), "Parse Error: bad indentation");
    }

    #[test]
    fn test_general_display() {
        let err = CliError::General("no documents".into());
        assert_eq!(err.to_string(), "Operation failed: no documents");
    }
}
