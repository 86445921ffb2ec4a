//! Error types for `cursor_view`.

use std::fmt;

/// Result type alias for `cursor_view` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for `cursor_view` operations.
///
/// Translation itself never fails; these errors are raised when building
/// the values handed to the translator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Line number or column was zero (both are 1-based).
    InvalidPosition { line_number: u32, column: u32 },
    /// Paired model/view sequences differ in length.
    MismatchedSecondaries {
        kind: &'static str,
        model: usize,
        view: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPosition {
                line_number,
                column,
            } => {
                write!(
                    f,
                    "invalid position ({line_number}, {column}): lines and columns start at 1"
                )
            }
            Self::MismatchedSecondaries { kind, model, view } => {
                write!(
                    f,
                    "mismatched secondary {kind}: {model} model vs {view} view entries"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
