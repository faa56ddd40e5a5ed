//! Error types for tabclust operations.

use thiserror::Error;

/// Result type for tabclust operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preprocessing, decomposing or clustering.
///
/// Degenerate but well-formed input (empty matrices, constant columns,
/// empty clusters, a single label) never produces an error; those cases
/// resolve to documented fallback values instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Invalid parameter or input value.
    #[error("invalid argument '{arg}': {reason}")]
    InvalidArgument { arg: &'static str, reason: String },

    /// Row-wise input whose rows do not all share the same length.
    #[error("ragged matrix: row {row} has {got} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Input width does not match the width a fitted artifact expects.
    #[error("dimension mismatch in {context}: expected {expected}, got {got}")]
    DimensionMismatch {
        expected: usize,
        got: usize,
        context: &'static str,
    },

    /// The caller cancelled the operation through its cancellation token.
    #[error("{op} was cancelled")]
    Cancelled { op: &'static str },
}

impl Error {
    pub(crate) fn invalid(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
