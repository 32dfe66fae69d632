//! Custom error types for the word-finder crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum FinderError {
    /// An error originating from I/O operations while loading input.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A row does not have the same number of characters as the first row.
    #[error("Ragged matrix: row {row} has {found} characters, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A convenience `Result` type alias using the crate's `FinderError` type.
pub type Result<T> = std::result::Result<T, FinderError>;
