//! Error types for the sales ledger reader.

use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur while reading a sales file.
///
/// Every variant is fatal: there is no recovery or line-skipping. A failure
/// surfaces to the process boundary and terminates execution.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Underlying CSV reader error
    #[error("CSV reader error: {0}")]
    Csv(#[from] csv::Error),

    /// Row did not split into exactly 7 comma-separated fields
    #[error("Malformed row {row}: expected 7 fields, found {found}")]
    FieldCount { row: usize, found: usize },

    /// Price or quantity field failed numeric parsing
    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },
}
