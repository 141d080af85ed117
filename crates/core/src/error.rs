//! Error types for roster extraction.

use roster_sheet::SheetError;
use thiserror::Error;

/// Result type for roster operations.
pub type RosterResult<T> = Result<T, RosterError>;

/// Fatal errors that abort an extraction run.
#[derive(Debug, Error)]
pub enum RosterError {
    /// No sheet in the workbook has more than one column.
    #[error("No usable sheet found (inspected: {})", .sheets.join(", "))]
    NoUsableSheet { sheets: Vec<String> },

    /// Required canonical columns are absent after header mapping.
    #[error(
        "Missing required columns {} in sheet '{sheet}' (available: {})",
        .missing.join(", "),
        .available.join(", ")
    )]
    MissingColumns {
        missing: Vec<String>,
        sheet: String,
        available: Vec<String>,
    },

    /// Two source columns map to the same canonical column and the
    /// collision policy rejects it.
    #[error("Columns '{first}' and '{second}' both map to '{column}'")]
    HeaderCollision {
        column: String,
        first: String,
        second: String,
    },

    /// Workbook loading error.
    #[error("Sheet error: {0}")]
    Sheet(#[from] SheetError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Recoverable failure converting a single row; never aborts the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowConversionError {
    /// The admin number is blank after trimming.
    #[error("Empty admin number")]
    EmptyAdminNumber,

    /// A required cell holds a spreadsheet error value.
    #[error("Cannot convert {code} in column '{column}'")]
    CellError { column: &'static str, code: String },
}
