//! Required-column validation.

use crate::error::{RosterError, RosterResult};
use crate::headers::{CanonicalColumn, ColumnMap};
use tracing::error;

/// Columns every usable sheet must provide after mapping.
pub const REQUIRED_COLUMNS: [CanonicalColumn; 5] = CanonicalColumn::ALL;

/// Required columns absent from the map, in canonical order.
pub fn missing_columns(columns: &ColumnMap) -> Vec<CanonicalColumn> {
    REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !columns.contains(*column))
        .collect()
}

/// Check that every required column is present.
///
/// # Errors
///
/// Returns [`RosterError::MissingColumns`] naming the missing columns, the
/// sheet, and the columns that were available.
pub fn validate_columns(columns: &ColumnMap, sheet_name: &str) -> RosterResult<()> {
    let missing = missing_columns(columns);
    if missing.is_empty() {
        return Ok(());
    }

    let missing: Vec<String> = missing.iter().map(|c| c.as_str().to_string()).collect();
    let available = columns.working_columns().to_vec();
    error!(
        sheet = sheet_name,
        missing = ?missing,
        available = ?available,
        "column validation failed"
    );

    Err(RosterError::MissingColumns {
        missing,
        sheet: sheet_name.to_string(),
        available,
    })
}
