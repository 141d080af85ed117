//! Row transformation with per-row error isolation.

use crate::error::RowConversionError;
use crate::headers::{CanonicalColumn, ColumnMap};
use crate::record::StudentRecord;
use roster_sheet::{CellValue, Sheet};
use std::fmt;
use tracing::debug;

/// Offset from a 0-based data-row index to the row number a person sees in
/// the spreadsheet (1-based numbering plus the header row).
pub const DISPLAY_ROW_OFFSET: usize = 2;

static NULL_CELL: CellValue = CellValue::Null;

/// A row that produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// Display row number.
    pub row: usize,
    pub message: String,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: {}", self.row, self.message)
    }
}

fn cell<'a>(row: &'a [CellValue], columns: &ColumnMap, column: CanonicalColumn) -> &'a CellValue {
    columns
        .position(column)
        .and_then(|idx| row.get(idx))
        .unwrap_or(&NULL_CELL)
}

/// Convert one data row into a record.
///
/// Cells missing from a short row read as empty.
///
/// # Errors
///
/// Fails when a required cell holds a spreadsheet error value, or when the
/// admin number is blank after trimming.
pub fn transform_row(
    row: &[CellValue],
    columns: &ColumnMap,
) -> Result<StudentRecord, RowConversionError> {
    for column in CanonicalColumn::ALL {
        if let CellValue::Error(code) = cell(row, columns, column) {
            return Err(RowConversionError::CellError {
                column: column.as_str(),
                code: code.clone(),
            });
        }
    }

    let admin_no = cell(row, columns, CanonicalColumn::AdminNo).as_str();
    let admin_no = admin_no.trim();
    if admin_no.is_empty() {
        return Err(RowConversionError::EmptyAdminNumber);
    }

    let first_name = cell(row, columns, CanonicalColumn::FirstName).as_str();
    let last_name = cell(row, columns, CanonicalColumn::LastName).as_str();
    let grade = cell(row, columns, CanonicalColumn::Grade).as_str();
    let class = cell(row, columns, CanonicalColumn::Class).as_str();

    Ok(StudentRecord::new(
        admin_no,
        first_name.trim(),
        last_name.trim(),
        &grade,
        &class,
    ))
}

/// Convert every data row of a sheet, collecting failures instead of
/// stopping at them.
///
/// Records and errors both keep source-row order.
pub fn transform_rows(sheet: &Sheet, columns: &ColumnMap) -> (Vec<StudentRecord>, Vec<RowError>) {
    let mut records = Vec::with_capacity(sheet.data_row_count());
    let mut errors = Vec::new();

    for (idx, row) in sheet.data_rows().enumerate() {
        match transform_row(row, columns) {
            Ok(record) => records.push(record),
            Err(err) => {
                let row = idx + DISPLAY_ROW_OFFSET;
                debug!(row, error = %err, "skipping row");
                errors.push(RowError {
                    row,
                    message: err.to_string(),
                });
            }
        }
    }

    (records, errors)
}

/// Render up to `limit` row errors, followed by a count of the rest.
pub fn error_report(errors: &[RowError], limit: usize) -> Vec<String> {
    let mut lines: Vec<String> = errors.iter().take(limit).map(ToString::to_string).collect();
    if errors.len() > limit {
        lines.push(format!("... and {} more", errors.len() - limit));
    }
    lines
}
