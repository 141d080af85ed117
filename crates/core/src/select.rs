//! Sheet selection.

use crate::error::{RosterError, RosterResult};
use roster_sheet::{Book, Sheet};
use tracing::info;

/// The sheet chosen for extraction.
#[derive(Debug, Clone, Copy)]
pub struct SelectedSheet<'a> {
    pub sheet: &'a Sheet,
    /// Position of the sheet in the workbook (0-based).
    pub index: usize,
    /// Number of sheets looked at, the selected one included.
    pub inspected: usize,
}

/// Pick the first sheet, in declaration order, with more than one column.
///
/// # Errors
///
/// Returns [`RosterError::NoUsableSheet`] when every sheet is empty or has a
/// single column, or the workbook has no sheets.
pub fn select_sheet(book: &Book) -> RosterResult<SelectedSheet<'_>> {
    info!(sheets = ?book.sheet_names(), "sheets found");

    for (index, (name, sheet)) in book.sheets().enumerate() {
        info!(sheet = name, raw_columns = ?sheet.header_row(), "inspecting sheet");

        if sheet.col_count() > 1 {
            info!(sheet = name, "using sheet");
            return Ok(SelectedSheet {
                sheet,
                index,
                inspected: index + 1,
            });
        }
    }

    Err(RosterError::NoUsableSheet {
        sheets: book.sheet_names().iter().map(|s| (*s).to_string()).collect(),
    })
}
