use crate::book::Book;
use crate::cell::CellValue;
use crate::error::Result;
use crate::sheet::Sheet;
use calamine::{open_workbook_auto, Data, ExcelDateTime, Range, Reader};
use std::path::Path;
use tracing::debug;

/// Text form of a date-formatted cell, e.g. `2024-01-15 00:00:00`.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn datetime_to_cell_value(dt: &ExcelDateTime) -> CellValue {
    if dt.is_datetime() {
        if let Some(datetime) = dt.as_datetime() {
            return CellValue::String(datetime.format(DATETIME_FORMAT).to_string());
        }
    }
    // Durations keep their serial value
    CellValue::Float(dt.as_f64())
}

fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            CellValue::String(s.clone())
        }
        Data::DateTime(dt) => datetime_to_cell_value(dt),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}

fn range_to_sheet(name: &str, range: &Range<Data>) -> Sheet {
    let data = range
        .rows()
        .map(|row| row.iter().map(data_to_cell_value).collect())
        .collect();

    Sheet::from_rows(name, data)
}

impl Book {
    /// Load every worksheet of a spreadsheet file (xlsx, xlsm, xlsb, xls, ods)
    ///
    /// Sheets keep the workbook's declaration order. Leading empty rows and
    /// columns are not part of a sheet's grid.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened or a sheet cannot be read.
    pub fn from_spreadsheet<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut workbook = open_workbook_auto(path)?;

        let book_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Book1");
        let mut book = Book::with_name(book_name);

        for sheet_name in workbook.sheet_names() {
            let range = workbook.worksheet_range(&sheet_name)?;
            debug!(
                sheet = %sheet_name,
                rows = range.height(),
                cols = range.width(),
                "loaded worksheet"
            );
            book.add_sheet(&sheet_name, range_to_sheet(&sheet_name, &range))?;
        }

        Ok(book)
    }
}
