//! The composed extraction pipeline.
//!
//! [`extract`] runs selection, mapping, validation and transformation over an
//! in-memory [`Book`] with no filesystem access; [`extract_file`] is the thin
//! wrapper that loads the workbook first.

use crate::error::RosterResult;
use crate::headers::{map_headers, CollisionPolicy, ColumnMap};
use crate::record::StudentRecord;
use crate::select::select_sheet;
use crate::transform::{transform_rows, RowError};
use crate::validate::validate_columns;
use roster_sheet::Book;
use std::path::Path;
use tracing::{info, info_span, warn};

/// Knobs for an extraction run.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    pub collision_policy: CollisionPolicy,
}

impl ExtractOptions {
    /// Set the header collision policy
    #[must_use]
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }
}

/// Everything a successful run produced.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Name of the sheet the records came from.
    pub sheet_name: String,
    /// Sheets in the workbook.
    pub sheet_count: usize,
    /// Sheets looked at before one was selected, the selected one included.
    pub sheets_inspected: usize,
    pub columns: ColumnMap,
    pub records: Vec<StudentRecord>,
    pub errors: Vec<RowError>,
}

impl Extraction {
    /// Number of records produced.
    pub fn written(&self) -> usize {
        self.records.len()
    }

    /// Number of rows skipped because they failed to convert.
    pub fn skipped(&self) -> usize {
        self.errors.len()
    }
}

/// Extract student records from a workbook.
///
/// # Errors
///
/// Fails when no sheet is usable, when required columns are missing, or when
/// a header collision is rejected by the configured policy. Row-level
/// failures are reported in [`Extraction::errors`] instead.
pub fn extract(book: &Book, options: &ExtractOptions) -> RosterResult<Extraction> {
    let _span = info_span!("extract", book = book.name()).entered();

    let selected = select_sheet(book)?;
    let sheet = selected.sheet;

    let columns = map_headers(&sheet.header_row(), options.collision_policy)?;
    info!(columns = ?columns.normalized(), "normalised columns");
    info!(columns = ?columns.working_columns(), "mapped columns");

    validate_columns(&columns, sheet.name())?;

    let (records, errors) = transform_rows(sheet, &columns);
    if !errors.is_empty() {
        warn!(skipped = errors.len(), "rows skipped due to errors");
    }
    info!(
        sheet = sheet.name(),
        written = records.len(),
        skipped = errors.len(),
        "extraction complete"
    );

    Ok(Extraction {
        sheet_name: sheet.name().to_string(),
        sheet_count: book.sheet_count(),
        sheets_inspected: selected.inspected,
        columns,
        records,
        errors,
    })
}

/// Load a workbook from disk and extract student records from it.
pub fn extract_file<P: AsRef<Path>>(
    path: P,
    options: &ExtractOptions,
) -> RosterResult<Extraction> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading workbook");
    let book = Book::from_path(path)?;
    extract(&book, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use roster_sheet::Sheet;

    fn book_with(sheet: Sheet) -> Book {
        let mut book = Book::new();
        book.add_sheet("Cover", Sheet::from_data(vec![vec!["Export"]]))
            .unwrap();
        book.add_sheet("Learners", sheet).unwrap();
        book
    }

    #[test]
    fn test_extract_from_book() {
        let book = book_with(Sheet::from_data(vec![
            vec!["ADMINNO", "Names", "Surname", "Grade", "Reg Class"],
            vec!["001", "Ann", "Mokoena", "8", "C"],
            vec!["", "Ben", "Botha", "8", "C"],
        ]));

        let extraction = extract(&book, &ExtractOptions::default()).unwrap();

        assert_eq!(extraction.sheet_name, "Learners");
        assert_eq!(extraction.sheet_count, 2);
        assert_eq!(extraction.sheets_inspected, 2);
        assert_eq!(extraction.written(), 1);
        assert_eq!(extraction.skipped(), 1);
        assert_eq!(extraction.records[0].registration_class, "GRADE 8 C");
        assert_eq!(extraction.errors[0].row, 3);
    }

    #[test]
    fn test_extract_missing_columns() {
        let book = book_with(Sheet::from_data(vec![
            vec!["Admin No", "Name", "Surname", "Grade"],
            vec!["001", "Ann", "Mokoena", "8"],
        ]));

        let err = extract(&book, &ExtractOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            RosterError::MissingColumns { ref missing, ref sheet, .. }
                if missing == &["class"] && sheet == "Learners"
        ));
    }

    #[test]
    fn test_extract_collision_policy() {
        let data = vec![
            vec!["Admin No", "Name", "Names", "Surname", "Grade", "Class"],
            vec!["001", "Ann", "Annie", "Mokoena", "8", "C"],
        ];

        let first = extract(
            &book_with(Sheet::from_data(data.clone())),
            &ExtractOptions::default(),
        )
        .unwrap();
        assert_eq!(first.records[0].first_name, "Ann");
        assert_eq!(first.columns.collisions().len(), 1);

        let last = extract(
            &book_with(Sheet::from_data(data.clone())),
            &ExtractOptions::default().with_collision_policy(CollisionPolicy::LastWins),
        )
        .unwrap();
        assert_eq!(last.records[0].first_name, "Annie");

        let rejected = extract(
            &book_with(Sheet::from_data(data)),
            &ExtractOptions::default().with_collision_policy(CollisionPolicy::Reject),
        );
        assert!(matches!(rejected, Err(RosterError::HeaderCollision { .. })));
    }
}
