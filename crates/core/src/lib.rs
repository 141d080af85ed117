//! # roster-core
//!
//! Extraction of student records from a school spreadsheet export.
//!
//! This crate provides:
//! - Sheet selection (first sheet with more than one column)
//! - Header normalization and synonym mapping
//! - Required-column validation
//! - Row transformation with per-row error isolation
//! - The `students.json` record format
//! - Case-insensitive record lookup
//!
//! ```
//! use roster_core::{extract, ExtractOptions};
//! use roster_sheet::{Book, Sheet};
//!
//! let mut book = Book::new();
//! book.add_sheet(
//!     "Learners",
//!     Sheet::from_data(vec![
//!         vec!["Admin No", "Names", "Surname", "Grade", "Class"],
//!         vec!["007", " Jane ", "Doe", "5", "B"],
//!     ]),
//! )
//! .unwrap();
//!
//! let extraction = extract(&book, &ExtractOptions::default()).unwrap();
//! assert_eq!(extraction.records[0].first_name, "Jane");
//! assert_eq!(extraction.records[0].registration_class, "GRADE 5 B");
//! ```

/// Error types and result aliases.
pub mod error;
/// The composed extraction pipeline.
pub mod extract;
/// Header normalization and mapping.
pub mod headers;
/// Record search.
pub mod lookup;
/// The output record and its file format.
pub mod record;
/// Sheet selection.
pub mod select;
/// Row transformation.
pub mod transform;
/// Required-column validation.
pub mod validate;

pub use error::{RosterError, RosterResult, RowConversionError};
pub use extract::{extract, extract_file, ExtractOptions, Extraction};
pub use headers::{
    canonical_for, map_headers, normalize_header, CanonicalColumn, CollisionPolicy, ColumnMap,
    HeaderCollision,
};
pub use lookup::{SearchField, StudentIndex};
pub use record::{read_records, write_records, write_records_to, StudentRecord};
pub use select::{select_sheet, SelectedSheet};
pub use transform::{error_report, transform_row, transform_rows, RowError, DISPLAY_ROW_OFFSET};
pub use validate::{missing_columns, validate_columns, REQUIRED_COLUMNS};
