//! Workbook and sheet model for roster
//!
//! Loads spreadsheet exports into an ordered [`Book`] of named [`Sheet`]s.
//! Spreadsheet formats (xlsx, xlsm, xlsb, xls, ods) are read through
//! `calamine`; CSV and TSV files load as a single-sheet book.
//!
//! # Examples
//!
//! ## Creating a sheet from data
//!
//! ```
//! use roster_sheet::Sheet;
//!
//! let sheet = Sheet::from_data(vec![
//!     vec!["Admin No", "Name", "Grade"],
//!     vec!["001", "Alice", "5"],
//!     vec!["002", "Bob", "6"],
//! ]);
//!
//! assert_eq!(sheet.data_row_count(), 2);
//! assert_eq!(sheet.col_count(), 3);
//! assert_eq!(sheet.header_row(), vec!["Admin No", "Name", "Grade"]);
//! ```
//!
//! ## Working with books
//!
//! ```
//! use roster_sheet::{Book, Sheet};
//!
//! let mut book = Book::new();
//! book.add_sheet("Cover", Sheet::from_data(vec![vec!["Term 1"]])).unwrap();
//! book.add_sheet("Learners", Sheet::from_data(vec![vec!["Admin No", "Name"]])).unwrap();
//!
//! assert_eq!(book.sheet_names(), vec!["Cover", "Learners"]);
//! ```
//!
//! ## Loading from a file
//!
//! ```no_run
//! use roster_sheet::Book;
//!
//! let book = Book::from_path("school.xlsx").unwrap();
//! ```

mod book;
mod cell;
mod csv;
mod error;
mod excel;
mod sheet;

/// Re-export book type.
pub use book::Book;
/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export CSV options.
pub use csv::CsvOptions;
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export sheet type.
pub use sheet::Sheet;
