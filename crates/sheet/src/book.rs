use crate::csv::CsvOptions;
use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use indexmap::IndexMap;
use std::path::Path;

/// A workbook: named sheets in declaration order
#[derive(Debug, Clone)]
pub struct Book {
    name: String,
    sheets: IndexMap<String, Sheet>,
}

impl Book {
    /// Create a new empty book
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Book1")
    }

    pub(crate) fn with_name(name: &str) -> Self {
        Book {
            name: name.to_string(),
            sheets: IndexMap::new(),
        }
    }

    /// Get the book name (the file stem when loaded from disk)
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of sheets
    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Get all sheet names in declaration order
    #[must_use]
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.keys().map(String::as_str).collect()
    }

    /// Iterate `(name, sheet)` pairs in declaration order
    pub fn sheets(&self) -> impl Iterator<Item = (&str, &Sheet)> {
        self.sheets.iter().map(|(name, sheet)| (name.as_str(), sheet))
    }

    /// Add a sheet to the book under `name`
    pub fn add_sheet(&mut self, name: &str, sheet: Sheet) -> Result<()> {
        if self.sheets.contains_key(name) {
            return Err(SheetError::SheetAlreadyExists {
                name: name.to_string(),
            });
        }

        let mut sheet = sheet;
        sheet.set_name(name);
        self.sheets.insert(name.to_string(), sheet);
        Ok(())
    }

    // ===== File Loading =====

    /// Load a book from a file, picking the reader from the file extension
    ///
    /// `csv` and `tsv` files load as a single sheet named after the file
    /// stem. xlsx, xlsm, xlsb, xls and ods go through the spreadsheet
    /// reader; any other extension is rejected.
    ///
    /// # Example
    /// ```no_run
    /// use roster_sheet::Book;
    ///
    /// let book = Book::from_path("school.xlsx").unwrap();
    /// for name in book.sheet_names() {
    ///     println!("{name}");
    /// }
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Self::from_csv_file(path, &CsvOptions::default()),
            "tsv" => Self::from_csv_file(path, &CsvOptions::tsv()),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Self::from_spreadsheet(path),
            _ => Err(SheetError::UnsupportedFormat { extension: ext }),
        }
    }

    fn from_csv_file(path: &Path, options: &CsvOptions) -> Result<Self> {
        let sheet_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Sheet1")
            .to_string();

        let sheet = Sheet::from_csv_path(path, options)?;
        let mut book = Book::with_name(&sheet_name);
        book.add_sheet(&sheet_name, sheet)?;
        Ok(book)
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new()
    }
}
