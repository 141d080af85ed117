use crate::cell::CellValue;
use crate::error::Result;
use crate::sheet::Sheet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Delimited-text reader options
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions { delimiter: b',' }
    }
}

impl CsvOptions {
    /// Options for TSV (tab-separated values)
    #[must_use]
    pub fn tsv() -> Self {
        CsvOptions { delimiter: b'\t' }
    }
}

impl Sheet {
    /// Load a sheet from a delimited text file
    pub fn from_csv_path<P: AsRef<Path>>(path: P, options: &CsvOptions) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_csv_reader(BufReader::new(file), options)
    }

    /// Load a sheet from a reader
    ///
    /// Fields stay text so identifiers such as `007` keep their leading
    /// zeros; empty fields read as [`CellValue::Null`]. Short rows are kept
    /// as-is rather than failing the whole file.
    pub fn from_csv_reader<R: Read>(reader: R, options: &CsvOptions) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(false) // The header row stays in the grid
            .flexible(true)
            .from_reader(reader);

        let mut data: Vec<Vec<CellValue>> = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            data.push(
                record
                    .iter()
                    .map(|field| {
                        if field.is_empty() {
                            CellValue::Null
                        } else {
                            CellValue::from(field)
                        }
                    })
                    .collect(),
            );
        }

        Ok(Sheet::from_rows("Sheet1", data))
    }
}
