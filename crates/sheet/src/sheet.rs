use crate::cell::CellValue;

/// A named grid of cells (row-major storage)
///
/// The first row is the header row; everything below it is data.
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    data: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Create a sheet from a 2D vector of values
    #[must_use]
    pub fn from_data<T: Into<CellValue>>(data: Vec<Vec<T>>) -> Self {
        let converted = data
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        Self::from_rows("Sheet1", converted)
    }

    pub(crate) fn from_rows(name: &str, data: Vec<Vec<CellValue>>) -> Self {
        Sheet {
            name: name.to_string(),
            data,
        }
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Get the number of columns (width of the header row)
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    /// Render the first row as header text, one entry per column
    ///
    /// Returns an empty list for an empty sheet.
    #[must_use]
    pub fn header_row(&self) -> Vec<String> {
        self.data
            .first()
            .map(|row| row.iter().map(CellValue::as_str).collect())
            .unwrap_or_default()
    }

    /// Iterate the rows below the header, in source order
    pub fn data_rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.data.iter().skip(1).map(Vec::as_slice)
    }

    /// Number of rows below the header
    #[must_use]
    pub fn data_row_count(&self) -> usize {
        self.data.len().saturating_sub(1)
    }
}
