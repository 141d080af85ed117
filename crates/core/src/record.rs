//! The student record and its JSON file format.

use crate::error::RosterResult;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// One student, as written to the output file.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub admin_no: String,
    pub first_name: String,
    pub last_name: String,
    pub registration_class: String,
    pub photo: String,
}

impl StudentRecord {
    /// Build a record, deriving the registration class and photo name.
    ///
    /// `grade` and `class` are used verbatim.
    pub fn new(
        admin_no: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        grade: &str,
        class: &str,
    ) -> Self {
        let admin_no = admin_no.into();
        let photo = format!("{admin_no}.jpg");
        StudentRecord {
            admin_no,
            first_name: first_name.into(),
            last_name: last_name.into(),
            registration_class: format!("GRADE {grade} {class}"),
            photo,
        }
    }
}

/// Write records as a pretty-printed JSON array.
///
/// Two-space indentation; non-ASCII characters are written as-is.
pub fn write_records_to<W: Write>(mut writer: W, records: &[StudentRecord]) -> RosterResult<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Write records to a file, replacing any previous contents.
pub fn write_records<P: AsRef<Path>>(path: P, records: &[StudentRecord]) -> RosterResult<()> {
    let file = File::create(path.as_ref())?;
    write_records_to(BufWriter::new(file), records)
}

/// Read records back from a JSON file written by [`write_records`].
pub fn read_records<P: AsRef<Path>>(path: P) -> RosterResult<Vec<StudentRecord>> {
    let file = File::open(path.as_ref())?;
    let records = serde_json::from_reader(BufReader::new(file))?;
    Ok(records)
}
