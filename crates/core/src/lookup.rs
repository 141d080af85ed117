//! Case-insensitive student search over extracted records.
//!
//! Mirrors how the lookup page queries `students.json`: exact admin number
//! first, then exact registration class, then a partial match on names and
//! class. A `class:` or `cls:` prefix forces a class search.

use crate::error::RosterResult;
use crate::record::{read_records, StudentRecord};
use std::collections::HashMap;
use std::path::Path;

/// Which record fields a query is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchField {
    /// Admin number, then class, then partial name/class match.
    #[default]
    Auto,
    /// Exact admin number only.
    Admin,
    /// Exact class, else every class containing the query.
    Class,
    /// Partial first, last or full name.
    Name,
}

const CLASS_PREFIXES: [&str; 2] = ["class:", "cls:"];

struct Entry {
    first: String,
    last: String,
    full: String,
    class: String,
}

/// Lowercased search index over a record list.
pub struct StudentIndex {
    records: Vec<StudentRecord>,
    entries: Vec<Entry>,
    by_admin: HashMap<String, usize>,
    by_class: HashMap<String, Vec<usize>>,
    class_order: Vec<String>,
}

impl StudentIndex {
    /// Build the index. Records with a blank admin number are searchable by
    /// name and class but not by admin number.
    pub fn new(records: Vec<StudentRecord>) -> Self {
        let mut entries = Vec::with_capacity(records.len());
        let mut by_admin = HashMap::new();
        let mut by_class: HashMap<String, Vec<usize>> = HashMap::new();
        let mut class_order = Vec::new();

        for (idx, record) in records.iter().enumerate() {
            let admin = record.admin_no.to_lowercase();
            let first = record.first_name.to_lowercase();
            let last = record.last_name.to_lowercase();
            let full = format!("{first} {last}").trim().to_string();
            let class = record.registration_class.to_lowercase();

            if !admin.is_empty() {
                // Later duplicates replace earlier ones
                by_admin.insert(admin, idx);
            }
            if !class.is_empty() {
                by_class
                    .entry(class.clone())
                    .or_insert_with(|| {
                        class_order.push(class.clone());
                        Vec::new()
                    })
                    .push(idx);
            }

            entries.push(Entry {
                first,
                last,
                full,
                class,
            });
        }

        StudentIndex {
            records,
            entries,
            by_admin,
            by_class,
            class_order,
        }
    }

    /// Index the records stored in a JSON file written by
    /// [`write_records`](crate::record::write_records).
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        Ok(Self::new(read_records(path)?))
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find records matching `query`. An empty query matches nothing.
    pub fn search(&self, query: &str, field: SearchField) -> Vec<&StudentRecord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        match field {
            SearchField::Auto => self.search_auto(&query),
            SearchField::Admin => self.by_admin(&query).into_iter().collect(),
            SearchField::Class => self.by_class(&query),
            SearchField::Name => self.filter(|entry| {
                entry.first.contains(&query)
                    || entry.last.contains(&query)
                    || entry.full.contains(&query)
            }),
        }
    }

    fn search_auto(&self, query: &str) -> Vec<&StudentRecord> {
        if let Some(rest) = CLASS_PREFIXES
            .iter()
            .find_map(|prefix| query.strip_prefix(prefix))
        {
            let rest = rest.trim();
            if rest.is_empty() {
                return Vec::new();
            }
            return self.by_class(rest);
        }

        if let Some(record) = self.by_admin(query) {
            return vec![record];
        }

        if let Some(indices) = self.by_class.get(query) {
            return self.collect(indices);
        }

        self.records
            .iter()
            .zip(&self.entries)
            .filter(|(record, entry)| {
                entry.first.contains(query)
                    || entry.last.contains(query)
                    || entry.full.contains(query)
                    || entry.class.contains(query)
                    || record.admin_no.to_lowercase() == query
            })
            .map(|(record, _)| record)
            .collect()
    }

    fn by_admin(&self, query: &str) -> Option<&StudentRecord> {
        self.by_admin.get(query).map(|&idx| &self.records[idx])
    }

    fn by_class(&self, query: &str) -> Vec<&StudentRecord> {
        if let Some(indices) = self.by_class.get(query) {
            return self.collect(indices);
        }

        self.class_order
            .iter()
            .filter(|class| class.contains(query))
            .filter_map(|class| self.by_class.get(class))
            .flat_map(|indices| indices.iter().map(|&idx| &self.records[idx]))
            .collect()
    }

    fn filter<F>(&self, predicate: F) -> Vec<&StudentRecord>
    where
        F: Fn(&Entry) -> bool,
    {
        self.records
            .iter()
            .zip(&self.entries)
            .filter(|(_, entry)| predicate(entry))
            .map(|(record, _)| record)
            .collect()
    }

    fn collect(&self, indices: &[usize]) -> Vec<&StudentRecord> {
        indices.iter().map(|&idx| &self.records[idx]).collect()
    }
}
