//! Header normalization and synonym mapping.
//!
//! Raw headers are normalized (trimmed, lowercased, spaces and underscores
//! removed) and then looked up in a fixed synonym table. Headers that match
//! are renamed to their canonical column; everything else passes through
//! under its normalized name.

use crate::error::{RosterError, RosterResult};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// The fixed set of columns the transformer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalColumn {
    AdminNo,
    FirstName,
    LastName,
    Grade,
    Class,
}

impl CanonicalColumn {
    /// Every canonical column, in reporting order.
    pub const ALL: [CanonicalColumn; 5] = [
        CanonicalColumn::AdminNo,
        CanonicalColumn::FirstName,
        CanonicalColumn::LastName,
        CanonicalColumn::Grade,
        CanonicalColumn::Class,
    ];

    /// The canonical column name.
    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalColumn::AdminNo => "adminno",
            CanonicalColumn::FirstName => "firstname",
            CanonicalColumn::LastName => "lastname",
            CanonicalColumn::Grade => "grade",
            CanonicalColumn::Class => "class",
        }
    }
}

impl fmt::Display for CanonicalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized header text accepted for each canonical column.
const SYNONYMS: &[(&str, CanonicalColumn)] = &[
    ("adminno", CanonicalColumn::AdminNo),
    ("admnr", CanonicalColumn::AdminNo),
    ("admissionno", CanonicalColumn::AdminNo),
    ("firstname", CanonicalColumn::FirstName),
    ("names", CanonicalColumn::FirstName),
    ("name", CanonicalColumn::FirstName),
    ("surname", CanonicalColumn::LastName),
    ("lastname", CanonicalColumn::LastName),
    ("grade", CanonicalColumn::Grade),
    ("class", CanonicalColumn::Class),
    ("regclass", CanonicalColumn::Class),
    ("registrationclass", CanonicalColumn::Class),
];

/// Normalize a raw header for synonym matching.
///
/// Trims surrounding whitespace, lowercases, and drops every space and
/// underscore. Total: a blank header normalizes to `""`.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|ch| *ch != ' ' && *ch != '_')
        .collect()
}

/// Look up the canonical column for an already-normalized header.
pub fn canonical_for(normalized: &str) -> Option<CanonicalColumn> {
    SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == normalized)
        .map(|(_, column)| *column)
}

/// What to do when two source columns map to the same canonical column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Read the leftmost column.
    #[default]
    FirstWins,
    /// Read the rightmost column.
    LastWins,
    /// Abort the run.
    Reject,
}

/// Two source columns that resolved to the same canonical column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCollision {
    pub column: CanonicalColumn,
    /// Position and raw header of the column seen first.
    pub first: (usize, String),
    /// Position and raw header of the column seen later.
    pub second: (usize, String),
}

/// The selected sheet's columns after normalization and mapping.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    normalized: Vec<String>,
    working: Vec<String>,
    positions: BTreeMap<CanonicalColumn, usize>,
    collisions: Vec<HeaderCollision>,
}

impl ColumnMap {
    /// Normalized headers, in column order.
    pub fn normalized(&self) -> &[String] {
        &self.normalized
    }

    /// Column names after mapping, in column order.
    pub fn working_columns(&self) -> &[String] {
        &self.working
    }

    /// Source position of a canonical column, if mapped.
    pub fn position(&self, column: CanonicalColumn) -> Option<usize> {
        self.positions.get(&column).copied()
    }

    /// Whether a canonical column is present.
    pub fn contains(&self, column: CanonicalColumn) -> bool {
        self.positions.contains_key(&column)
    }

    /// Collisions seen while mapping, in column order.
    pub fn collisions(&self) -> &[HeaderCollision] {
        &self.collisions
    }
}

/// Normalize and map a header row against the synonym table.
///
/// # Errors
///
/// Returns [`RosterError::HeaderCollision`] when two columns map to the same
/// canonical column under [`CollisionPolicy::Reject`].
pub fn map_headers(raw_headers: &[String], policy: CollisionPolicy) -> RosterResult<ColumnMap> {
    let mut map = ColumnMap::default();

    for (idx, raw) in raw_headers.iter().enumerate() {
        let normalized = normalize_header(raw);
        let canonical = canonical_for(&normalized);

        map.working.push(canonical.map_or_else(|| normalized.clone(), |c| c.as_str().to_string()));
        map.normalized.push(normalized);

        let Some(column) = canonical else {
            continue;
        };

        match map.positions.entry(column) {
            Entry::Vacant(slot) => {
                slot.insert(idx);
            }
            Entry::Occupied(mut slot) => {
                let first = *slot.get();
                let collision = HeaderCollision {
                    column,
                    first: (first, raw_headers[first].clone()),
                    second: (idx, raw.clone()),
                };
                warn!(
                    column = %column,
                    first = %collision.first.1,
                    second = %collision.second.1,
                    ?policy,
                    "two headers map to the same column"
                );

                match policy {
                    CollisionPolicy::FirstWins => {}
                    CollisionPolicy::LastWins => {
                        slot.insert(idx);
                    }
                    CollisionPolicy::Reject => {
                        return Err(RosterError::HeaderCollision {
                            column: column.as_str().to_string(),
                            first: collision.first.1,
                            second: collision.second.1,
                        });
                    }
                }
                map.collisions.push(collision);
            }
        }
    }

    Ok(map)
}
