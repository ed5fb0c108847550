//! # Entry
//!
//! The record stored at every position of the index: one file or directory,
//! identified by its name. Names are compared case-insensitively everywhere
//! (ordering, lookup, duplicate detection) through [`compare_names`]; the name
//! as given is what gets stored and displayed.
//!
//! The extension is derived once, when the entry is built, and never changes
//! afterwards (there is no rename).

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Variant discriminator. Directories order before files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Directory => write!(f, "Directory"),
            EntryKind::File => write!(f, "File"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EntryRecord")]
pub struct Entry {
    name: String,
    kind: EntryKind,
    size: u64,
    extension: String,
}

/// Wire shape accepted on deserialization; the extension is always re-derived.
#[derive(Deserialize)]
struct EntryRecord {
    name: String,
    kind: EntryKind,
    #[serde(default)]
    size: u64,
}

impl TryFrom<EntryRecord> for Entry {
    type Error = Error;

    fn try_from(record: EntryRecord) -> Result<Self> {
        Entry::new(record.name, record.kind, record.size)
    }
}

impl Entry {
    /// Builds an entry, deriving its extension from `name`.
    ///
    /// Fails with [`Error::EmptyName`] if the name is empty or only whitespace.
    pub fn new(name: impl Into<String>, kind: EntryKind, size: u64) -> Result<Entry> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        let extension = extension_of(&name);
        Ok(Entry {
            name,
            kind,
            size,
            extension,
        })
    }

    pub fn file(name: impl Into<String>, size: u64) -> Result<Entry> {
        Entry::new(name, EntryKind::File, size)
    }

    /// Directories start with a size of 0; sizes are never aggregated.
    pub fn directory(name: impl Into<String>) -> Result<Entry> {
        Entry::new(name, EntryKind::Directory, 0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Lower-cased, dot included (`".txt"`), empty when there is none.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Tree order: directories first, then case-insensitive name.
    pub fn cmp_position(&self, other: &Entry) -> Ordering {
        compare_key(self.kind, &self.name, other)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EntryKind::Directory => write!(f, "{}/", self.name),
            EntryKind::File => write!(f, "{} ({} bytes)", self.name, self.size),
        }
    }
}

/// Ordinal comparison of the upper-cased characters of both names.
///
/// Each character maps to exactly one character, so `ß` stays distinct from
/// `SS`.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars().map(simple_upper).cmp(b.chars().map(simple_upper))
}

/// Upper case of `c` when it is a single character, `c` itself otherwise.
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Compares a `(kind, name)` key against a stored entry using tree order.
pub fn compare_key(kind: EntryKind, name: &str, entry: &Entry) -> Ordering {
    kind.cmp(&entry.kind)
        .then_with(|| compare_names(name, &entry.name))
}

fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => name[idx..].to_lowercase(),
        _ => String::new(),
    }
}
