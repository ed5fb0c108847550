//! Read-only queries over an [`OrderedIndex`].
//!
//! Every query is a predicate handed to [`OrderedIndex::collect`], optionally
//! followed by some post-processing of the collected entries. Results keep
//! tree order (directories first, then name) unless stated otherwise.

use crate::entry::Entry;
use crate::tree::OrderedIndex;

impl OrderedIndex {
    /// Files whose extension matches `extension`, ignoring case.
    ///
    /// The leading dot is optional: `"txt"` and `".TXT"` are the same query.
    pub fn find_by_extension(&self, extension: &str) -> Vec<Entry> {
        let wanted = normalize_extension(extension);
        self.collect(|entry| entry.is_file() && entry.extension().eq_ignore_ascii_case(&wanted))
    }

    /// Files with `min <= size <= max`. An inverted range matches nothing.
    pub fn find_by_size(&self, min: u64, max: u64) -> Vec<Entry> {
        if min > max {
            return Vec::new();
        }
        self.collect(|entry| entry.is_file() && (min..=max).contains(&entry.size()))
    }

    /// The `count` largest files, biggest first.
    ///
    /// Files of equal size keep their tree order.
    pub fn find_largest(&self, count: usize) -> Vec<Entry> {
        if count == 0 {
            return Vec::new();
        }
        let mut files = self.collect(Entry::is_file);
        files.sort_by(|a, b| b.size().cmp(&a.size()));
        files.truncate(count);
        files
    }

    /// Sum of the sizes of every entry, directories included.
    ///
    /// Saturates at `u64::MAX` instead of overflowing.
    pub fn total_size(&self) -> u64 {
        // stays on `collect` like every other query, even though only sizes are read
        self.collect(|_| true)
            .iter()
            .fold(0u64, |total, entry| total.saturating_add(entry.size()))
    }
}

fn normalize_extension(extension: &str) -> String {
    let extension = extension.trim();
    if extension.starts_with('.') {
        extension.to_lowercase()
    } else {
        format!(".{}", extension.to_lowercase())
    }
}
