//! Summary figures for an index, as shown by the `stats` report.

use serde::{Deserialize, Serialize};

use crate::entry::EntryKind;
use crate::tree::OrderedIndex;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_files: usize,
    pub total_directories: usize,
    /// Files only; directory sizes are left out. Saturates at `u64::MAX`.
    pub total_file_size: u64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub largest_file: Option<LargestFile>,
    pub height: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LargestFile {
    pub name: String,
    pub size: u64,
}

impl Statistics {
    pub fn collect(index: &OrderedIndex) -> Statistics {
        let mut stats = Statistics {
            height: index.height(),
            ..Statistics::default()
        };

        for entry in index {
            match entry.kind() {
                EntryKind::Directory => stats.total_directories += 1,
                EntryKind::File => {
                    stats.total_files += 1;
                    stats.total_file_size = stats.total_file_size.saturating_add(entry.size());
                    // strictly larger: the first file in tree order wins ties
                    if stats.largest_file.as_ref().map_or(true, |l| entry.size() > l.size) {
                        stats.largest_file = Some(LargestFile {
                            name: entry.name().to_string(),
                            size: entry.size(),
                        });
                    }
                }
            }
        }
        stats
    }
}

impl OrderedIndex {
    pub fn statistics(&self) -> Statistics {
        Statistics::collect(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_statistics() {
        let stats = OrderedIndex::new().statistics();
        assert_eq!(stats, Statistics::default());
        assert!(stats.largest_file.is_none());
    }

    #[test]
    fn test_statistics_counts_kinds_and_file_sizes() {
        let mut index = OrderedIndex::new();
        index.create_directory("Documents");
        index.create_entry("Music", EntryKind::Directory, 500);
        index.create_file("b.txt", 300);
        index.create_file("a.txt", 300);
        index.create_file("c.txt", 100);

        let stats = index.statistics();
        assert_eq!(stats.total_directories, 2);
        assert_eq!(stats.total_files, 3);
        assert_eq!(stats.total_file_size, 700);
        assert_eq!(
            stats.largest_file,
            Some(LargestFile {
                name: "a.txt".to_string(),
                size: 300
            })
        );
        assert_eq!(stats.height, index.height());
    }

    #[test]
    fn test_total_file_size_saturates() {
        let mut index = OrderedIndex::new();
        index.create_file("a", u64::MAX);
        index.create_file("b", 1);

        let stats = index.statistics();
        assert_eq!(stats.total_file_size, u64::MAX);
        assert_eq!(stats.largest_file.map(|l| l.name), Some("a".to_string()));
    }

    #[test]
    fn test_statistics_json_shape() {
        let mut index = OrderedIndex::new();
        index.create_file("a.txt", 3);
        let json = serde_json::to_value(index.statistics()).unwrap();
        assert_eq!(json["totalFiles"], 1);
        assert_eq!(json["totalFileSize"], 3);
        assert_eq!(json["largestFile"]["name"], "a.txt");
    }
}
