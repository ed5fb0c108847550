use std::cmp::Ordering;
use std::collections::BTreeMap;

use fstree::entry::compare_names;
use fstree::{Entry, EntryKind, Node, OrderedIndex};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(String, bool, u64),
    Delete(String),
}

fn name_strategy() -> impl Strategy<Value = String> {
    // small alphabet with mixed case so collisions and case clashes happen
    "[a-dA-D]{1,3}"
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (name_strategy(), any::<bool>(), 0u64..10_000).prop_map(|(n, d, s)| Op::Insert(n, d, s)),
        2 => name_strategy().prop_map(Op::Delete),
    ]
}

fn kind_of(is_dir: bool) -> EntryKind {
    if is_dir {
        EntryKind::Directory
    } else {
        EntryKind::File
    }
}

/// Every node lies strictly between the bounds inherited from its ancestors.
fn check_bounds(node: Option<&Node>, low: Option<&Entry>, high: Option<&Entry>) -> usize {
    let node = match node {
        Some(node) => node,
        None => return 0,
    };
    let entry = node.entry();
    if let Some(low) = low {
        assert_eq!(low.cmp_position(entry), Ordering::Less, "{} !< {}", low, entry);
    }
    if let Some(high) = high {
        assert_eq!(entry.cmp_position(high), Ordering::Less, "{} !< {}", entry, high);
    }
    1 + check_bounds(node.left(), low, Some(entry)) + check_bounds(node.right(), Some(entry), high)
}

fn assert_sorted(index: &OrderedIndex) {
    let entries: Vec<&Entry> = index.iter().collect();
    for pair in entries.windows(2) {
        assert_eq!(pair[0].cmp_position(pair[1]), Ordering::Less);
    }
}

proptest! {
    #[test]
    fn random_operations_keep_tree_ordered(ops in prop::collection::vec(op_strategy(), 1..120)) {
        let mut index = OrderedIndex::new();
        // model keyed by upper-cased name, matching the index's notion of equality
        let mut model: BTreeMap<String, (EntryKind, u64)> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(name, is_dir, size) => {
                    let key = name.to_uppercase();
                    let expected = !model.contains_key(&key);
                    let inserted = index.create_entry(&name, kind_of(is_dir), size);
                    prop_assert_eq!(inserted, expected);
                    if inserted {
                        model.insert(key, (kind_of(is_dir), size));
                    }
                }
                Op::Delete(name) => {
                    let key = name.to_uppercase();
                    let expected = model.remove(&key).is_some();
                    let before = index.len();
                    prop_assert_eq!(index.delete(&name), expected);
                    let removed = if expected { 1 } else { 0 };
                    prop_assert_eq!(index.len(), before - removed);
                    prop_assert!(index.find(&name).is_none());
                }
            }

            assert_sorted(&index);
            prop_assert_eq!(check_bounds(index.root(), None, None), model.len());
            prop_assert_eq!(index.len(), model.len());
            prop_assert_eq!(index.is_empty(), model.is_empty());
            prop_assert_eq!(index.total_size(), model.values().map(|(_, s)| s).sum::<u64>());
        }

        for (key, (kind, size)) in &model {
            let found = index.find(&key.to_lowercase());
            prop_assert!(found.is_some());
            let found = found.unwrap();
            prop_assert_eq!(found.kind(), *kind);
            prop_assert_eq!(found.size(), *size);
        }
    }

    #[test]
    fn largest_is_sorted_prefix_of_files(sizes in prop::collection::vec(0u64..1_000, 0..40), count in 0usize..50) {
        let mut index = OrderedIndex::new();
        for (i, size) in sizes.iter().enumerate() {
            index.create_file(&format!("file{i:03}"), *size);
        }

        let largest = index.find_largest(count);
        prop_assert_eq!(largest.len(), count.min(sizes.len()));
        for pair in largest.windows(2) {
            prop_assert!(pair[0].size() >= pair[1].size());
        }

        let mut sorted = sizes.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let expected: Vec<u64> = sorted.into_iter().take(count).collect();
        let got: Vec<u64> = largest.iter().map(Entry::size).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn size_range_matches_filter(sizes in prop::collection::vec(0u64..500, 0..40), min in 0u64..500, max in 0u64..500) {
        let mut index = OrderedIndex::new();
        for (i, size) in sizes.iter().enumerate() {
            index.create_file(&format!("f{i}"), *size);
        }

        let found = index.find_by_size(min, max);
        let expected = if min > max {
            0
        } else {
            sizes.iter().filter(|s| (min..=max).contains(*s)).count()
        };
        prop_assert_eq!(found.len(), expected);
    }

    #[test]
    fn compare_names_is_case_blind(a in "[a-zA-Z0-9._]{0,8}", b in "[a-zA-Z0-9._]{0,8}") {
        prop_assert_eq!(compare_names(&a, &b), compare_names(&a.to_uppercase(), &b.to_lowercase()));
        prop_assert_eq!(compare_names(&a, &b), compare_names(&b, &a).reverse());
    }
}
