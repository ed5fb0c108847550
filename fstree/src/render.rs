//! Text rendering of the tree shape.
//!
//! Only the public read view ([`OrderedIndex::root`], [`Node::left`],
//! [`Node::right`]) is used here.

use std::collections::VecDeque;
use std::fmt::Write;

use crate::entry::{Entry, EntryKind};
use crate::node::Node;
use crate::tree::OrderedIndex;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// `512B`, `2KB`, `50MB`. Integer division, no rounding.
pub fn format_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{}B", bytes)
    } else if bytes < MIB {
        format!("{}KB", bytes / KIB)
    } else {
        format!("{}MB", bytes / MIB)
    }
}

/// One-line label used by the tree views: `Docs/` or `readme.txt (2KB)`.
pub fn label(entry: &Entry) -> String {
    match entry.kind() {
        EntryKind::Directory => format!("{}/", entry.name()),
        EntryKind::File => format!("{} ({})", entry.name(), format_size(entry.size())),
    }
}

/// Draws the tree top-down, right subtree first, each child tagged `(R)` or
/// `(L)`.
pub fn render_tree(index: &OrderedIndex) -> String {
    let mut out = String::new();
    match index.root() {
        Some(root) => draw(&mut out, root, "", true, true),
        None => out.push_str("(empty file system)\n"),
    }
    out
}

fn draw(out: &mut String, node: &Node, prefix: &str, is_last: bool, is_root: bool) {
    let connector = if is_root {
        "* "
    } else if is_last {
        "└── "
    } else {
        "├── "
    };
    let _ = writeln!(out, "{}{}{}", prefix, connector, label(node.entry()));

    let child_prefix = if is_root {
        prefix.to_string()
    } else if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    if let Some(right) = node.right() {
        let _ = writeln!(out, "{}│", child_prefix);
        let _ = writeln!(out, "{}├─(R)─┐", child_prefix);
        draw(
            out,
            right,
            &format!("{}│     ", child_prefix),
            node.left().is_none(),
            false,
        );
    }
    if let Some(left) = node.left() {
        let _ = writeln!(out, "{}│", child_prefix);
        let _ = writeln!(out, "{}└─(L)─┐", child_prefix);
        draw(out, left, &format!("{}      ", child_prefix), true, false);
    }
}

/// Breadth-first view, one line per level. Missing children show as `[null]`.
pub fn render_levels(index: &OrderedIndex) -> String {
    let mut out = String::new();
    let root = match index.root() {
        Some(root) => root,
        None => return out,
    };

    let mut queue: VecDeque<(Option<&Node>, usize)> = VecDeque::new();
    queue.push_back((Some(root), 0));
    let mut line = String::new();
    let mut current_level = 0;

    while let Some((node, level)) = queue.pop_front() {
        if level != current_level {
            let _ = writeln!(out, "Level {}: {}", current_level, line.trim_end());
            line.clear();
            current_level = level;
        }
        match node {
            Some(node) => {
                let entry = node.entry();
                let suffix = if entry.is_directory() { "/" } else { "" };
                let _ = write!(line, "[{}{}] ", entry.name(), suffix);
                queue.push_back((node.left(), level + 1));
                queue.push_back((node.right(), level + 1));
            }
            None => line.push_str("[null] "),
        }
    }
    let _ = writeln!(out, "Level {}: {}", current_level, line.trim_end());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0B");
        assert_eq!(format_size(1023), "1023B");
        assert_eq!(format_size(2048), "2KB");
        assert_eq!(format_size(1_048_575), "1023KB");
        assert_eq!(format_size(52_428_800), "50MB");
    }

    #[test]
    fn test_render_empty() {
        let index = OrderedIndex::new();
        assert_eq!(render_tree(&index), "(empty file system)\n");
        assert_eq!(render_levels(&index), "");
    }

    #[test]
    fn test_render_tree_shape() {
        let mut index = OrderedIndex::new();
        index.create_file("m.txt", 2048);
        index.create_directory("Docs");
        index.create_file("z.txt", 10);

        let expected = "\
* m.txt (2KB)
│
├─(R)─┐
│     ├── z.txt (10B)
│
└─(L)─┐
      └── Docs/
";
        assert_eq!(render_tree(&index), expected);
    }

    #[test]
    fn test_render_levels() {
        let mut index = OrderedIndex::new();
        index.create_file("m", 1);
        index.create_directory("Docs");

        let expected = "\
Level 0: [m]
Level 1: [Docs/] [null]
Level 2: [null] [null]
";
        assert_eq!(render_levels(&index), expected);
    }
}
