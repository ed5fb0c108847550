//! Ordered Index
//! -------------
//!
//! `OrderedIndex` is an unbalanced binary search tree of [`Entry`] values. The
//! position of an entry is decided by its kind first (directories before
//! files) and then by its name, compared case-insensitively. A name can only
//! appear once in the whole index, whatever its kind.
//!
//! Insertion and deletion cost O(height). The tree is never rebalanced, so an
//! already sorted insertion order degrades it into a list; every walk over the
//! tree (traversal, teardown) is therefore iterative.
//!
//! Deleting a node with two children moves the in-order successor's entry
//! into that node and unlinks the successor instead, so links are only ever
//! rewired at a node that has at most one child.

use std::cmp::Ordering;
use std::mem;

use tracing::{debug, trace, warn};

use crate::entry::{compare_key, Entry, EntryKind};
use crate::node::{self, Link, Node};

#[derive(Debug, Default)]
pub struct OrderedIndex {
    root: Link,
    len: usize,
}

impl OrderedIndex {
    pub fn new() -> OrderedIndex {
        OrderedIndex::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Read-only view of the root, for walking the tree shape.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Number of nodes on the longest root-to-leaf path; 0 when empty.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> = Vec::new();
        if let Some(root) = self.root() {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            if let Some(left) = node.left() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right() {
                stack.push((right, depth + 1));
            }
        }
        height
    }

    /// Builds an entry and inserts it.
    ///
    /// Returns `false` when the name is invalid or already taken; the index is
    /// left untouched in both cases.
    pub fn create_entry(&mut self, name: &str, kind: EntryKind, size: u64) -> bool {
        match Entry::new(name, kind, size) {
            Ok(entry) => self.insert(entry),
            Err(err) => {
                warn!(%err, ?kind, "rejected entry");
                false
            }
        }
    }

    pub fn create_file(&mut self, name: &str, size: u64) -> bool {
        self.create_entry(name, EntryKind::File, size)
    }

    pub fn create_directory(&mut self, name: &str) -> bool {
        self.create_entry(name, EntryKind::Directory, 0)
    }

    /// Inserts `entry` unless an entry with the same name (ignoring case and
    /// kind) is already present.
    pub fn insert(&mut self, entry: Entry) -> bool {
        if let Some(existing) = self.find(entry.name()) {
            debug!(name = entry.name(), existing = existing.name(), "duplicate name");
            return false;
        }

        let mut link = &mut self.root;
        let mut depth = 0usize;
        while let Some(node) = link {
            depth += 1;
            link = match entry.cmp_position(&node.entry) {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
        trace!(name = entry.name(), depth, "attaching node");
        debug!(name = entry.name(), kind = %entry.kind(), size = entry.size(), "inserted");
        *link = Some(Box::new(Node::new(entry)));
        self.len += 1;
        true
    }

    /// Looks an entry up by name, ignoring case.
    ///
    /// The tree is ordered by kind before name, so a name alone does not say
    /// which way to descend from a node of the other kind. Both partitions are
    /// probed with the full key instead, each in O(height).
    pub fn find(&self, name: &str) -> Option<&Entry> {
        self.locate(EntryKind::Directory, name)
            .or_else(|| self.locate(EntryKind::File, name))
            .map(Node::entry)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    fn locate(&self, kind: EntryKind, name: &str) -> Option<&Node> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match compare_key(kind, name, &node.entry) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// Removes the entry called `name`. Returns `false` if there is none.
    pub fn delete(&mut self, name: &str) -> bool {
        self.remove(name).is_some()
    }

    /// Removes the entry called `name` and hands it back.
    pub fn remove(&mut self, name: &str) -> Option<Entry> {
        let kind = self.find(name)?.kind();

        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_deref() {
                Some(node) => compare_key(kind, name, &node.entry),
                None => return None,
            };
            match ordering {
                Ordering::Equal => break,
                Ordering::Less => match link {
                    Some(node) => link = &mut node.left,
                    None => return None,
                },
                Ordering::Greater => match link {
                    Some(node) => link = &mut node.right,
                    None => return None,
                },
            }
        }

        let removed = unlink(link)?;
        self.len -= 1;
        debug!(name = removed.name(), kind = %removed.kind(), remaining = self.len, "deleted");
        Some(removed)
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// In-order walk: directories first, then names ignoring case.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root());
        iter
    }

    /// Clones, in tree order, every entry accepted by `predicate`.
    ///
    /// All queries go through here; it visits each node exactly once.
    pub fn collect<P>(&self, mut predicate: P) -> Vec<Entry>
    where
        P: FnMut(&Entry) -> bool,
    {
        self.iter().filter(|&entry| predicate(entry)).cloned().collect()
    }
}

/// Takes the entry out of the node behind `link`, keeping the tree ordered.
fn unlink(link: &mut Link) -> Option<Entry> {
    let target = link.as_mut()?;
    if target.has_two_children() {
        let successor = node::take_leftmost(&mut target.right)?;
        trace!(successor = successor.entry.name(), "moving successor up");
        return Some(mem::replace(&mut target.entry, successor.entry));
    }
    let mut node = link.take()?;
    *link = node.left.take().or_else(|| node.right.take());
    Some(node.entry)
}

impl Drop for OrderedIndex {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Extend<Entry> for OrderedIndex {
    fn extend<T: IntoIterator<Item = Entry>>(&mut self, iter: T) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl FromIterator<Entry> for OrderedIndex {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        let mut index = OrderedIndex::new();
        index.extend(iter);
        index
    }
}

impl<'a> IntoIterator for &'a OrderedIndex {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// In-order iterator over the entries of an [`OrderedIndex`].
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<&'a Entry> {
        let node = self.stack.pop()?;
        self.push_left(node.right());
        Some(node.entry())
    }
}
