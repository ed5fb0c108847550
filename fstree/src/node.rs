//! Tree positions.
//!
//! A [`Node`] owns its [`Entry`] and its children outright; there are no parent
//! links. Outside the crate a node is only ever seen through a shared borrow of
//! the index, so it can be walked (rendering, statistics) but not modified.

use crate::entry::Entry;

pub(crate) type Link = Option<Box<Node>>;

#[derive(Debug)]
pub struct Node {
    pub(crate) entry: Entry,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    pub(crate) fn new(entry: Entry) -> Node {
        Node {
            entry,
            left: None,
            right: None,
        }
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn has_two_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
}

/// Detaches the leftmost node under `link` and splices its right child into
/// its place. Returns `None` only when `link` is empty.
pub(crate) fn take_leftmost(mut link: &mut Link) -> Option<Box<Node>> {
    while link.as_ref().map_or(false, |node| node.left.is_some()) {
        match link {
            Some(node) => link = &mut node.left,
            None => break,
        }
    }
    let mut node = link.take()?;
    *link = node.right.take();
    Some(node)
}
