//! In-memory file system index.
//!
//! Entries (files and directories) are kept in a single unbalanced binary
//! search tree ordered directories-first, then by case-insensitive name. The
//! tree supports insertion with duplicate rejection, lookup by name, deletion
//! and a filtered in-order traversal on which every query is built.

pub mod entry;
pub mod error;
pub mod node;
pub mod query;
pub mod render;
pub mod stats;
pub mod tree;

pub use entry::{Entry, EntryKind};
pub use node::Node;
pub use stats::{LargestFile, Statistics};
pub use tree::OrderedIndex;
