//! Directory tree walking logic
//!
//! This module builds an in-memory tree of directory and file nodes from a
//! filesystem walk, applying the configured ignore/discard filters. The walk
//! is recursive, depth-first, and single-threaded; renderers in `crate::output`
//! consume the result.

mod config;
mod node;
mod walker;

// Re-export public types
pub use config::{DEFAULT_IGNORE, ScanFilters, glob_match, parse_list};
pub use node::{DirectoryNode, FileNode, Node};
pub use walker::TreeWalker;
