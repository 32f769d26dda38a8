//! Grove - scan a project directory into a structured tree with manifest metadata

pub mod manifest;
pub mod output;
pub mod report;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use manifest::{ManifestError, ManifestFields, ManifestReader, ManifestRegistry, PackageJsonReader};
pub use output::{print_tree, render_markdown, render_tree, to_pretty_json, write_document, write_markdown};
pub use report::{ConsoleReporter, MemoryReporter, Reporter};
pub use tree::{DEFAULT_IGNORE, DirectoryNode, FileNode, Node, ScanFilters, TreeWalker, parse_list};
