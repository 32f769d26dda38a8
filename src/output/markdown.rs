//! Markdown tree document output
//!
//! Wraps the plain-text tree in a titled section with a fenced code block,
//! suitable for dropping into a README.

use std::fs;
use std::io;
use std::path::Path;

use crate::tree::DirectoryNode;

use super::text::render_tree;

/// Render the markdown document.
pub fn render_markdown(root_name: &str, root: &DirectoryNode) -> String {
    format!(
        "# Project tree\n\n```\n{}```\n",
        render_tree(root_name, root)
    )
}

/// Write the markdown document to `path`.
pub fn write_markdown(path: &Path, root_name: &str, root: &DirectoryNode) -> io::Result<()> {
    fs::write(path, render_markdown(root_name, root))
}
