//! Node types for the scanned tree

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single entry in the scanned tree, discriminated by a `type` tag in JSON.
///
/// Paths are always relative to the scan root and use forward slashes on every
/// platform; the root directory itself has path `"."`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Directory(DirectoryNode),
    File(FileNode),
}

impl Node {
    pub fn path(&self) -> &str {
        match self {
            Node::Directory(d) => &d.path,
            Node::File(f) => &f.path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory(_))
    }
}

/// A directory entry. Children are keyed by entry name and keep the walk
/// order: directories first, then files, each group sorted case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryNode {
    pub path: String,
    /// Reserved for annotation by external tooling; never populated here.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub children: IndexMap<String, Node>,
}

impl DirectoryNode {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Count directories and files in the subtree, excluding this node itself.
    pub fn counts(&self) -> (usize, usize) {
        let mut dirs = 0;
        let mut files = 0;
        for child in self.children.values() {
            match child {
                Node::Directory(d) => {
                    dirs += 1;
                    let (sub_dirs, sub_files) = d.counts();
                    dirs += sub_dirs;
                    files += sub_files;
                }
                Node::File(_) => files += 1,
            }
        }
        (dirs, files)
    }
}

/// A file entry. The manifest fields are present (even when empty) exactly
/// when the file was recognized as a manifest and its document contains the
/// field; they are omitted entirely otherwise. Consumers rely on that
/// absence-vs-empty distinction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileNode {
    pub path: String,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scripts: Option<IndexMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<IndexMap<String, String>>,
    #[serde(rename = "devDependencies", skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<IndexMap<String, String>>,
}

impl FileNode {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}
