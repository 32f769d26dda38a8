//! JSON document output
//!
//! The document's top level is a single-entry object mapping the root
//! directory's name to its node. Serialization goes straight from the typed
//! tree to text; routing through `serde_json::Value` would re-sort child keys
//! alphabetically and lose the builder's order.

use std::fs;
use std::io;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::tree::DirectoryNode;

/// Borrowed view of the root so it serializes with the same `type` tag as
/// every other node, without cloning the tree into a `Node`.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RootNode<'a> {
    Directory(&'a DirectoryNode),
}

/// Serialize the document to pretty-printed JSON.
pub fn to_pretty_json(root_name: &str, root: &DirectoryNode) -> io::Result<String> {
    let mut document = IndexMap::new();
    document.insert(root_name, RootNode::Directory(root));
    serde_json::to_string_pretty(&document).map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// Write the document to `path`.
pub fn write_document(path: &Path, root_name: &str, root: &DirectoryNode) -> io::Result<()> {
    let mut json = to_pretty_json(root_name, root)?;
    json.push('\n');
    fs::write(path, json)
}
