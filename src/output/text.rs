//! Plain-text tree rendering
//!
//! Pure function of the tree: no color codes, no I/O. Suitable for embedding
//! in documentation.

use crate::tree::{DirectoryNode, Node};

/// Render the tree as an indented, branch-drawn listing. Directories carry a
/// `/` suffix; children appear in the builder's order.
pub fn render_tree(root_name: &str, root: &DirectoryNode) -> String {
    let mut output = String::new();
    output.push_str(root_name);
    output.push_str("/\n");
    render_children(root, &mut output, "");
    output
}

fn render_children(node: &DirectoryNode, output: &mut String, prefix: &str) {
    let count = node.children.len();
    for (i, (name, child)) in node.children.iter().enumerate() {
        let is_last = i == count - 1;
        let connector = if is_last { "└── " } else { "├── " };
        output.push_str(prefix);
        output.push_str(connector);
        output.push_str(name);

        match child {
            Node::Directory(dir) => {
                output.push_str("/\n");
                let child_prefix = if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };
                render_children(dir, output, &child_prefix);
            }
            Node::File(_) => output.push('\n'),
        }
    }
}
