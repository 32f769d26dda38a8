//! Tree rendering and serialization
//!
//! Independent projections over a fully built tree, all traversing children
//! in the builder's order:
//!
//! - `json` - the structured document (`project_structure.json`)
//! - `text` - pure plain-text tree, for embedding in documentation
//! - `markdown` - the plain tree wrapped in a titled fenced code block
//! - `console` - colorized tree on stdout, for operator inspection

mod console;
mod json;
mod markdown;
mod text;

// Re-export public functions
pub use console::print_tree;
pub use json::{to_pretty_json, write_document};
pub use markdown::{render_markdown, write_markdown};
pub use text::render_tree;
