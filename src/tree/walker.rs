//! TreeWalker - builds the full tree in memory

use std::fs;
use std::path::Path;

use crate::manifest::ManifestRegistry;
use crate::report::Reporter;

use super::config::ScanFilters;
use super::node::{DirectoryNode, FileNode, Node};

/// Recursive tree builder.
///
/// The walk is single-threaded and depth-first; filters are applied before a
/// node is materialized, so excluded entries never appear in the output and
/// never trigger a file read.
pub struct TreeWalker {
    filters: ScanFilters,
    manifests: ManifestRegistry,
}

impl TreeWalker {
    pub fn new(filters: ScanFilters) -> Self {
        Self {
            filters,
            manifests: ManifestRegistry::standard(),
        }
    }

    /// Replace the manifest registry (default recognizes `package.json`).
    pub fn with_manifests(mut self, manifests: ManifestRegistry) -> Self {
        self.manifests = manifests;
        self
    }

    /// Walk the tree rooted at `root`.
    ///
    /// Returns `None` when `root` is not an existing directory — the single
    /// fatal precondition. Every later anomaly (unreadable manifest, entry
    /// vanished mid-walk) is reported as a warning and recovered.
    pub fn walk(&self, root: &Path, reporter: &mut dyn Reporter) -> Option<DirectoryNode> {
        if !root.is_dir() {
            return None;
        }
        Some(self.walk_dir(root, root, reporter))
    }

    fn walk_dir(&self, dir: &Path, root: &Path, reporter: &mut dyn Reporter) -> DirectoryNode {
        let relative = relative_slash_path(dir, root);
        let mut node = DirectoryNode::new(relative);

        // Recorded but never descended into.
        if self.filters.discards_all_under(&node.path) {
            return node;
        }

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                reporter.warn(&format!("cannot read directory {}: {}", dir.display(), e));
                return node;
            }
        };

        // Directories before files, each group sorted case-insensitively;
        // the raw name breaks ties so output is stable across platforms.
        let mut entries: Vec<(String, bool)> = entries
            .filter_map(|entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        reporter.warn(&format!(
                            "skipping unreadable entry in {}: {}",
                            dir.display(),
                            e
                        ));
                        return None;
                    }
                };
                let file_type = match entry.file_type() {
                    Ok(t) => t,
                    Err(e) => {
                        reporter.warn(&format!(
                            "skipping vanished entry {}: {}",
                            entry.path().display(),
                            e
                        ));
                        return None;
                    }
                };
                if file_type.is_symlink() {
                    return None;
                }
                let name = entry.file_name().to_string_lossy().to_string();
                Some((name, file_type.is_dir()))
            })
            .collect();
        entries.sort_by(|a, b| {
            let key_a = (!a.1, a.0.to_lowercase());
            let key_b = (!b.1, b.0.to_lowercase());
            key_a.cmp(&key_b).then_with(|| a.0.cmp(&b.0))
        });

        for (name, is_dir) in entries {
            if self.filters.is_ignored(&name) {
                continue;
            }

            let entry_path = dir.join(&name);

            if is_dir {
                let child = self.walk_dir(&entry_path, root, reporter);
                node.children.insert(name, Node::Directory(child));
            } else {
                if self.filters.discards_file_name(&name) {
                    continue;
                }
                let relative = relative_slash_path(&entry_path, root);
                if self.filters.discards_files_under(&relative) {
                    continue;
                }

                let mut file = FileNode::new(relative);
                if let Some(reader) = self.manifests.reader_for(&name) {
                    match reader.read(&entry_path) {
                        Ok(fields) => {
                            file.scripts = fields.scripts;
                            file.dependencies = fields.dependencies;
                            file.dev_dependencies = fields.dev_dependencies;
                        }
                        Err(e) => {
                            reporter.warn(&format!(
                                "could not read {}: {}",
                                entry_path.display(),
                                e
                            ));
                        }
                    }
                }
                node.children.insert(name, Node::File(file));
            }
        }

        node
    }
}

/// Path of `path` relative to `root`, forward-slash joined on every platform.
/// The root itself maps to `"."`.
fn relative_slash_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    if relative.as_os_str().is_empty() {
        return ".".to_string();
    }
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
