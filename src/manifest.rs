//! Manifest file recognition and parsing
//!
//! Manifest extraction is a pluggable strategy keyed by bare file name, so
//! other manifest formats can be added without touching the walker. The
//! standard registry recognizes exactly `package.json`.

use std::fs;
use std::io;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

/// Why a recognized manifest could not be read.
///
/// These are always recoverable: the walker reports them as warnings and
/// creates the file node without manifest fields.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("read failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The three recognized top-level manifest fields.
///
/// A field is `Some` exactly when the manifest document contains it, even as
/// an empty mapping. Unknown top-level fields are ignored; a field with the
/// wrong shape (not a string-to-string mapping) fails the whole parse.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ManifestFields {
    pub scripts: Option<IndexMap<String, String>>,
    pub dependencies: Option<IndexMap<String, String>>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: Option<IndexMap<String, String>>,
}

/// A manifest format the walker can recognize by file name.
pub trait ManifestReader {
    /// Check whether this reader claims the given bare file name.
    /// Matching is case-sensitive.
    fn recognizes(&self, file_name: &str) -> bool;

    /// Read and parse the manifest at `path`.
    fn read(&self, path: &Path) -> Result<ManifestFields, ManifestError>;

    /// Descriptive name for this reader (e.g., "package.json").
    fn name(&self) -> &'static str;
}

/// Reader for npm-style `package.json` manifests.
pub struct PackageJsonReader;

impl ManifestReader for PackageJsonReader {
    fn recognizes(&self, file_name: &str) -> bool {
        file_name == "package.json"
    }

    fn read(&self, path: &Path) -> Result<ManifestFields, ManifestError> {
        let content = fs::read_to_string(path)?;
        let fields = serde_json::from_str(&content)?;
        Ok(fields)
    }

    fn name(&self) -> &'static str {
        "package.json"
    }
}

/// The set of manifest readers consulted during a walk.
pub struct ManifestRegistry {
    readers: Vec<Box<dyn ManifestReader>>,
}

impl ManifestRegistry {
    /// Registry with the standard readers (`package.json` only).
    pub fn standard() -> Self {
        Self {
            readers: vec![Box::new(PackageJsonReader)],
        }
    }

    /// Registry that recognizes nothing.
    pub fn empty() -> Self {
        Self {
            readers: Vec::new(),
        }
    }

    /// Add a reader to the registry.
    pub fn register(&mut self, reader: Box<dyn ManifestReader>) {
        self.readers.push(reader);
    }

    /// Find the reader claiming the given bare file name, if any.
    pub fn reader_for(&self, file_name: &str) -> Option<&dyn ManifestReader> {
        self.readers
            .iter()
            .find(|r| r.recognizes(file_name))
            .map(|r| r.as_ref())
    }
}

impl Default for ManifestRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
