//! Filter configuration for tree walking

use glob::Pattern;

/// Directory and file names skipped by default at any depth.
pub const DEFAULT_IGNORE: &[&str] = &[
    "node_modules",
    ".git",
    "__pycache__",
    ".venv",
    "venv",
    ".next",
    "dist",
    "build",
    ".nuxt",
    ".pytest_cache",
    ".mypy_cache",
];

/// Configuration for which entries the walker skips.
///
/// `ignore` and `discard_files` match bare entry names; `discard_files_in` and
/// `discard_all_in` match paths relative to the scan root (forward slashes).
#[derive(Debug, Clone)]
pub struct ScanFilters {
    /// Names skipped outright at any depth. Entries may be glob patterns.
    pub ignore: Vec<String>,
    /// Path prefixes below which files (but not subdirectories) are skipped.
    pub discard_files_in: Vec<String>,
    /// Paths recorded as empty directories, with no descent below them.
    pub discard_all_in: Vec<String>,
    /// File names skipped globally, regardless of location.
    pub discard_files: Vec<String>,
}

impl Default for ScanFilters {
    fn default() -> Self {
        Self {
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
            discard_files_in: Vec::new(),
            discard_all_in: Vec::new(),
            discard_files: Vec::new(),
        }
    }
}

impl ScanFilters {
    /// Filters with an empty ignore set instead of the defaults.
    pub fn empty() -> Self {
        Self {
            ignore: Vec::new(),
            ..Self::default()
        }
    }

    /// Check whether a bare entry name is in the ignore set.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore
            .iter()
            .any(|pattern| pattern == name || glob_match(pattern, name))
    }

    /// Check whether a bare file name is discarded globally.
    pub fn discards_file_name(&self, name: &str) -> bool {
        self.discard_files.iter().any(|n| n == name)
    }

    /// Check whether a directory's relative path exactly matches a
    /// discard-all entry.
    pub fn discards_all_under(&self, relative: &str) -> bool {
        self.discard_all_in
            .iter()
            .any(|p| p.trim_end_matches('/') == relative)
    }

    /// Check whether a file's relative path falls under a discard-files
    /// prefix. The rule is: the path begins with the prefix followed by a
    /// path separator, at any depth.
    pub fn discards_files_under(&self, relative: &str) -> bool {
        self.discard_files_in.iter().any(|p| {
            let prefix = p.trim_end_matches('/');
            !prefix.is_empty()
                && relative.len() > prefix.len()
                && relative.starts_with(prefix)
                && relative.as_bytes()[prefix.len()] == b'/'
        })
    }
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Split a comma- or newline-separated option value into trimmed entries.
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .replace(',', "\n")
        .lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
