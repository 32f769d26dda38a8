//! Test harness for grove integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub struct ScanDir {
    dir: TempDir,
}

impl ScanDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Name the JSON document is keyed under: the temp directory's base name.
    pub fn root_name(&self) -> String {
        self.dir
            .path()
            .file_name()
            .expect("temp dir has a name")
            .to_string_lossy()
            .to_string()
    }

    /// Read and parse the JSON document written by a scan run in this dir.
    pub fn read_document(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.path().join("project_structure.json"))
            .expect("project_structure.json should exist");
        serde_json::from_str(&content).expect("document should be valid JSON")
    }

    /// The root node of the document (the single top-level entry).
    pub fn read_root_node(&self) -> serde_json::Value {
        self.read_document()[self.root_name()].clone()
    }
}

pub fn run_grove(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_grove");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run grove");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = ScanDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let dir = ScanDir::new();
        let file_path = dir.add_file("sub/test.rs", "fn main() {}");
        assert!(file_path.exists());
    }

    #[test]
    fn test_harness_add_dir() {
        let dir = ScanDir::new();
        let dir_path = dir.add_dir("empty");
        assert!(dir_path.is_dir());
    }
}
