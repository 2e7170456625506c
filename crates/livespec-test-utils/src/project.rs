//! [`TestProject`] fixture for livespec test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory with helpers for setup and assertion.
///
/// All `path` arguments are relative to the project root.
///
/// # Example
///
/// ```rust,no_run
/// use livespec_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write("CLAUDE.md", "# My instructions\n");
/// project.assert_file_contains("CLAUDE.md", "My instructions");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a project directory with a given name inside a temporary
    /// parent, for tests that depend on the directory name.
    pub fn named(name: &str) -> (TempDir, PathBuf) {
        let parent = TempDir::new().unwrap();
        let root = parent.path().join(name);
        fs::create_dir(&root).unwrap();
        (parent, root)
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `path`.
    pub fn path(&self, path: &str) -> PathBuf {
        self.root().join(path)
    }

    /// Write `content` to `path`, creating parent directories.
    pub fn write(&self, path: &str, content: &str) {
        let full_path = self.path(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|_| panic!("Could not write file: {}", full_path.display()));
    }

    /// Create the directory `path` and its parents.
    pub fn mkdir(&self, path: &str) {
        fs::create_dir_all(self.path(path)).unwrap();
    }

    /// Read the file at `path`.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, path: &str) -> String {
        let full_path = self.path(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.path(path).exists()
    }

    /// Assert that `path` exists.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` does **not** exist.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }

    /// Assert that the file at `path` does not contain `content`.
    pub fn assert_file_not_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            !file_content.contains(content),
            "File {} unexpectedly contains: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
