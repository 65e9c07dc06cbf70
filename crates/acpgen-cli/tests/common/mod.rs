//! Common test utilities for CLI testing.

use std::path::Path;

use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

/// Test context with temporary working directory
pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Drop a marker file into the working directory
    pub fn with_marker(self, content: &str) -> Self {
        std::fs::write(self.path().join("CLAUDE.md"), content).expect("Failed to write CLAUDE.md");
        self
    }

    /// Get path to temp directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a command configured for this context
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("acpgen").expect("Binary not found");
        cmd.current_dir(self.path()).env("NO_COLOR", "1"); // Disable colors for predictable output
        cmd
    }

    /// Sorted directory listing, for asserting the tool mutates nothing
    pub fn dir_entries(&self) -> Vec<String> {
        let mut entries: Vec<String> = std::fs::read_dir(self.path())
            .expect("Failed to read temp dir")
            .map(|entry| {
                entry
                    .expect("Failed to read dir entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        entries.sort();
        entries
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
