//! TestRepo helper for integration tests.
//!
//! Provides a temporary jj repository for exercising jj-gui against the
//! real binary.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Whether a `jj` binary can be run
pub fn jj_available() -> bool {
    Command::new("jj")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// A temporary jj repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new jj repository in a temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");

        let output = Command::new("jj")
            .args(["git", "init"])
            .current_dir(dir.path())
            .env("JJ_USER", "Test User")
            .env("JJ_EMAIL", "test@example.com")
            .output()
            .expect("Failed to execute jj git init");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("jj git init failed: {}", stderr);
        }

        Self { dir }
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Repository root as the string jj-gui stores
    pub fn path_string(&self) -> String {
        self.path().to_string_lossy().into_owned()
    }

    /// Execute a jj command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn jj(&self, args: &[&str]) -> String {
        let output = Command::new("jj")
            .args(args)
            .current_dir(self.path())
            .env("JJ_USER", "Test User")
            .env("JJ_EMAIL", "test@example.com")
            .output()
            .expect("Failed to execute jj command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "jj {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Get the current change ID (short form, 8 characters).
    pub fn current_change_id(&self) -> String {
        self.jj(&["log", "-r", "@", "--no-graph", "-T", "change_id.shortest(8)"])
            .trim()
            .to_string()
    }

    /// Get the description of a revision.
    pub fn get_description(&self, rev: &str) -> String {
        self.jj(&["log", "-r", rev, "--no-graph", "-T", "description"])
            .trim()
            .to_string()
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
