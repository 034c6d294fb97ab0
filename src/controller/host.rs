//! External command interface
//!
//! The controller never runs commands itself; the runtime calls a
//! [`CommandHost`] on its behalf.

use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::jj::{JjError, JjExecutor};

/// Default screenshot tool (macOS `screencapture`)
pub const SCREENSHOT_COMMAND: &str = "screencapture";

#[derive(Error, Debug)]
pub enum HostError {
    #[error(transparent)]
    Jj(#[from] JjError),

    #[error("screenshot command `{command}` failed: {stderr}")]
    Screenshot { command: String, stderr: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("system clock is before the Unix epoch")]
    Clock,
}

/// Requests the controller delegates to the host
pub trait CommandHost: Send + Sync {
    /// Raw pipe-delimited log of the repository at `repo_path`
    fn get_log(&self, repo_path: &str) -> Result<String, HostError>;

    /// Set the description of `revision`
    fn describe(&self, repo_path: &str, revision: &str, message: &str) -> Result<(), HostError>;

    /// Capture the window; returns the image path
    fn take_screenshot(&self) -> Result<String, HostError>;
}

/// Host backed by the real `jj` binary and the platform screenshot tool
#[derive(Debug, Clone)]
pub struct SystemHost {
    jj_command: String,
    screenshot_command: String,
    screenshot_dir: PathBuf,
}

impl Default for SystemHost {
    fn default() -> Self {
        Self {
            jj_command: crate::jj::constants::JJ_COMMAND.to_string(),
            screenshot_command: SCREENSHOT_COMMAND.to_string(),
            screenshot_dir: std::env::temp_dir(),
        }
    }
}

impl SystemHost {
    pub fn new(
        jj_command: impl Into<String>,
        screenshot_command: impl Into<String>,
        screenshot_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            jj_command: jj_command.into(),
            screenshot_command: screenshot_command.into(),
            screenshot_dir: screenshot_dir.into(),
        }
    }

    fn executor(&self, repo_path: &str) -> JjExecutor {
        JjExecutor::with_repo_path(repo_path).with_program(&self.jj_command)
    }

    /// Target file of a screenshot taken at `timestamp`
    pub fn screenshot_path(&self, timestamp: u64) -> PathBuf {
        self.screenshot_dir
            .join(format!("jj-gui-screenshot-{timestamp}.png"))
    }
}

impl CommandHost for SystemHost {
    fn get_log(&self, repo_path: &str) -> Result<String, HostError> {
        Ok(self.executor(repo_path).log_raw()?)
    }

    fn describe(&self, repo_path: &str, revision: &str, message: &str) -> Result<(), HostError> {
        Ok(self.executor(repo_path).describe(revision, message)?)
    }

    fn take_screenshot(&self) -> Result<String, HostError> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| HostError::Clock)?
            .as_secs();
        let path = self.screenshot_path(timestamp);

        // -w: window selection, -o: no window shadow
        let output = Command::new(&self.screenshot_command)
            .args(["-w", "-o"])
            .arg(&path)
            .output()?;

        if output.status.success() {
            Ok(path.to_string_lossy().into_owned())
        } else {
            Err(HostError::Screenshot {
                command: self.screenshot_command.clone(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}
