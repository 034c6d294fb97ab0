//! jj command executor
//!
//! Handles running jj commands and capturing their output.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use super::JjError;
use super::constants::{self, commands, errors, flags};
use super::template::Templates;

/// Executor for jj commands
#[derive(Debug, Clone)]
pub struct JjExecutor {
    /// jj binary to invoke
    program: String,
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for JjExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl JjExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self {
            program: constants::JJ_COMMAND.to_string(),
            repo_path: None,
        }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: Some(path.into()),
            ..Self::new()
        }
    }

    /// Use a different jj binary (e.g. from configuration)
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn repo_path(&self) -> Option<&PathBuf> {
        self.repo_path.as_ref()
    }

    /// Run a jj command with the given arguments
    ///
    /// Automatically adds `--color=never` to ensure parseable output.
    pub fn run(&self, args: &[&str]) -> Result<String, JjError> {
        let mut cmd = Command::new(&self.program);

        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }

        cmd.arg(flags::NO_COLOR);
        cmd.args(args);

        debug!(program = %self.program, ?args, repo = ?self.repo_path, "running jj");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JjError::JjNotFound
            } else {
                JjError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_REPO) {
                return Err(JjError::NotARepository { stderr });
            }

            Err(JjError::CommandFailed { stderr, exit_code })
        }
    }

    /// Run `jj log` with the pipe-delimited template
    pub fn log_raw(&self) -> Result<String, JjError> {
        self.run(&[
            commands::LOG,
            flags::NO_GRAPH,
            flags::TEMPLATE,
            Templates::log(),
        ])
    }

    /// Run `jj describe <revision> --message=<message>`
    pub fn describe(&self, revision: &str, message: &str) -> Result<(), JjError> {
        let message = message_arg(message);
        self.run(&[commands::DESCRIBE, revision, &message])?;
        Ok(())
    }
}

fn message_arg(message: &str) -> String {
    format!("{}={message}", flags::MESSAGE)
}
