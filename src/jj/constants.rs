//! jj-specific constants
//!
//! Centralized definitions for jj command names, flags, and error patterns.

/// Default jj command binary name
pub const JJ_COMMAND: &str = "jj";

/// jj subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const DESCRIBE: &str = "describe";
}

/// jj command flags
pub mod flags {
    /// Disable color output for parsing (global flag, safe for all commands)
    pub const NO_COLOR: &str = "--color=never";
    /// Disable graph output for parsing (jj log only, NOT a global flag)
    pub const NO_GRAPH: &str = "--no-graph";
    /// Specify template
    pub const TEMPLATE: &str = "-T";
    /// Specify repository path
    pub const REPO_PATH: &str = "-R";
    /// Description message for `jj describe`; always joined to its value
    /// with `=` so a message starting with `-` is not read as a flag
    pub const MESSAGE: &str = "--message";
}

/// Error detection patterns in jj output
pub mod errors {
    /// Pattern indicating not a jj repository
    pub const NOT_A_REPO: &str = "There is no jj repo";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jj_command_name() {
        assert_eq!(JJ_COMMAND, "jj");
    }

    #[test]
    fn test_no_color_flag_format() {
        assert!(flags::NO_COLOR.starts_with("--color="));
    }

    #[test]
    fn test_not_a_repo_pattern_matches_markup_check() {
        // The error panel looks for this lowercase fragment
        assert!(errors::NOT_A_REPO.contains("no jj repo"));
    }
}
