//! Placeholder, error and sidebar fragments

use super::escape_html;

/// Sidebar label shown when no commit carries a bookmark
pub const FALLBACK_BRANCH: &str = "main";

/// Fragment of jj's "There is no jj repo" error
const NOT_A_REPO_PATTERN: &str = "no jj repo";

const NOT_A_REPO_MESSAGE: &str = "Not a jj repository";

const FOLDER_ICON: &str = concat!(
    r#"<svg width="48" height="48" viewBox="0 0 16 16" fill="currentColor">"#,
    r#"<path d="M1 3.5A1.5 1.5 0 0 1 2.5 2h2.764c.958 0 1.76.56 2.311 1.184C7.985 3.648 8.48 4 9 4h4.5A1.5 1.5 0 0 1 15 5.5v7a1.5 1.5 0 0 1-1.5 1.5h-11A1.5 1.5 0 0 1 1 12.5v-9z"/>"#,
    "</svg>"
);

/// Shown while no repository is open
pub fn build_empty_state_html() -> String {
    format!(r#"<div class="empty">{FOLDER_ICON}<span>Open a jj repository</span></div>"#)
}

/// Shown when a repository's log parsed to zero records
pub fn build_no_commits_html() -> String {
    r#"<div class="empty">No commits</div>"#.to_string()
}

/// Shown while a log fetch is in flight
pub fn build_loading_html() -> String {
    r#"<div class="loading">Loading...</div>"#.to_string()
}

/// Text shown for a failed log fetch (unescaped)
pub fn error_text(error: &str) -> &str {
    if error.contains(NOT_A_REPO_PATTERN) {
        NOT_A_REPO_MESSAGE
    } else {
        error
    }
}

/// Error panel replacing the log list
pub fn build_error_html(error: &str) -> String {
    format!(r#"<div class="error">{}</div>"#, escape_html(error_text(error)))
}

/// One entry of the sidebar branch list
pub fn build_branch_html(branch: &str) -> String {
    format!(r#"<div class="branch-item">{}</div>"#, escape_html(branch))
}
