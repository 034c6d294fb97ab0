//! HTML fragment builders
//!
//! Pure functions from log records and controller state to markup. Nothing
//! here performs I/O; the controller stores the fragments in its document.

mod commit;
mod page;
mod panels;

pub use commit::{build_branch_tags, build_commit_html, build_commit_row};
pub use page::{DetailFields, Page, build_page};
pub use panels::{
    FALLBACK_BRANCH, build_branch_html, build_empty_state_html, build_error_html,
    build_loading_html, build_no_commits_html, error_text,
};

/// Escape text for embedding in markup
///
/// `&` is replaced first so the entities produced for `<` and `>` are not
/// escaped again. Applying this twice escapes the ampersands of the first
/// pass; callers escape exactly once.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
