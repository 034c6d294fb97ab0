//! Rendered display state
//!
//! The document is the controller's output surface: markup fragments for
//! the log list and sidebar plus the text of the few labelled controls.

use std::collections::VecDeque;

use crate::markup::{self, DetailFields, Page};
use crate::model::Commit;

/// Detail panel contents
///
/// A copy of the selected commit's fields. Empty author/date read
/// "Unknown" here and only here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub id: String,
    pub author: String,
    pub date: String,
    pub message: String,
}

impl DetailPanel {
    pub fn from_commit(commit: &Commit) -> Self {
        Self {
            id: commit.id.clone(),
            author: commit.detail_author().to_string(),
            date: commit.detail_date().to_string(),
            message: commit.message.clone(),
        }
    }
}

pub const SCREENSHOT_IDLE_LABEL: &str = "📸 Debug";
pub const SCREENSHOT_BUSY_LABEL: &str = "📸 Capturing...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Log list: rows, or an empty/loading/error panel
    pub log_html: String,
    /// Sidebar branch list
    pub branches_html: String,
    /// Last component of the repository path
    pub repo_name: Option<String>,
    /// Full repository path (tooltip)
    pub repo_title: Option<String>,
    /// None = detail panel hidden
    pub detail: Option<DetailPanel>,
    pub save_button: String,
    pub screenshot_button: String,
    /// Blocking messages, oldest first
    pub alerts: VecDeque<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            log_html: String::new(),
            branches_html: String::new(),
            repo_name: None,
            repo_title: None,
            detail: None,
            save_button: "Save".to_string(),
            screenshot_button: SCREENSHOT_IDLE_LABEL.to_string(),
            alerts: VecDeque::new(),
        }
    }
}

impl Document {
    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push_back(message.into());
    }

    /// Alert currently blocking input
    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    /// Standalone HTML page of the current state
    pub fn to_page(&self, layout_vars: &[(&'static str, String)]) -> String {
        let detail = self.detail.as_ref().map(|d| DetailFields {
            id: &d.id,
            author: &d.author,
            date: &d.date,
            message: &d.message,
        });
        markup::build_page(&Page {
            repo_name: self.repo_name.as_deref(),
            repo_title: self.repo_title.as_deref(),
            branches_html: &self.branches_html,
            log_html: &self.log_html,
            layout_vars,
            detail,
        })
    }
}

/// Display name of a repository: its last path component
pub fn repo_display_name(path: &str) -> &str {
    path.trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(path)
}
