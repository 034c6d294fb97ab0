//! Session and per-concern state

use crate::model::Commit;

/// Repository session owned by the controller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Open repository (None = no repository)
    pub repository_path: Option<String>,
    /// Records in log order, replaced wholesale on every fetch
    pub commits: Vec<Commit>,
    /// Selected commit; always an id present in `commits`
    pub selected_commit_id: Option<String>,
}

impl SessionState {
    /// Look up a commit by id
    pub fn find_commit(&self, id: &str) -> Option<&Commit> {
        self.commits.iter().find(|c| c.id == id)
    }

    pub(crate) fn find_commit_mut(&mut self, id: &str) -> Option<&mut Commit> {
        self.commits.iter_mut().find(|c| c.id == id)
    }

    /// The selected commit, if it is still present
    pub fn selected_commit(&self) -> Option<&Commit> {
        self.selected_commit_id
            .as_deref()
            .and_then(|id| self.find_commit(id))
    }
}

/// Where the log display stands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogStatus {
    #[default]
    NoRepository,
    Loading,
    Displayed,
    /// Fetch failed; the repository stays open
    Error(String),
}

/// Description save progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveState {
    #[default]
    Idle,
    Saving,
    /// Reverts to `Idle` after [`SAVE_RESET_DELAY`](super::SAVE_RESET_DELAY)
    Saved,
}

impl SaveState {
    /// Save button label
    pub fn label(self) -> &'static str {
        match self {
            SaveState::Idle => "Save",
            SaveState::Saving => "Saving...",
            SaveState::Saved => "Saved!",
        }
    }
}

/// Screenshot capture progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScreenshotState {
    #[default]
    Idle,
    Capturing,
}
