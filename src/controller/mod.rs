//! Application controller
//!
//! Owns the session state and reduces [`Msg`] values into state changes,
//! re-rendered markup and [`Effect`] requests. Split by concern:
//! - `session`: repository open and log loading
//! - `detail`: selection and the detail panel
//! - `save`: description editing
//! - `screenshot`: debug screenshot capture
//! - `resize`: column drag state machine

mod detail;
mod document;
pub mod host;
mod message;
pub mod resize;
mod runtime;
mod save;
mod screenshot;
mod session;
mod state;


use std::time::Duration;

use tracing::debug;

pub use document::{
    DetailPanel, Document, SCREENSHOT_BUSY_LABEL, SCREENSHOT_IDLE_LABEL, repo_display_name,
};
pub use host::{CommandHost, HostError, SystemHost};
pub use message::{Effect, Msg};
pub use resize::{ColumnResize, ResizeState, layout_vars};
pub use runtime::Runtime;
pub use state::{LogStatus, SaveState, ScreenshotState, SessionState};

use crate::model::ColumnWidths;

/// How long "Saved!" stays before the button resets
pub const SAVE_RESET_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug)]
pub struct Controller {
    pub(crate) session: SessionState,
    pub(crate) log_status: LogStatus,
    /// Sidebar labels (deduplicated bookmarks, or the fallback)
    pub(crate) branches: Vec<String>,
    /// Bumped on every fetch; older responses are stale
    pub(crate) generation: u64,
    pub(crate) save: SaveState,
    /// Bumped on every save; older completions and timers are stale
    pub(crate) save_token: u64,
    pub(crate) screenshot: ScreenshotState,
    pub(crate) widths: ColumnWidths,
    pub(crate) resize: ColumnResize,
    pub(crate) document: Document,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(ColumnWidths::default())
    }
}

impl Controller {
    /// Create a controller with the persisted column widths
    pub fn new(widths: ColumnWidths) -> Self {
        Self {
            session: SessionState::default(),
            log_status: LogStatus::NoRepository,
            branches: Vec::new(),
            generation: 0,
            save: SaveState::Idle,
            save_token: 0,
            screenshot: ScreenshotState::Idle,
            widths,
            resize: ColumnResize::new(),
            document: Document::default(),
        }
    }

    /// Initial display: restore `last_repo` or show the empty state
    pub fn startup(&mut self, last_repo: Option<String>) -> Vec<Effect> {
        if let Some(path) = last_repo {
            debug!(%path, "restoring last repository");
            self.session.repository_path = Some(path);
        }
        self.display_log()
    }

    /// Reduce one message
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        debug!(?msg, "update");
        match msg {
            Msg::OpenRepositoryRequested => vec![Effect::PickDirectory],
            Msg::DirectoryPicked(None) => Vec::new(),
            Msg::DirectoryPicked(Some(path)) | Msg::OpenRepository(path) => {
                self.open_repository(path)
            }
            Msg::ReloadLog => self.reload_log(),
            Msg::LogLoaded { generation, result } => {
                self.on_log_loaded(generation, result);
                Vec::new()
            }
            Msg::SelectCommit(id) => {
                self.select_commit(&id);
                Vec::new()
            }
            Msg::CloseDetail => {
                self.close_detail();
                Vec::new()
            }
            Msg::SaveDescription(message) => self.save_description(message),
            Msg::DescribeFinished {
                token,
                repo_path,
                commit_id,
                message,
                result,
            } => self.on_describe_finished(token, &repo_path, commit_id, message, result),
            Msg::SaveResetElapsed { token } => {
                self.on_save_reset(token);
                Vec::new()
            }
            Msg::TakeScreenshot => self.take_screenshot(),
            Msg::ScreenshotFinished(result) => {
                self.on_screenshot_finished(result);
                Vec::new()
            }
            Msg::DismissAlert => {
                self.document.alerts.pop_front();
                Vec::new()
            }
            Msg::PointerDown { handle, x } => {
                self.resize.pointer_down(handle.as_deref(), x, &self.widths);
                Vec::new()
            }
            Msg::PointerMove { x } => {
                self.resize.pointer_move(x, &mut self.widths);
                Vec::new()
            }
            Msg::PointerUp => {
                if self.resize.pointer_up() {
                    vec![Effect::PersistColumnWidths(self.widths)]
                } else {
                    Vec::new()
                }
            }
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn log_status(&self) -> &LogStatus {
        &self.log_status
    }

    pub fn branches(&self) -> &[String] {
        &self.branches
    }

    pub fn save_state(&self) -> SaveState {
        self.save
    }

    pub fn screenshot_state(&self) -> ScreenshotState {
        self.screenshot
    }

    pub fn widths(&self) -> &ColumnWidths {
        &self.widths
    }

    pub fn resize_state(&self) -> ResizeState {
        self.resize.state()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Standalone HTML page of the current display
    pub fn render_page(&self) -> String {
        self.document.to_page(&layout_vars(&self.widths))
    }
}
