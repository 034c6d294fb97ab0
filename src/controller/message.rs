//! Controller inputs and outputs
//!
//! Every user interaction and every completed host request arrives as a
//! [`Msg`]. Every side effect the controller wants performed leaves as an
//! [`Effect`].

use std::time::Duration;

use crate::model::ColumnWidths;

/// Events reduced by [`Controller::update`](super::Controller::update)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User asked to open a repository (shows the directory picker)
    OpenRepositoryRequested,
    /// Directory picker closed; None = cancelled
    DirectoryPicked(Option<String>),
    /// Open a repository directly
    OpenRepository(String),
    /// Re-fetch the log of the open repository
    ReloadLog,
    /// A log fetch finished
    LogLoaded {
        generation: u64,
        result: Result<String, String>,
    },
    /// A row was clicked
    SelectCommit(String),
    /// Detail panel close button
    CloseDetail,
    /// Save button, with the editor's current text
    SaveDescription(String),
    /// A describe request finished
    DescribeFinished {
        token: u64,
        /// Repository the request was issued against
        repo_path: String,
        commit_id: String,
        message: String,
        result: Result<(), String>,
    },
    /// The "Saved!" label timer fired
    SaveResetElapsed { token: u64 },
    TakeScreenshot,
    ScreenshotFinished(Result<String, String>),
    /// Oldest alert acknowledged
    DismissAlert,
    /// Pointer pressed; `handle` is the column name of a resize handle
    PointerDown { handle: Option<String>, x: i32 },
    PointerMove { x: i32 },
    PointerUp,
}

/// Side effects requested by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show the directory picker; answer with [`Msg::DirectoryPicked`]
    PickDirectory,
    /// Answer with [`Msg::LogLoaded`]
    FetchLog { generation: u64, repo_path: String },
    /// Answer with [`Msg::DescribeFinished`]
    Describe {
        token: u64,
        repo_path: String,
        commit_id: String,
        message: String,
    },
    /// Answer with [`Msg::ScreenshotFinished`]
    TakeScreenshot,
    /// Send [`Msg::SaveResetElapsed`] after `delay`
    ScheduleSaveReset { token: u64, delay: Duration },
    /// Best-effort preference writes
    PersistLastRepo(String),
    PersistColumnWidths(ColumnWidths),
}
