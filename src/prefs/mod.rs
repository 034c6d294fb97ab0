//! UI preference persistence
//!
//! Two values survive restarts: the last opened repository and the log
//! table column widths. Both live in a string-keyed store.

mod file;
mod memory;

pub use file::{FileStore, default_prefs_path};
pub use memory::MemoryStore;

use std::path::PathBuf;

use thiserror::Error;

use crate::model::ColumnWidths;

/// Key of the last opened repository path
pub const LAST_REPO_KEY: &str = "jj-gui:last-repo";

/// Key of the serialized column widths
pub const COLUMN_WIDTHS_KEY: &str = "jj-gui:column-widths";

/// Errors raised while writing preferences
#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("Failed to write preferences to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// String-keyed preference storage
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// Last opened repository, if any
pub fn load_last_repo(store: &dyn PreferenceStore) -> Option<String> {
    store.get(LAST_REPO_KEY).filter(|path| !path.is_empty())
}

pub fn save_last_repo(store: &mut dyn PreferenceStore, path: &str) -> Result<(), PrefsError> {
    store.set(LAST_REPO_KEY, path)
}

/// Persisted column widths merged over the defaults
pub fn load_column_widths(store: &dyn PreferenceStore) -> ColumnWidths {
    store
        .get(COLUMN_WIDTHS_KEY)
        .map(|saved| ColumnWidths::from_json(&saved))
        .unwrap_or_default()
}

pub fn save_column_widths(
    store: &mut dyn PreferenceStore,
    widths: &ColumnWidths,
) -> Result<(), PrefsError> {
    store.set(COLUMN_WIDTHS_KEY, &widths.to_json())
}
