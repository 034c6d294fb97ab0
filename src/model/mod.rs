//! Data models for jj-gui
//!
//! UI-independent data structures for log records and table layout.

mod columns;
mod commit;

pub use columns::{Column, ColumnWidths, MIN_COLUMN_WIDTH, UnknownColumn};
pub use commit::{Commit, NO_DESCRIPTION, UNKNOWN};
