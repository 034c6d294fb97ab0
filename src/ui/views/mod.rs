//! View components
//!
//! The log table fills the main area; the detail panel joins it while a
//! commit is selected.

mod detail;
mod log_table;

pub use detail::render_detail;
pub use log_table::{TableLayout, empty_text, render_log_table, scroll_offset};
