//! Reusable UI widgets

mod alert;
mod path_prompt;
mod sidebar;
mod status_bar;

pub use alert::render_alert;
pub use path_prompt::render_path_prompt;
pub use sidebar::render_sidebar;
pub use status_bar::{build_status_bar, render_status_bar};
