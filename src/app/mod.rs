//! Application module
//!
//! Contains the terminal application state and logic, split into:
//! - `state`: App struct, message dispatch and effect routing
//! - `input`: Key and mouse event handling
//! - `render`: UI rendering

mod input;
mod render;
mod state;

pub use state::{App, Focus};
