//! jj-gui - commit log viewer and description editor for Jujutsu
//!
//! This library provides:
//! - [`jj`]: Jujutsu command execution and log parsing
//! - [`model`]: Commit records and column layout
//! - [`markup`]: HTML fragments of the log display
//! - [`controller`]: Session state machine, host requests and effects
//! - [`prefs`]: Persisted UI preferences
//! - [`app`]: Terminal application state and input handling
//! - [`ui`]: Terminal rendering
//! - [`config`], [`logging`]: Startup configuration

pub mod app;
pub mod config;
pub mod controller;
pub mod jj;
pub mod keys;
pub mod logging;
pub mod markup;
pub mod model;
pub mod prefs;
pub mod ui;
