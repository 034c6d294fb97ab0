//! Shared fixtures for UI tests

#![allow(dead_code)]

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use jj_gui::app::App;
use jj_gui::controller::{CommandHost, Controller, HostError, Msg, Runtime};
use jj_gui::prefs::MemoryStore;

pub const WIDTH: u16 = 140;
pub const HEIGHT: u16 = 30;

pub const LOG: &str = "\
qpvuntsm|main|alice@example.com|2025-01-30|Add feature|working|
rlvkpnrz|v1.0 release|bob@example.com|2025-01-29|Fix bug||
zzzzzzzz||||||immutable
";

/// Host answering every request successfully
pub struct FakeHost;

impl CommandHost for FakeHost {
    fn get_log(&self, _repo_path: &str) -> Result<String, HostError> {
        Ok(LOG.to_string())
    }

    fn describe(&self, _repo_path: &str, _revision: &str, _message: &str) -> Result<(), HostError> {
        Ok(())
    }

    fn take_screenshot(&self) -> Result<String, HostError> {
        Ok("/tmp/shot.png".to_string())
    }
}

pub fn new_app() -> App {
    let runtime = Runtime::new(Arc::new(FakeHost), Box::new(MemoryStore::new()));
    let mut app = App::new(Controller::default(), runtime);
    app.start(None);
    app
}

/// App showing `raw` as the log of `/work/demo`
pub fn loaded_app(raw: &str) -> App {
    let mut app = new_app();
    app.dispatch(Msg::OpenRepository("/work/demo".to_string()));
    app.dispatch(Msg::LogLoaded {
        generation: 1,
        result: Ok(raw.to_string()),
    });
    app
}

/// Render one frame and return it as lines of text
pub fn render(app: &mut App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(usize::from(WIDTH))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

pub fn screen(app: &mut App) -> String {
    render(app).join("\n")
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.on_key_event(key(KeyCode::Char(c)));
    }
}
