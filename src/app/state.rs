//! Application state and dispatch

use tracing::debug;
use tui_textarea::TextArea;

use crate::controller::{Controller, Effect, Msg, Runtime};
use crate::ui::views::TableLayout;

/// Where key input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Log list navigation
    #[default]
    List,
    /// Description editor of the detail panel
    Editor,
    /// Repository path prompt
    PathPrompt,
}

/// The main application state
///
/// Wraps the [`Controller`] with what only a terminal needs: a cursor,
/// text editors, and the geometry of the last frame for mouse hit-testing.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub focus: Focus,
    pub(crate) controller: Controller,
    pub(crate) runtime: Runtime,
    /// Row under the keyboard cursor
    pub(crate) cursor: usize,
    /// Description editor contents
    pub(crate) editor: TextArea<'static>,
    /// Commit the editor was last loaded from
    pub(crate) editor_commit: Option<String>,
    pub(crate) path_prompt: TextArea<'static>,
    /// Capture mouse events
    pub mouse: bool,
    /// Geometry of the log table in the last frame
    pub(crate) table: TableLayout,
}

impl App {
    pub fn new(controller: Controller, runtime: Runtime) -> Self {
        Self {
            running: true,
            focus: Focus::List,
            controller,
            runtime,
            cursor: 0,
            editor: TextArea::default(),
            editor_commit: None,
            path_prompt: TextArea::default(),
            mouse: true,
            table: TableLayout::default(),
        }
    }

    /// Initial display, restoring `last_repo` when given
    pub fn start(&mut self, last_repo: Option<String>) {
        let effects = self.controller.startup(last_repo);
        self.run_effects(effects);
        self.sync_with_controller();
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current description editor text
    pub fn editor_text(&self) -> String {
        self.editor.lines().join("\n")
    }

    /// Reduce `msg` and carry out the resulting effects
    pub fn dispatch(&mut self, msg: Msg) {
        let effects = self.controller.update(msg);
        self.run_effects(effects);
        self.sync_with_controller();
    }

    /// Apply every finished background request
    pub fn pump(&mut self) {
        while let Some(msg) = self.runtime.try_recv() {
            self.dispatch(msg);
        }
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PickDirectory => self.open_path_prompt(),
                other => self.runtime.execute(other),
            }
        }
    }

    fn open_path_prompt(&mut self) {
        let current = self
            .controller
            .session()
            .repository_path
            .clone()
            .unwrap_or_default();
        let mut prompt = TextArea::new(vec![current]);
        prompt.move_cursor(tui_textarea::CursorMove::End);
        self.path_prompt = prompt;
        self.focus = Focus::PathPrompt;
    }

    /// Finish the path prompt; an empty path counts as cancelled
    pub(crate) fn close_path_prompt(&mut self, submit: bool) {
        let path = self.path_prompt.lines().join("").trim().to_string();
        self.focus = Focus::List;
        let picked = (submit && !path.is_empty()).then_some(path);
        self.dispatch(Msg::DirectoryPicked(picked));
    }

    /// Keep cursor and editor consistent with the controller's state
    fn sync_with_controller(&mut self) {
        let count = self.controller.session().commits.len();
        self.cursor = self.cursor.min(count.saturating_sub(1));

        let detail = self.controller.document().detail.as_ref();
        match detail {
            None => {
                self.editor_commit = None;
                if self.focus == Focus::Editor {
                    self.focus = Focus::List;
                }
            }
            Some(panel) if self.editor_commit.as_deref() != Some(panel.id.as_str()) => {
                debug!(id = %panel.id, "loading description into editor");
                self.editor = if panel.message.is_empty() {
                    TextArea::default()
                } else {
                    TextArea::new(panel.message.lines().map(str::to_string).collect())
                };
                self.editor_commit = Some(panel.id.clone());
            }
            Some(_) => {}
        }
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }
}
