//! Input handling for the application

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::state::{App, Focus};
use crate::controller::{Msg, ResizeState};
use crate::keys;
use crate::ui::cells_to_px;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        // An open alert swallows everything until acknowledged
        if self.controller.document().current_alert().is_some() {
            if keys::is_dismiss_key(key.code) {
                self.dispatch(Msg::DismissAlert);
            }
            return;
        }

        match self.focus {
            Focus::PathPrompt => self.handle_prompt_key(key),
            Focus::Editor => self.handle_editor_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            keys::SUBMIT => self.close_path_prompt(true),
            keys::ESC => self.close_path_prompt(false),
            _ => {
                self.path_prompt.input(key);
            }
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        if keys::is_save_key(&key) {
            let message = self.editor_text();
            self.dispatch(Msg::SaveDescription(message));
            return;
        }
        if key.code == keys::ESC {
            self.focus = Focus::List;
            return;
        }
        self.editor.input(key);
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        if keys::is_reload_key(&key) {
            self.dispatch(Msg::ReloadLog);
            return;
        }

        let count = self.controller.session().commits.len();
        match key.code {
            keys::QUIT => self.quit(),
            keys::ESC => {
                if self.controller.document().detail.is_some() {
                    self.dispatch(Msg::CloseDetail);
                }
            }
            code if keys::is_move_up(code) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            code if keys::is_move_down(code) => {
                if self.cursor + 1 < count {
                    self.cursor += 1;
                }
            }
            keys::GO_TOP => self.cursor = 0,
            keys::GO_BOTTOM => self.cursor = count.saturating_sub(1),
            keys::SELECT => self.select_row(self.cursor),
            keys::DESCRIBE => {
                if self.controller.document().detail.is_some() {
                    self.focus = Focus::Editor;
                }
            }
            keys::OPEN_REPO => self.dispatch(Msg::OpenRepositoryRequested),
            keys::SCREENSHOT => self.dispatch(Msg::TakeScreenshot),
            _ => {}
        }
    }

    fn select_row(&mut self, index: usize) {
        let Some(id) = self
            .controller
            .session()
            .commits
            .get(index)
            .map(|c| c.id.clone())
        else {
            return;
        };
        self.cursor = index;
        self.dispatch(Msg::SelectCommit(id));
    }

    /// Handle mouse events: row clicks and header drags
    pub fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if self.focus == Focus::PathPrompt
            || self.controller.document().current_alert().is_some()
        {
            return;
        }

        let x = cells_to_px(mouse.column);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(column) = self.table.handle_at(mouse.column, mouse.row) {
                    self.dispatch(Msg::PointerDown {
                        handle: Some(column.name().to_string()),
                        x,
                    });
                } else if let Some(index) = self.table.row_at(mouse.column, mouse.row) {
                    self.focus = Focus::List;
                    self.select_row(index);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if matches!(
                    self.controller.resize_state(),
                    ResizeState::Resizing { .. }
                ) {
                    self.dispatch(Msg::PointerMove { x });
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.dispatch(Msg::PointerUp),
            MouseEventKind::ScrollDown => {
                let count = self.controller.session().commits.len();
                if self.cursor + 1 < count {
                    self.cursor += 1;
                }
            }
            MouseEventKind::ScrollUp => self.cursor = self.cursor.saturating_sub(1),
            _ => {}
        }
    }
}
