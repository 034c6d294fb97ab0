//! Rendering logic for the application

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::state::{App, Focus};
use crate::controller::{DetailPanel, SCREENSHOT_IDLE_LABEL, SaveState, ScreenshotState};
use crate::keys;
use crate::ui::{views, widgets};

const SIDEBAR_WIDTH: u16 = 24;

/// Below this height the detail panel takes the whole content area
const MIN_SPLIT_HEIGHT: u16 = 16;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
        let [sidebar_area, content_area] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
                .areas(main_area);

        widgets::render_sidebar(frame, sidebar_area, &self.controller);
        self.render_content(frame, content_area);

        let document = self.controller.document();
        let alert = document.current_alert();
        let hints = keys::current_hints(self.focus, document.detail.is_some(), alert.is_some());
        widgets::render_status_bar(frame, status_area, &self.transient_labels(), &hints);

        if self.focus == Focus::PathPrompt {
            widgets::render_path_prompt(frame, frame.area(), &mut self.path_prompt);
        }
        if let Some(message) = self.controller.document().current_alert() {
            widgets::render_alert(frame, frame.area(), message);
        }
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        let Some(detail) = self.controller.document().detail.clone() else {
            self.render_table(frame, area);
            return;
        };

        if area.height < MIN_SPLIT_HEIGHT {
            self.table = views::TableLayout::default();
            self.render_detail(frame, area, &detail);
            return;
        }

        // Split: log (top 50%) / detail (bottom 50%)
        let [log_area, detail_area] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);
        self.render_table(frame, log_area);
        self.render_detail(frame, detail_area, &detail);
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect) {
        self.table = views::render_log_table(
            frame,
            area,
            &self.controller,
            self.cursor,
            self.table.scroll_offset,
        );
    }

    fn render_detail(&mut self, frame: &mut Frame, area: Rect, detail: &DetailPanel) {
        views::render_detail(
            frame,
            area,
            detail,
            &mut self.editor,
            self.focus == Focus::Editor,
            self.controller.save_state(),
        );
    }

    /// Button labels worth showing while they differ from their resting text
    fn transient_labels(&self) -> Vec<String> {
        let document = self.controller.document();
        let mut labels = Vec::new();
        if self.controller.save_state() != SaveState::Idle {
            labels.push(document.save_button.clone());
        }
        if self.controller.screenshot_state() == ScreenshotState::Capturing
            || document.screenshot_button != SCREENSHOT_IDLE_LABEL
        {
            labels.push(document.screenshot_button.clone());
        }
        labels
    }
}
