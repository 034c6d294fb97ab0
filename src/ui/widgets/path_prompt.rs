//! Repository path prompt (the directory picker)

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Clear,
};
use tui_textarea::TextArea;

use crate::ui::components::{self, centered_rect};

pub fn render_path_prompt(frame: &mut Frame, area: Rect, prompt: &mut TextArea<'static>) {
    let width = 70.min(area.width.saturating_sub(4));
    let dialog_area = centered_rect(width, 3, area);
    frame.render_widget(Clear, dialog_area);

    prompt.set_block(components::focus_block(
        Line::from(" Open repository "),
        true,
        Style::default().fg(Color::Green),
    ));
    frame.render_widget(&*prompt, dialog_area);
}
