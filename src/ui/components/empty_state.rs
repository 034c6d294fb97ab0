//! Empty state components
//!
//! Display messages when there's no content to show.

use ratatui::{
    style::{Color, Stylize},
    text::Line,
    widgets::Paragraph,
};

/// Create a centered empty state display
///
/// # Arguments
/// * `title` - Main message to display
/// * `hint` - Optional hint text (displayed in gray)
pub fn empty_state(title: &str, hint: Option<&str>) -> Paragraph<'static> {
    let mut lines = vec![Line::from(""), Line::from(title.to_string()).centered()];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(hint_text.to_string()).dark_gray().centered());
    }

    Paragraph::new(lines)
}

/// Centered message in a single color (errors)
pub fn message_state(message: &str, color: Color) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(""),
        Line::from(message.to_string()).fg(color).centered(),
    ])
}
