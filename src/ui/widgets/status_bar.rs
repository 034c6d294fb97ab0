//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::KeyHint;

/// Build a status bar line from a prefix and key hints
pub fn build_status_bar(prefix: Vec<Span<'static>>, hints: &[KeyHint]) -> Line<'static> {
    let mut spans = prefix;

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 || !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Render the status bar; `labels` are transient control labels shown first
pub fn render_status_bar(frame: &mut Frame, area: Rect, labels: &[String], hints: &[KeyHint]) {
    let prefix = labels
        .iter()
        .map(|label| {
            Span::styled(
                format!(" {label} "),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(build_status_bar(prefix, hints)), area);
}
