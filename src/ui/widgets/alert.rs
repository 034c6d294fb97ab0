//! Modal alert

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::ui::components::centered_rect;

/// Draw `message` over everything else
pub fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
    let width = 60.min(area.width.saturating_sub(4));
    let text_width = usize::from(width.saturating_sub(2)).max(1);
    let wrapped: usize = message
        .lines()
        .map(|l| l.chars().count().div_ceil(text_width).max(1))
        .sum();
    let height = (u16::try_from(wrapped).unwrap_or(u16::MAX).saturating_add(5))
        .min(area.height.saturating_sub(2));

    let dialog_area = centered_rect(width, height, area);
    frame.render_widget(Clear, dialog_area);

    let mut lines = vec![Line::from("")];
    lines.extend(message.lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] OK",
        Style::default().fg(Color::Cyan),
    )));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" jj-gui ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, dialog_area);
}
