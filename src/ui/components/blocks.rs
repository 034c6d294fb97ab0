//! Block components for UI rendering

use ratatui::{
    style::Style,
    text::Line,
    widgets::{Block, Borders},
};

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    Block::default().borders(Borders::ALL).title(title)
}

/// Bordered block whose border color shows input focus
pub fn focus_block<'a>(title: Line<'a>, focused: bool, focus_style: Style) -> Block<'a> {
    let block = bordered_block(title);
    if focused {
        block.border_style(focus_style)
    } else {
        block
    }
}
