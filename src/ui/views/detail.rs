//! Detail panel - selected commit and its description editor

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_textarea::TextArea;

use crate::controller::{DetailPanel, SaveState};
use crate::ui::{components, theme};

/// Draw the panel for `detail`; `editor` holds the description being edited
pub fn render_detail(
    frame: &mut Frame,
    area: Rect,
    detail: &DetailPanel,
    editor: &mut TextArea<'static>,
    editor_focused: bool,
    save: SaveState,
) {
    let title = Line::from(format!(" Change {} ", detail.id)).bold().yellow();
    let block = components::bordered_block(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [meta_area, editor_area, save_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(Paragraph::new(meta_lines(detail)), meta_area);

    let focus_style = Style::default().fg(theme::detail_view::FOCUSED_BORDER);
    editor.set_block(components::focus_block(
        Line::from(" Description "),
        editor_focused,
        focus_style,
    ));
    editor.set_cursor_style(if editor_focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    });
    frame.render_widget(&*editor, editor_area);

    frame.render_widget(Paragraph::new(save_button(save)), save_area);
}

fn meta_lines(detail: &DetailPanel) -> Vec<Line<'static>> {
    let label = Style::default().fg(theme::detail_view::LABEL);
    vec![
        Line::from(vec![
            Span::styled("Author: ", label),
            Span::raw(detail.author.clone()),
        ]),
        Line::from(vec![
            Span::styled("Date:   ", label),
            Span::raw(detail.date.clone()),
        ]),
    ]
}

fn save_button(save: SaveState) -> Line<'static> {
    let color = match save {
        SaveState::Idle => theme::detail_view::SAVE_IDLE,
        SaveState::Saving => theme::detail_view::SAVE_BUSY,
        SaveState::Saved => theme::detail_view::SAVE_DONE,
    };
    Line::from(Span::styled(
        format!("[ {} ]", save.label()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .right_aligned()
}
