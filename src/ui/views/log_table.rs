//! Log table - the commit list with its resizable header
//!
//! Layout of one line, left to right: a two-cell graph marker, then one
//! cell run per [`Column`] followed by a separator cell, then the date in
//! whatever width remains. Header separators are the resize handles.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::controller::{Controller, LogStatus, ResizeState};
use crate::markup;
use crate::model::{Column, ColumnWidths, Commit};
use crate::ui::{components, px_to_cells, symbols, theme};

/// Cells taken by the graph marker
const GRAPH_CELLS: u16 = 2;

pub mod empty_text {
    pub const NO_REPO: &str = "Open a jj repository";
    pub const NO_REPO_HINT: &str = "Press 'o' and enter a repository path";
    pub const LOADING: &str = "Loading...";
    pub const NO_COMMITS: &str = "No commits";
}

/// Where the last frame put the interactive parts of the table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableLayout {
    /// Screen row of the header; None when no header was drawn
    pub header_y: Option<u16>,
    /// Screen column of each column's right-hand separator
    pub handles: Vec<(Column, u16)>,
    /// Area holding commit rows
    pub rows: Rect,
    /// Index of the commit drawn on the first row
    pub scroll_offset: usize,
}

impl TableLayout {
    /// Column whose separator is at (x, y), allowing one cell of slack
    pub fn handle_at(&self, x: u16, y: u16) -> Option<Column> {
        if self.header_y != Some(y) {
            return None;
        }
        self.handles
            .iter()
            .find(|(_, hx)| x.abs_diff(*hx) <= 1)
            .map(|(column, _)| *column)
    }

    /// Commit index drawn at screen row `y`
    pub fn row_at(&self, x: u16, y: u16) -> Option<usize> {
        let rows = self.rows;
        let inside = x >= rows.x && x < rows.right() && y >= rows.y && y < rows.bottom();
        inside.then(|| self.scroll_offset + usize::from(y - rows.y))
    }
}

/// Draw the table and report its layout
pub fn render_log_table(
    frame: &mut Frame,
    area: Rect,
    controller: &Controller,
    cursor: usize,
    previous_offset: usize,
) -> TableLayout {
    let block = components::bordered_block(build_title(controller));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let session = controller.session();
    let commits = &session.commits;
    let mut layout = TableLayout::default();

    let body = match controller.log_status() {
        LogStatus::NoRepository => Some(components::empty_state(
            empty_text::NO_REPO,
            Some(empty_text::NO_REPO_HINT),
        )),
        LogStatus::Error(error) => Some(components::message_state(
            markup::error_text(error),
            theme::log_view::ERROR,
        )),
        LogStatus::Loading if commits.is_empty() => {
            Some(components::empty_state(empty_text::LOADING, None))
        }
        LogStatus::Loading | LogStatus::Displayed if commits.is_empty() => {
            Some(components::empty_state(empty_text::NO_COMMITS, None))
        }
        LogStatus::Loading | LogStatus::Displayed => None,
    };

    if let Some(paragraph) = body {
        frame.render_widget(paragraph, inner);
        return layout;
    }
    if inner.height < 2 {
        return layout;
    }

    let widths = controller.widths();
    let resizing = match controller.resize_state() {
        ResizeState::Resizing { column, .. } => Some(column),
        ResizeState::Idle => None,
    };

    let header_area = Rect { height: 1, ..inner };
    frame.render_widget(Paragraph::new(build_header(widths, resizing)), header_area);
    layout.header_y = Some(header_area.y);
    layout.handles = handle_positions(widths, inner.x, inner.right());

    let rows = Rect {
        y: inner.y + 1,
        height: inner.height - 1,
        ..inner
    };
    let visible = usize::from(rows.height);
    let offset = scroll_offset(previous_offset, cursor, visible);
    let selected = session.selected_commit_id.as_deref();

    let lines: Vec<Line> = commits
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(index, commit)| {
            let line = build_row(commit, widths);
            let mut style = Style::default();
            if index == cursor {
                style = style.bg(theme::log_view::SELECTED_BG);
            }
            if selected == Some(commit.id.as_str()) {
                style = style.add_modifier(Modifier::BOLD);
            }
            line.style(style)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), rows);
    layout.rows = rows;
    layout.scroll_offset = offset;
    layout
}

fn build_title(controller: &Controller) -> Line<'static> {
    let title = match controller.document().repo_name.as_deref() {
        Some(name) => format!(" {name} - Log "),
        None => " jj-gui - Log ".to_string(),
    };
    Line::from(title).bold().cyan().centered()
}

/// Keep the cursor visible, moving the window as little as possible
pub fn scroll_offset(previous: usize, cursor: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    if cursor < previous {
        cursor
    } else if cursor >= previous + visible {
        cursor + 1 - visible
    } else {
        previous
    }
}

/// Separator x of each column, skipping those past `right`
fn handle_positions(widths: &ColumnWidths, left: u16, right: u16) -> Vec<(Column, u16)> {
    let mut x = left.saturating_add(GRAPH_CELLS);
    let mut handles = Vec::new();
    for column in Column::ALL {
        x = x.saturating_add(px_to_cells(widths.get(column)));
        if x >= right {
            break;
        }
        handles.push((column, x));
        x = x.saturating_add(1);
    }
    handles
}

fn build_header(widths: &ColumnWidths, resizing: Option<Column>) -> Line<'static> {
    let header = Style::default()
        .fg(theme::log_view::HEADER)
        .add_modifier(Modifier::BOLD);
    let mut spans = vec![Span::raw(" ".repeat(usize::from(GRAPH_CELLS)))];

    for column in Column::ALL {
        let cells = usize::from(px_to_cells(widths.get(column)));
        spans.push(Span::styled(fit(column.title(), cells), header));

        let separator = if resizing == Some(column) {
            Style::default().fg(theme::log_view::RESIZE_ACTIVE)
        } else {
            Style::default().fg(theme::log_view::HEADER)
        };
        spans.push(Span::styled(symbols::header::SEPARATOR.to_string(), separator));
    }
    spans.push(Span::styled("Date", header));
    Line::from(spans)
}

fn build_row(commit: &Commit, widths: &ColumnWidths) -> Line<'static> {
    let (marker, marker_color) = if commit.is_working {
        (symbols::markers::WORKING_COPY, theme::log_view::WORKING_COPY_MARKER)
    } else if commit.is_immutable {
        (symbols::markers::IMMUTABLE, theme::log_view::IMMUTABLE_MARKER)
    } else {
        (symbols::markers::NORMAL, theme::log_view::NORMAL_MARKER)
    };

    let cell = |column: Column| usize::from(px_to_cells(widths.get(column)));
    let message_color = if commit.message.is_empty() {
        theme::log_view::EMPTY_LABEL
    } else {
        theme::log_view::AUTHOR
    };

    Line::from(vec![
        Span::styled(format!("{marker} "), Style::default().fg(marker_color)),
        Span::styled(
            fit(&commit.id, cell(Column::Change)),
            Style::default().fg(theme::log_view::CHANGE_ID),
        ),
        Span::raw(" "),
        Span::styled(
            fit(&commit.branches.join(" "), cell(Column::Branches)),
            Style::default().fg(theme::log_view::BOOKMARK),
        ),
        Span::raw(" "),
        Span::styled(
            fit(commit.display_message(), cell(Column::Description)),
            Style::default().fg(message_color),
        ),
        Span::raw(" "),
        Span::styled(
            fit(&commit.author, cell(Column::Author)),
            Style::default().fg(theme::log_view::AUTHOR),
        ),
        Span::raw(" "),
        Span::styled(
            commit.date.clone(),
            Style::default().fg(theme::log_view::TIMESTAMP),
        ),
    ])
}

/// Truncate or pad `text` to exactly `cells` characters; truncation ends in '…'
fn fit(text: &str, cells: usize) -> String {
    let count = text.chars().count();
    if count <= cells {
        return format!("{text:<cells$}");
    }
    let mut out: String = text.chars().take(cells.saturating_sub(1)).collect();
    if cells > 0 {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("abc", 3), "abc");
        assert_eq!(fit("abc", 0), "");
    }

    #[test]
    fn test_scroll_offset_keeps_cursor_visible() {
        assert_eq!(scroll_offset(0, 3, 10), 0);
        assert_eq!(scroll_offset(0, 12, 10), 3);
        assert_eq!(scroll_offset(5, 2, 10), 2);
        assert_eq!(scroll_offset(5, 0, 0), 0);
    }

    #[test]
    fn test_handle_positions_follow_widths() {
        // 80px=10, 120px=15, 400px=50, 150px=18 cells
        let handles = handle_positions(&ColumnWidths::default(), 0, 200);
        assert_eq!(
            handles,
            vec![
                (Column::Change, 12),
                (Column::Branches, 28),
                (Column::Description, 79),
                (Column::Author, 98),
            ]
        );
    }

    #[test]
    fn test_handle_positions_clipped_by_area() {
        let handles = handle_positions(&ColumnWidths::default(), 0, 40);
        assert_eq!(handles.len(), 2);
    }

    #[test]
    fn test_layout_hit_testing() {
        let layout = TableLayout {
            header_y: Some(1),
            handles: vec![(Column::Change, 12)],
            rows: Rect::new(1, 2, 50, 5),
            scroll_offset: 3,
        };

        assert_eq!(layout.handle_at(13, 1), Some(Column::Change));
        assert_eq!(layout.handle_at(12, 2), None);
        assert_eq!(layout.row_at(5, 2), Some(3));
        assert_eq!(layout.row_at(5, 6), Some(7));
        assert_eq!(layout.row_at(5, 7), None);
        assert_eq!(layout.row_at(0, 3), None);
    }
}
