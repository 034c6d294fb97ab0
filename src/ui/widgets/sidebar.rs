//! Sidebar widget: repository name and branch list

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::controller::Controller;
use crate::ui::{components, symbols, theme};

const NO_REPOSITORY: &str = "No repository";

pub fn render_sidebar(frame: &mut Frame, area: Rect, controller: &Controller) {
    let block = components::bordered_block(Line::from(" jj-gui ").bold());
    let paragraph = Paragraph::new(sidebar_lines(controller)).block(block);
    frame.render_widget(paragraph, area);
}

fn sidebar_lines(controller: &Controller) -> Vec<Line<'static>> {
    let document = controller.document();
    let name = document.repo_name.as_deref().unwrap_or(NO_REPOSITORY);
    let mut lines = vec![Line::from(Span::styled(
        name.to_string(),
        Style::default()
            .fg(theme::sidebar::REPO_NAME)
            .add_modifier(Modifier::BOLD),
    ))];

    if controller.branches().is_empty() {
        return lines;
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "BRANCHES",
        Style::default().fg(theme::sidebar::SECTION),
    )));
    lines.extend(controller.branches().iter().map(|branch| {
        Line::from(Span::styled(
            format!("{} {branch}", symbols::BRANCH),
            Style::default().fg(theme::sidebar::BRANCH),
        ))
    }));
    lines
}
