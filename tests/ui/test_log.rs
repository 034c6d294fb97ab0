//! Rendering of the log table, sidebar, detail panel and alerts

use jj_gui::controller::Msg;

use crate::harness::{LOG, loaded_app, new_app, render, screen};

#[test]
fn test_empty_state() {
    let mut app = new_app();
    let text = screen(&mut app);

    assert!(text.contains("Open a jj repository"));
    assert!(text.contains("No repository"));
    assert!(text.contains("[o] Open"));
    assert!(!text.contains("Description"));
}

#[test]
fn test_loading_state() {
    let mut app = new_app();
    app.dispatch(Msg::OpenRepository("/work/demo".to_string()));
    let text = screen(&mut app);

    assert!(text.contains("Loading..."));
    assert!(text.contains("demo - Log"));
}

#[test]
fn test_table_with_commits() {
    let mut app = loaded_app(LOG);
    let lines = render(&mut app);
    let text = lines.join("\n");

    assert!(lines[1].contains("Change"));
    assert!(lines[1].contains("Branches"));
    assert!(lines[1].contains("Description"));
    assert!(lines[1].contains("Author"));

    assert!(lines[2].contains("@ qpvuntsm"));
    assert!(lines[2].contains("Add feature"));
    assert!(lines[2].contains("alice@example.com"));
    assert!(lines[3].contains("○ rlvkpnrz"));
    assert!(lines[3].contains("v1.0 release"));
    assert!(lines[4].contains("◆ zzzzzzzz"));
    assert!(lines[4].contains("(no description)"));

    // Sidebar branches in first-seen order
    assert!(text.contains("• main"));
    assert!(text.contains("• v1.0"));
    assert!(text.contains("• release"));
}

#[test]
fn test_no_commits() {
    let mut app = loaded_app("");
    let text = screen(&mut app);

    assert!(text.contains("No commits"));
    assert!(text.contains("• main"));
}

#[test]
fn test_not_a_repository_error() {
    let mut app = new_app();
    app.dispatch(Msg::OpenRepository("/tmp".to_string()));
    app.dispatch(Msg::LogLoaded {
        generation: 1,
        result: Err("Error: There is no jj repo in \"/tmp\"".to_string()),
    });

    let text = screen(&mut app);
    assert!(text.contains("Not a jj repository"));
    assert!(!text.contains("There is no jj repo"));
}

#[test]
fn test_detail_panel() {
    let mut app = loaded_app(LOG);
    app.dispatch(Msg::SelectCommit("zzzzzzzz".to_string()));
    let text = screen(&mut app);

    assert!(text.contains("Change zzzzzzzz"));
    assert!(text.contains("Author: Unknown"));
    assert!(text.contains("Date:   Unknown"));
    assert!(text.contains("Description"));
    assert!(text.contains("[ Save ]"));
    assert!(text.contains("[d] Describe"));
}

#[test]
fn test_detail_editor_holds_message() {
    let mut app = loaded_app(LOG);
    app.dispatch(Msg::SelectCommit("qpvuntsm".to_string()));

    assert_eq!(app.editor_text(), "Add feature");
    assert!(screen(&mut app).contains("Add feature"));
}

#[test]
fn test_alert_is_modal() {
    let mut app = loaded_app(LOG);
    app.dispatch(Msg::ScreenshotFinished(Err("permission denied".to_string())));
    let text = screen(&mut app);

    assert!(text.contains("Screenshot failed: permission denied"));
    assert!(text.contains("[Enter] OK"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    use ratatui::{Terminal, backend::TestBackend};

    let mut app = loaded_app(LOG);
    app.dispatch(Msg::SelectCommit("qpvuntsm".to_string()));
    for (w, h) in [(10, 3), (30, 8), (1, 1)] {
        let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
    }
}
