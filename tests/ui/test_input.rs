//! Key and mouse handling

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use jj_gui::app::Focus;
use jj_gui::controller::{SaveState, ScreenshotState};
use jj_gui::model::Column;

use crate::harness::{LOG, ctrl, key, loaded_app, new_app, render, screen, type_text};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_cursor_movement_is_bounded() {
    let mut app = loaded_app(LOG);

    app.on_key_event(key(KeyCode::Char('k')));
    assert_eq!(app.cursor(), 0);

    app.on_key_event(key(KeyCode::Char('j')));
    app.on_key_event(key(KeyCode::Down));
    app.on_key_event(key(KeyCode::Down));
    assert_eq!(app.cursor(), 2);

    app.on_key_event(key(KeyCode::Char('g')));
    assert_eq!(app.cursor(), 0);
    app.on_key_event(key(KeyCode::Char('G')));
    assert_eq!(app.cursor(), 2);
}

#[test]
fn test_enter_selects_and_esc_closes() {
    let mut app = loaded_app(LOG);
    app.on_key_event(key(KeyCode::Char('j')));
    app.on_key_event(key(KeyCode::Enter));

    let session = app.controller().session();
    assert_eq!(session.selected_commit_id.as_deref(), Some("rlvkpnrz"));

    app.on_key_event(key(KeyCode::Esc));
    assert!(app.controller().document().detail.is_none());
}

#[test]
fn test_describe_edit_and_save() {
    let mut app = loaded_app(LOG);
    app.on_key_event(key(KeyCode::Enter));
    app.on_key_event(key(KeyCode::Char('d')));
    assert_eq!(app.focus, Focus::Editor);

    // Keys go to the editor, not the list
    type_text(&mut app, "jq");
    assert_eq!(app.editor_text(), "jqAdd feature");
    assert!(app.running);

    app.on_key_event(ctrl('s'));
    assert_eq!(app.controller().save_state(), SaveState::Saving);
    assert!(screen(&mut app).contains("Saving..."));

    app.on_key_event(key(KeyCode::Esc));
    assert_eq!(app.focus, Focus::List);
}

#[test]
fn test_describe_requires_detail() {
    let mut app = loaded_app(LOG);
    app.on_key_event(key(KeyCode::Char('d')));
    assert_eq!(app.focus, Focus::List);
}

#[test]
fn test_open_prompt_submit() {
    let mut app = loaded_app(LOG);
    app.on_key_event(key(KeyCode::Char('o')));
    assert_eq!(app.focus, Focus::PathPrompt);
    assert!(screen(&mut app).contains("Open repository"));

    type_text(&mut app, "-2");
    app.on_key_event(key(KeyCode::Enter));

    assert_eq!(app.focus, Focus::List);
    assert_eq!(
        app.controller().session().repository_path.as_deref(),
        Some("/work/demo-2")
    );
}

#[test]
fn test_open_prompt_cancel() {
    let mut app = loaded_app(LOG);
    app.on_key_event(key(KeyCode::Char('o')));
    type_text(&mut app, "xyz");
    app.on_key_event(key(KeyCode::Esc));

    assert_eq!(app.focus, Focus::List);
    assert_eq!(
        app.controller().session().repository_path.as_deref(),
        Some("/work/demo")
    );
    assert_eq!(app.controller().session().commits.len(), 3);
}

#[test]
fn test_alert_blocks_keys_until_dismissed() {
    let mut app = new_app();
    app.on_key_event(key(KeyCode::Char('S')));
    assert_eq!(
        app.controller().screenshot_state(),
        ScreenshotState::Capturing
    );
    app.dispatch(jj_gui::controller::Msg::ScreenshotFinished(Err(
        "denied".to_string()
    )));

    app.on_key_event(key(KeyCode::Char('q')));
    assert!(app.running);

    app.on_key_event(key(KeyCode::Enter));
    assert!(app.controller().document().current_alert().is_none());

    app.on_key_event(key(KeyCode::Char('q')));
    assert!(!app.running);
}

#[test]
fn test_ctrl_c_quits_from_editor() {
    let mut app = loaded_app(LOG);
    app.on_key_event(key(KeyCode::Enter));
    app.on_key_event(key(KeyCode::Char('d')));
    app.on_key_event(ctrl('c'));
    assert!(!app.running);
}

#[test]
fn test_click_row_selects() {
    let mut app = loaded_app(LOG);
    render(&mut app);

    // Sidebar is 24 cells; table rows start below border and header
    app.on_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 40, 3));
    assert_eq!(
        app.controller().session().selected_commit_id.as_deref(),
        Some("rlvkpnrz")
    );
    assert_eq!(app.cursor(), 1);
}

#[test]
fn test_drag_header_resizes_column() {
    let mut app = loaded_app(LOG);
    let lines = render(&mut app);

    // Change column: inner x 25, marker 2 cells, 80px = 10 cells
    let handle_x: u16 = 37;
    let separator = lines[1].chars().nth(usize::from(handle_x)).unwrap();
    assert_eq!(separator, '│');

    app.on_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), handle_x, 1));
    app.on_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), handle_x + 5, 1));
    assert_eq!(app.controller().widths().get(Column::Change), 120);

    app.on_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 0, 1));
    assert_eq!(app.controller().widths().get(Column::Change), 50);

    app.on_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 0, 1));
    assert!(
        app.controller()
            .render_page()
            .contains("--col-change:50px")
    );
}
