//! Keybinding definitions
//!
//! All keybindings are defined here; input handling only refers to these.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::app::Focus;

// =============================================================================
// Modifier key helpers
// =============================================================================

/// Ctrl+L (reload log)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_reload_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Ctrl+S (save description)
pub fn is_save_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('s') | KeyCode::Char('S'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Ctrl+C quits from anywhere
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

pub const QUIT: KeyCode = KeyCode::Char('q');

/// Close detail panel / leave editor / cancel prompt
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Navigation keys
// =============================================================================

pub const MOVE_UP: KeyCode = KeyCode::Char('k');
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;
pub const GO_TOP: KeyCode = KeyCode::Char('g');
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Log list keys
// =============================================================================

/// Open the detail panel for the row under the cursor
pub const SELECT: KeyCode = KeyCode::Enter;

/// Focus the description editor
pub const DESCRIBE: KeyCode = KeyCode::Char('d');

/// Open a repository (path prompt)
pub const OPEN_REPO: KeyCode = KeyCode::Char('o');

/// Debug screenshot
pub const SCREENSHOT: KeyCode = KeyCode::Char('S');

// =============================================================================
// Prompt / alert keys
// =============================================================================

pub const SUBMIT: KeyCode = KeyCode::Enter;

/// Acknowledge an alert
pub fn is_dismiss_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' '))
}

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_NAV: KeyHint = KeyHint {
    key: "j/k",
    label: "Move",
    color: Color::Cyan,
};
pub const HINT_SELECT: KeyHint = KeyHint {
    key: "Enter",
    label: "Details",
    color: Color::Cyan,
};
pub const HINT_DESCRIBE: KeyHint = KeyHint {
    key: "d",
    label: "Describe",
    color: Color::Yellow,
};
pub const HINT_CLOSE: KeyHint = KeyHint {
    key: "Esc",
    label: "Close",
    color: Color::Gray,
};
pub const HINT_OPEN: KeyHint = KeyHint {
    key: "o",
    label: "Open",
    color: Color::Green,
};
pub const HINT_RELOAD: KeyHint = KeyHint {
    key: "^L",
    label: "Reload",
    color: Color::Green,
};
pub const HINT_SCREENSHOT: KeyHint = KeyHint {
    key: "S",
    label: "Screenshot",
    color: Color::Magenta,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_SAVE: KeyHint = KeyHint {
    key: "^S",
    label: "Save",
    color: Color::Yellow,
};
pub const HINT_LEAVE_EDITOR: KeyHint = KeyHint {
    key: "Esc",
    label: "Back",
    color: Color::Gray,
};
pub const HINT_SUBMIT: KeyHint = KeyHint {
    key: "Enter",
    label: "Open",
    color: Color::Green,
};
pub const HINT_CANCEL: KeyHint = KeyHint {
    key: "Esc",
    label: "Cancel",
    color: Color::Gray,
};
pub const HINT_DISMISS: KeyHint = KeyHint {
    key: "Enter",
    label: "OK",
    color: Color::Cyan,
};

/// Hints for the focused area
pub fn current_hints(focus: Focus, detail_open: bool, alert_open: bool) -> Vec<KeyHint> {
    if alert_open {
        return vec![HINT_DISMISS];
    }
    match focus {
        Focus::Editor => vec![HINT_SAVE, HINT_LEAVE_EDITOR],
        Focus::PathPrompt => vec![HINT_SUBMIT, HINT_CANCEL],
        Focus::List => {
            let mut hints = vec![HINT_NAV, HINT_SELECT];
            if detail_open {
                hints.extend([HINT_DESCRIBE, HINT_CLOSE]);
            }
            hints.extend([HINT_OPEN, HINT_RELOAD, HINT_SCREENSHOT, HINT_QUIT]);
            hints
        }
    }
}
