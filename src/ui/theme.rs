//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the log table
pub mod log_view {
    use super::*;

    /// Working copy node
    pub const WORKING_COPY_MARKER: Color = Color::Green;
    /// Mutable node
    pub const NORMAL_MARKER: Color = Color::Blue;
    /// Immutable node
    pub const IMMUTABLE_MARKER: Color = Color::Magenta;
    pub const CHANGE_ID: Color = Color::Yellow;
    pub const BOOKMARK: Color = Color::Cyan;
    pub const AUTHOR: Color = Color::Reset;
    pub const TIMESTAMP: Color = Color::DarkGray;
    /// "(no description)" placeholder
    pub const EMPTY_LABEL: Color = Color::DarkGray;
    /// Cursor row background
    pub const SELECTED_BG: Color = Color::DarkGray;
    /// Header text and column separators
    pub const HEADER: Color = Color::Cyan;
    /// Separator of the column being resized
    pub const RESIZE_ACTIVE: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
}

/// Colors for the detail panel
pub mod detail_view {
    use super::*;

    pub const LABEL: Color = Color::DarkGray;
    pub const FOCUSED_BORDER: Color = Color::Yellow;
    pub const SAVE_IDLE: Color = Color::Cyan;
    pub const SAVE_BUSY: Color = Color::Yellow;
    pub const SAVE_DONE: Color = Color::Green;
}

/// Colors for the sidebar
pub mod sidebar {
    use super::*;

    pub const REPO_NAME: Color = Color::Cyan;
    pub const SECTION: Color = Color::DarkGray;
    pub const BRANCH: Color = Color::Cyan;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_markers_distinct() {
        assert_ne!(log_view::WORKING_COPY_MARKER, log_view::NORMAL_MARKER);
        assert_ne!(log_view::NORMAL_MARKER, log_view::IMMUTABLE_MARKER);
    }
}
