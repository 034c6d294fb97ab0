//! UI symbols (markers, borders, etc.)
//!
//! Unicode markers, consistent with jj's default graph output.

/// Node markers in the log table
pub mod markers {
    /// Working copy (@)
    pub const WORKING_COPY: char = '@';
    /// Mutable change (○)
    pub const NORMAL: char = '○';
    /// Immutable change (◆)
    pub const IMMUTABLE: char = '◆';
}

/// Log table header
pub mod header {
    /// Column boundary; doubles as the resize handle
    pub const SEPARATOR: char = '│';
}

/// Sidebar branch bullet
pub const BRANCH: char = '•';
