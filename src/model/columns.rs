//! Log table column model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Minimum width of any column, in pixels
pub const MIN_COLUMN_WIDTH: u32 = 50;

/// Resizable columns of the log table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Change,
    Branches,
    Description,
    Author,
}

impl Column {
    /// All columns in display order
    pub const ALL: [Column; 4] = [
        Column::Change,
        Column::Branches,
        Column::Description,
        Column::Author,
    ];

    /// Name used for resize handles and persisted keys
    pub fn name(self) -> &'static str {
        match self {
            Column::Change => "change",
            Column::Branches => "branches",
            Column::Description => "description",
            Column::Author => "author",
        }
    }

    /// Header label
    pub fn title(self) -> &'static str {
        match self {
            Column::Change => "Change",
            Column::Branches => "Branches",
            Column::Description => "Description",
            Column::Author => "Author",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name does not match any known column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColumn(pub String);

impl FromStr for Column {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}

/// Pixel widths of the log table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnWidths {
    pub change: u32,
    pub branches: u32,
    pub description: u32,
    pub author: u32,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            change: 80,
            branches: 120,
            description: 400,
            author: 150,
        }
    }
}

impl ColumnWidths {
    pub fn get(&self, column: Column) -> u32 {
        match column {
            Column::Change => self.change,
            Column::Branches => self.branches,
            Column::Description => self.description,
            Column::Author => self.author,
        }
    }

    /// Set a column width, clamped to [`MIN_COLUMN_WIDTH`]
    pub fn set(&mut self, column: Column, width: u32) {
        let width = width.max(MIN_COLUMN_WIDTH);
        match column {
            Column::Change => self.change = width,
            Column::Branches => self.branches = width,
            Column::Description => self.description = width,
            Column::Author => self.author = width,
        }
    }

    /// Parse a persisted record
    ///
    /// Invalid JSON yields the defaults; a partial object keeps every numeric
    /// field it has and takes defaults for the rest.
    pub fn from_json(saved: &str) -> Self {
        let mut widths = Self::default();
        let Ok(serde_json::Value::Object(map)) = serde_json::from_str(saved) else {
            return widths;
        };

        for column in Column::ALL {
            if let Some(px) = map.get(column.name()).and_then(|v| v.as_f64())
                && px.is_finite()
            {
                widths.set(column, px.max(0.0).round() as u32);
            }
        }
        widths
    }

    /// Serialize for persistence
    pub fn to_json(&self) -> String {
        // A struct of plain integers always serializes
        serde_json::to_string(self).unwrap_or_default()
    }
}
