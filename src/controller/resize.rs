//! Column resize drag state machine
//!
//! `Idle --down on handle--> Resizing --move--> Resizing --up--> Idle`.
//! Widths change live during the drag; only the release is persisted.

use tracing::debug;

use crate::model::{Column, ColumnWidths, MIN_COLUMN_WIDTH};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResizeState {
    #[default]
    Idle,
    Resizing {
        column: Column,
        start_x: i32,
        start_width: u32,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ColumnResize {
    state: ResizeState,
}

impl ColumnResize {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ResizeState {
        self.state
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.state, ResizeState::Resizing { .. })
    }

    /// Start a drag if `handle` names a known column
    ///
    /// Returns whether a drag started.
    pub fn pointer_down(&mut self, handle: Option<&str>, x: i32, widths: &ColumnWidths) -> bool {
        let Some(column) = handle.and_then(|name| name.parse::<Column>().ok()) else {
            return false;
        };

        debug!(%column, x, "column resize started");
        self.state = ResizeState::Resizing {
            column,
            start_x: x,
            start_width: widths.get(column),
        };
        true
    }

    /// Apply the drag offset to `widths`; false when not dragging
    pub fn pointer_move(&mut self, x: i32, widths: &mut ColumnWidths) -> bool {
        let ResizeState::Resizing {
            column,
            start_x,
            start_width,
        } = self.state
        else {
            return false;
        };

        widths.set(column, dragged_width(start_width, start_x, x));
        true
    }

    /// End the drag; true when the widths should now be persisted
    pub fn pointer_up(&mut self) -> bool {
        let was_resizing = self.is_resizing();
        self.state = ResizeState::Idle;
        was_resizing
    }
}

/// `max(50, start_width + (x - start_x))`
fn dragged_width(start_width: u32, start_x: i32, x: i32) -> u32 {
    let width = i64::from(start_width) + i64::from(x) - i64::from(start_x);
    width.clamp(i64::from(MIN_COLUMN_WIDTH), i64::from(u32::MAX)) as u32
}

/// Live layout variables for the current widths
pub fn layout_vars(widths: &ColumnWidths) -> Vec<(&'static str, String)> {
    Column::ALL
        .into_iter()
        .map(|column| {
            let name = match column {
                Column::Change => "--col-change",
                Column::Branches => "--col-branches",
                Column::Description => "--col-description",
                Column::Author => "--col-author",
            };
            (name, format!("{}px", widths.get(column)))
        })
        .collect()
}
