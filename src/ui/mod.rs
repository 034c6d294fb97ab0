//! UI layer
//!
//! Contains views, widgets, symbols, and theme definitions.
//!
//! Column widths are stored in pixels so they carry over unchanged to the
//! HTML page; the terminal draws them at [`PX_PER_CELL`] pixels per cell.

pub mod components;
pub mod symbols;
pub mod theme;
pub mod views;
pub mod widgets;

/// Pixels represented by one terminal cell
pub const PX_PER_CELL: u32 = 8;

/// Terminal cells for a pixel width (at least one)
pub fn px_to_cells(px: u32) -> u16 {
    u16::try_from(px / PX_PER_CELL).unwrap_or(u16::MAX).max(1)
}

/// Pixel offset of a terminal column
pub fn cells_to_px(cells: u16) -> i32 {
    i32::from(cells) * PX_PER_CELL as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_to_cells() {
        assert_eq!(px_to_cells(80), 10);
        assert_eq!(px_to_cells(50), 6);
        assert_eq!(px_to_cells(3), 1);
        assert_eq!(px_to_cells(u32::MAX), u16::MAX);
    }

    #[test]
    fn test_cells_to_px() {
        assert_eq!(cells_to_px(0), 0);
        assert_eq!(cells_to_px(25), 200);
    }
}
