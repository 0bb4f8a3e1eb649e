// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use scai::particles::{Point, SurfaceSize};

/// Logical pixels covered by one terminal cell.
pub const CELL_WIDTH: f64 = 8.0;
pub const CELL_HEIGHT: f64 = 16.0;
/// Braille markers resolve 2x4 dots per cell, i.e. one dot per 4x4 logical pixels.
pub const DOT_RATIO: f64 = 2.0 / CELL_WIDTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub header: Rect,
    pub field: Rect,
    pub status: Rect,
}

/// Splits the screen into header, backdrop and status bar.
pub fn areas(screen: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(screen);
    Areas {
        header: chunks[0],
        field: chunks[1],
        status: chunks[2],
    }
}

/// Logical surface of a cell area; `None` when the area is empty.
pub fn surface_size(area: Rect) -> Option<SurfaceSize> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    Some(SurfaceSize::with_ratio(
        f64::from(area.width) * CELL_WIDTH,
        f64::from(area.height) * CELL_HEIGHT,
        DOT_RATIO,
    ))
}

/// Center of the cell at (`column`, `row`) in the area's logical coordinates.
pub fn cell_to_point(area: Rect, column: u16, row: u16) -> Point {
    let x = (f64::from(column) - f64::from(area.x) + 0.5) * CELL_WIDTH;
    let y = (f64::from(row) - f64::from(area.y) + 0.5) * CELL_HEIGHT;
    Point::new(x, y)
}
