//! Mapping between engine layout units and terminal cells.
//!
//! A cell is roughly twice as tall as it is wide, so a column is worth half
//! as many units as a row.  With these numbers a square in units is a square
//! on screen.

use ratatui::layout::Rect as CellRect;

use crate::core::geometry::Rect;

pub const UNITS_PER_COL: f64 = 5.0;
pub const UNITS_PER_ROW: f64 = 10.0;

pub fn cols_to_units(cols: u16) -> f64 {
    f64::from(cols) * UNITS_PER_COL
}

pub fn rows_to_units(rows: u16) -> f64 {
    f64::from(rows) * UNITS_PER_ROW
}

/// A terminal area expressed in screen units.
pub fn area_to_units(area: CellRect) -> Rect {
    Rect::new(
        cols_to_units(area.x),
        rows_to_units(area.y),
        cols_to_units(area.width),
        rows_to_units(area.height),
    )
}

/// Snap a screen-unit rectangle to cells and clip it to `clip`.  Non-empty
/// rectangles always cover at least one cell before clipping.
pub fn to_cells(rect: &Rect, clip: CellRect) -> Option<CellRect> {
    if rect.is_empty() {
        return None;
    }
    let x0 = (rect.min_x() / UNITS_PER_COL).round() as i32;
    let y0 = (rect.min_y() / UNITS_PER_ROW).round() as i32;
    let x1 = ((rect.max_x() / UNITS_PER_COL).round() as i32).max(x0 + 1);
    let y1 = ((rect.max_y() / UNITS_PER_ROW).round() as i32).max(y0 + 1);

    let left = x0.max(i32::from(clip.left()));
    let top = y0.max(i32::from(clip.top()));
    let right = x1.min(i32::from(clip.right()));
    let bottom = y1.min(i32::from(clip.bottom()));
    if right <= left || bottom <= top {
        return None;
    }
    Some(CellRect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_in_units_is_square_on_screen() {
        let clip = CellRect::new(0, 0, 100, 50);
        let cells = to_cells(&Rect::new(10.0, 10.0, 80.0, 80.0), clip).unwrap();
        assert_eq!(cells, CellRect::new(2, 1, 16, 8));
    }

    #[test]
    fn tiny_rect_covers_one_cell() {
        let clip = CellRect::new(0, 0, 100, 50);
        let cells = to_cells(&Rect::new(11.0, 11.0, 1.0, 1.0), clip).unwrap();
        assert_eq!((cells.width, cells.height), (1, 1));
    }

    #[test]
    fn clipped_away_and_negative() {
        let clip = CellRect::new(10, 10, 20, 10);
        assert_eq!(to_cells(&Rect::new(0.0, 0.0, 20.0, 20.0), clip), None);
        let partial = to_cells(&Rect::new(-50.0, 100.0, 120.0, 30.0), clip).unwrap();
        assert_eq!(partial, CellRect::new(10, 10, 4, 3));
    }

    #[test]
    fn area_round_trip() {
        let area = CellRect::new(2, 3, 40, 11);
        assert_eq!(area_to_units(area), Rect::new(10.0, 30.0, 200.0, 110.0));
    }
}
