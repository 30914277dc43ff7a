use ratatui::prelude::Rect;

use super::{PixelRect, PointerPosition};
use crate::constants::{DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH};

/// Signed cell rectangle. Windows dragged off the left or top edge keep a
/// negative origin and are clipped when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + i32::from(self.width) - 1
    }

    pub fn bottom(&self) -> i32 {
        self.y + i32::from(self.height) - 1
    }

    pub fn contains(&self, column: i32, row: i32) -> bool {
        self.width > 0
            && self.height > 0
            && column >= self.x
            && column <= self.right()
            && row >= self.y
            && row <= self.bottom()
    }

    /// The part of this rectangle that falls inside `bounds`, if any.
    pub fn visible_in(&self, bounds: Rect) -> Option<Rect> {
        let left = self.x.max(i32::from(bounds.x));
        let top = self.y.max(i32::from(bounds.y));
        let right = (self.x + i32::from(self.width)).min(i32::from(bounds.right()));
        let bottom = (self.y + i32::from(self.height)).min(i32::from(bounds.bottom()));
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect {
            x: u16::try_from(left).ok()?,
            y: u16::try_from(top).ok()?,
            width: u16::try_from(right - left).ok()?,
            height: u16::try_from(bottom - top).ok()?,
        })
    }
}

/// Mapping between logical pixels and terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub cell_width: u32,
    pub cell_height: u32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_WIDTH, DEFAULT_CELL_HEIGHT)
    }
}

impl CellMetrics {
    pub fn new(cell_width: u32, cell_height: u32) -> Self {
        Self {
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
        }
    }

    fn cw(&self) -> i32 {
        i32::try_from(self.cell_width).unwrap_or(i32::MAX)
    }

    fn ch(&self) -> i32 {
        i32::try_from(self.cell_height).unwrap_or(i32::MAX)
    }

    /// Pointer position, in pixels, of the top-left corner of a cell.
    pub fn pointer_at(&self, column: u16, row: u16) -> PointerPosition {
        PointerPosition::new(
            i32::from(column).saturating_mul(self.cw()),
            i32::from(row).saturating_mul(self.ch()),
        )
    }

    pub fn to_cells(&self, rect: PixelRect) -> CellRect {
        CellRect {
            x: rect.x.div_euclid(self.cw()),
            y: rect.y.div_euclid(self.ch()),
            width: u16::try_from(rect.width / self.cell_width).unwrap_or(u16::MAX),
            height: u16::try_from(rect.height / self.cell_height).unwrap_or(u16::MAX),
        }
    }

    pub fn to_pixels(&self, area: Rect) -> PixelRect {
        PixelRect {
            x: i32::from(area.x).saturating_mul(self.cw()),
            y: i32::from(area.y).saturating_mul(self.ch()),
            width: u32::from(area.width).saturating_mul(self.cell_width),
            height: u32::from(area.height).saturating_mul(self.cell_height),
        }
    }
}
