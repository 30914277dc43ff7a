//! UiFrame: a thin wrapper around `ratatui::Frame` that clamps drawing to the
//! visible area.
//!
//! Windows can be dragged partly off-screen, so the shell regularly computes
//! rectangles and cell positions that fall outside the terminal buffer.
//! Writing those straight into the `Buffer` panics, so every draw goes
//! through this type and is clipped first. Hosted content keeps calling the
//! familiar `render_widget` helper without its own bounds checks.
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Build a frame straight from a buffer, for offscreen and test rendering.
    pub fn from_buffer(buffer: &'a mut Buffer) -> Self {
        let area = buffer.area;
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }

    /// Write one symbol at a signed position, skipping anything outside
    /// `bounds` or the frame.
    pub fn put_signed(&mut self, bounds: Rect, x: i32, y: i32, symbol: &str, style: Style) {
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            return;
        };
        if !rect_contains(bounds, x, y) || !rect_contains(self.area, x, y) {
            return;
        }
        if let Some(cell) = self.buffer.cell_mut((x, y)) {
            cell.set_symbol(symbol);
            cell.set_style(style);
        }
    }

    /// Write `text` starting at a signed position, one cell per char,
    /// clipped to `bounds`.
    pub fn put_str_signed(&mut self, bounds: Rect, x: i32, y: i32, text: &str, style: Style) {
        let mut buf = [0u8; 4];
        for (offset, ch) in text.chars().enumerate() {
            let cx = x.saturating_add(i32::try_from(offset).unwrap_or(i32::MAX));
            self.put_signed(bounds, cx, y, ch.encode_utf8(&mut buf), style);
        }
    }
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    let max_x = rect.x.saturating_add(rect.width);
    let max_y = rect.y.saturating_add(rect.height);
    column >= rect.x && column < max_x && row >= rect.y && row < max_y
}

pub(crate) fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if !rect_contains(bounds, x, y) {
        return;
    }
    let available = bounds.x.saturating_add(bounds.width).saturating_sub(x);
    let text = truncate_to_width(text, available as usize);
    buffer.set_string(x, y, text, style);
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_signed_ignores_out_of_bounds_cells() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 4, 2));
        let mut frame = UiFrame::from_buffer(&mut buffer);
        let bounds = frame.area();
        frame.put_signed(bounds, -1, 0, "x", Style::default());
        frame.put_signed(bounds, 4, 0, "x", Style::default());
        frame.put_signed(bounds, 1, 1, "y", Style::default());
        assert_eq!(buffer[(1, 1)].symbol(), "y");
        assert_eq!(buffer[(0, 0)].symbol(), " ");
    }

    #[test]
    fn put_str_signed_clips_the_left_edge() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 5, 1));
        let mut frame = UiFrame::from_buffer(&mut buffer);
        let bounds = frame.area();
        frame.put_str_signed(bounds, -2, 0, "abcd", Style::default());
        assert_eq!(buffer[(0, 0)].symbol(), "c");
        assert_eq!(buffer[(1, 0)].symbol(), "d");
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate_to_width("héllo", 2), "hé");
        assert_eq!(truncate_to_width("ok", 10), "ok");
    }

    #[test]
    fn rect_contains_edge_cases() {
        assert!(!rect_contains(Rect::new(0, 0, 0, 5), 0, 0));
        let r = Rect::new(1, 1, 3, 3);
        assert!(rect_contains(r, 1, 1));
        assert!(!rect_contains(r, 4, 1));
    }
}
