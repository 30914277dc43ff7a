use ratatui::prelude::Rect;
use ratatui::widgets::Clear;

use super::CellRect;
use crate::theme;
use crate::ui::UiFrame;

/// Which part of a window's chrome sits under a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeHit {
    TitleBar,
    Minimize,
    Maximize,
    Restore,
    Close,
    ResizeHandle,
    Body,
}

pub trait WindowDecorator: std::fmt::Debug {
    fn render_window(
        &self,
        frame: &mut UiFrame<'_>,
        rect: CellRect,
        bounds: Rect,
        title: &str,
        focused: bool,
        maximized: bool,
    );

    /// Area left for hosted content inside the chrome.
    fn content_rect(&self, rect: CellRect) -> CellRect;

    fn hit_test(&self, rect: CellRect, maximized: bool, column: i32, row: i32)
    -> Option<ChromeHit>;
}

/// Box border, a one-row header with the title and the three window
/// controls, and a resize grip in the bottom-right corner.
#[derive(Debug, Default)]
pub struct DefaultDecorator;

const MINIMIZE_OFFSET: i32 = 6;
const MAXIMIZE_OFFSET: i32 = 4;
const CLOSE_OFFSET: i32 = 2;

impl DefaultDecorator {
    fn header_row(rect: CellRect) -> i32 {
        rect.y + 1
    }
}

impl WindowDecorator for DefaultDecorator {
    fn render_window(
        &self,
        frame: &mut UiFrame<'_>,
        rect: CellRect,
        bounds: Rect,
        title: &str,
        focused: bool,
        maximized: bool,
    ) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        if let Some(visible) = rect.visible_in(bounds) {
            frame.render_widget(Clear, visible);
        }

        let border_style = if focused {
            theme::border_focused()
        } else {
            theme::border()
        };
        let header_style = if focused {
            theme::header_focused()
        } else {
            theme::header_normal()
        };

        let left = rect.x;
        let right = rect.right();
        let top = rect.y;
        let bottom = rect.bottom();
        let header_y = Self::header_row(rect);

        for x in left..=right {
            let (top_sym, bottom_sym) = if x == left {
                ("┌", "└")
            } else if x == right {
                ("┐", "┘")
            } else {
                ("─", "─")
            };
            frame.put_signed(bounds, x, top, top_sym, border_style);
            frame.put_signed(bounds, x, bottom, bottom_sym, border_style);
        }
        for y in (top + 1)..bottom {
            frame.put_signed(bounds, left, y, "│", border_style);
            frame.put_signed(bounds, right, y, "│", border_style);
        }

        // Header background, then the title, then the controls on top.
        for x in (left + 1)..right {
            frame.put_signed(bounds, x, header_y, " ", header_style);
        }
        let title_room = usize::try_from(right - left - MINIMIZE_OFFSET - 2).unwrap_or(0);
        let shown: String = title.chars().take(title_room).collect();
        frame.put_str_signed(bounds, left + 2, header_y, &shown, header_style);

        let toggle = if maximized { "❐" } else { "□" };
        frame.put_signed(bounds, right - MINIMIZE_OFFSET, header_y, "_", header_style);
        frame.put_signed(bounds, right - MAXIMIZE_OFFSET, header_y, toggle, header_style);
        frame.put_signed(
            bounds,
            right - CLOSE_OFFSET,
            header_y,
            "×",
            theme::close_button(),
        );

        if !maximized {
            frame.put_signed(bounds, right, bottom, "◢", border_style);
        }
    }

    fn content_rect(&self, rect: CellRect) -> CellRect {
        CellRect::new(
            rect.x + 1,
            rect.y + 2,
            rect.width.saturating_sub(2),
            rect.height.saturating_sub(3),
        )
    }

    fn hit_test(
        &self,
        rect: CellRect,
        maximized: bool,
        column: i32,
        row: i32,
    ) -> Option<ChromeHit> {
        if !rect.contains(column, row) {
            return None;
        }
        let right = rect.right();
        if row == Self::header_row(rect) {
            let hit = match right - column {
                MINIMIZE_OFFSET => ChromeHit::Minimize,
                MAXIMIZE_OFFSET if maximized => ChromeHit::Restore,
                MAXIMIZE_OFFSET => ChromeHit::Maximize,
                CLOSE_OFFSET => ChromeHit::Close,
                _ => ChromeHit::TitleBar,
            };
            return Some(hit);
        }
        if row == rect.y {
            return Some(ChromeHit::TitleBar);
        }
        if !maximized && column == right && row == rect.bottom() {
            return Some(ChromeHit::ResizeHandle);
        }
        Some(ChromeHit::Body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    const RECT: CellRect = CellRect::new(2, 1, 30, 10);

    #[test]
    fn hit_test_finds_controls() {
        let d = DefaultDecorator;
        let right = RECT.right();
        assert_eq!(d.hit_test(RECT, false, right - 6, 2), Some(ChromeHit::Minimize));
        assert_eq!(d.hit_test(RECT, false, right - 4, 2), Some(ChromeHit::Maximize));
        assert_eq!(d.hit_test(RECT, true, right - 4, 2), Some(ChromeHit::Restore));
        assert_eq!(d.hit_test(RECT, false, right - 2, 2), Some(ChromeHit::Close));
        assert_eq!(d.hit_test(RECT, false, 5, 2), Some(ChromeHit::TitleBar));
        assert_eq!(d.hit_test(RECT, false, 5, 1), Some(ChromeHit::TitleBar));
        assert_eq!(d.hit_test(RECT, false, 5, 5), Some(ChromeHit::Body));
        assert_eq!(d.hit_test(RECT, false, 0, 0), None);
    }

    #[test]
    fn resize_handle_only_when_not_maximized() {
        let d = DefaultDecorator;
        let (x, y) = (RECT.right(), RECT.bottom());
        assert_eq!(d.hit_test(RECT, false, x, y), Some(ChromeHit::ResizeHandle));
        assert_eq!(d.hit_test(RECT, true, x, y), Some(ChromeHit::Body));
    }

    #[test]
    fn content_rect_sits_inside_the_chrome() {
        let inner = DefaultDecorator.content_rect(RECT);
        assert_eq!(inner, CellRect::new(3, 3, 28, 7));
    }

    #[test]
    fn renders_partially_offscreen_windows() {
        let area = Rect::new(0, 0, 20, 8);
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_buffer(&mut buffer);
        let rect = CellRect::new(-5, -1, 30, 6);
        DefaultDecorator.render_window(&mut frame, rect, area, "Company", true, false);
        // Header row lands on y = 0; the title starts at x = -3.
        assert_eq!(buffer[(0, 0)].symbol(), "p");
        assert_eq!(buffer[(19, 4)].symbol(), "─");
        assert_eq!(buffer[(0, 2)].symbol(), " ");
    }
}
