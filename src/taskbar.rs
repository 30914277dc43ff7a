use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::constants::{APP_NAME, APP_VERSION};
use crate::theme;
use crate::ui::{UiFrame, rect_contains, safe_set_string, truncate_to_width};
use crate::window::WindowId;
use crate::window::present::TaskbarEntry;

const MAX_LABEL: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarHit {
    Launcher,
    Window(WindowId),
    /// Scroll the window buttons one entry towards the first window.
    ScrollBack,
    /// Scroll the window buttons one entry towards the last window.
    ScrollForward,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Button {
    hit: TaskbarHit,
    rect: Rect,
    label: String,
    style: Style,
}

/// Buttons laid out left to right on one row, stopping at `max_x`.
#[derive(Debug, Clone)]
struct Row {
    y: u16,
    x: u16,
    max_x: u16,
    buttons: Vec<Button>,
}

impl Row {
    fn push(&mut self, hit: TaskbarHit, label: String, style: Style) -> bool {
        let width = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
        if self.x.saturating_add(width) > self.max_x {
            return false;
        }
        self.buttons.push(Button {
            hit,
            rect: Rect::new(self.x, self.y, width, 1),
            label,
            style,
        });
        self.x = self.x.saturating_add(width).saturating_add(1);
        true
    }
}

/// Bottom bar: launcher button, one button per window and the app label on
/// the right. When the window buttons overflow, `«` and `»` scroll them so
/// every window stays reachable.
#[derive(Debug, Clone, Default)]
pub struct TaskbarLayout {
    area: Rect,
    buttons: Vec<Button>,
    info: String,
    first: usize,
    next: usize,
    total: usize,
}

impl TaskbarLayout {
    /// Lay out `entries`, showing window buttons from index `first` on if
    /// they do not all fit.
    pub fn new(entries: &[TaskbarEntry], area: Rect, launcher_hint: &str, first: usize) -> Self {
        let info = format!("{APP_NAME} {APP_VERSION}");
        let info_width = u16::try_from(info.chars().count() + 1).unwrap_or(u16::MAX);
        let max_x = area
            .x
            .saturating_add(area.width)
            .saturating_sub(info_width);
        let mut row = Row {
            y: area.y,
            x: area.x,
            max_x,
            buttons: Vec::new(),
        };

        let launcher_label = if launcher_hint.is_empty() {
            "[+ New]".to_string()
        } else {
            format!("[+ New ({launcher_hint})]")
        };
        row.push(TaskbarHit::Launcher, launcher_label, theme::launcher_button());

        let windows: Vec<(TaskbarHit, String, Style)> = entries.iter().map(window_button).collect();
        let total = windows.len();

        let mut unpaged = row.clone();
        if windows
            .iter()
            .all(|(hit, label, style)| unpaged.push(*hit, label.clone(), *style))
        {
            return Self {
                area,
                buttons: unpaged.buttons,
                info,
                first: 0,
                next: total,
                total,
            };
        }

        // Keep room for " »" after the last window button.
        let first = first.min(total.saturating_sub(1));
        row.max_x = max_x.saturating_sub(2);
        row.push(TaskbarHit::ScrollBack, "«".to_string(), theme::launcher_button());
        let mut next = first;
        for (hit, label, style) in &windows[first..] {
            if !row.push(*hit, label.clone(), *style) {
                break;
            }
            next += 1;
        }
        row.max_x = max_x;
        row.push(TaskbarHit::ScrollForward, "»".to_string(), theme::launcher_button());

        Self {
            area,
            buttons: row.buttons,
            info,
            first,
            next,
            total,
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<TaskbarHit> {
        self.buttons
            .iter()
            .find(|button| rect_contains(button.rect, column, row))
            .map(|button| button.hit)
    }

    /// Number of window buttons currently shown.
    pub fn window_buttons(&self) -> usize {
        self.buttons
            .iter()
            .filter(|b| matches!(b.hit, TaskbarHit::Window(_)))
            .count()
    }

    /// Index of the first window button shown.
    pub fn first(&self) -> usize {
        self.first
    }

    /// Scroll offset after pressing `«`.
    pub fn scrolled_back(&self) -> usize {
        self.first.saturating_sub(1)
    }

    /// Scroll offset after pressing `»`; unchanged once the last window is
    /// shown.
    pub fn scrolled_forward(&self) -> usize {
        if self.next < self.total {
            self.first + 1
        } else {
            self.first
        }
    }

    pub fn render(&self, frame: &mut UiFrame<'_>) {
        let area = self.area;
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        for yy in bounds.y..bounds.y.saturating_add(bounds.height) {
            for xx in bounds.x..bounds.x.saturating_add(bounds.width) {
                if let Some(cell) = buffer.cell_mut((xx, yy)) {
                    cell.set_symbol(" ");
                    cell.set_style(theme::taskbar());
                }
            }
        }
        for button in &self.buttons {
            safe_set_string(
                buffer,
                bounds,
                button.rect.x,
                button.rect.y,
                &button.label,
                button.style,
            );
        }
        let text = truncate_to_width(&self.info, bounds.width as usize);
        let text_width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let start_x = bounds
            .x
            .saturating_add(bounds.width)
            .saturating_sub(text_width)
            .max(bounds.x);
        safe_set_string(buffer, bounds, start_x, area.y, &text, theme::taskbar());
    }
}

fn window_button(entry: &TaskbarEntry) -> (TaskbarHit, String, Style) {
    let title = truncate_to_width(&entry.title, MAX_LABEL);
    let (label, style) = if entry.minimized {
        (format!(" ({title}) "), theme::taskbar_minimized())
    } else if entry.active {
        (format!(" {title} "), theme::taskbar_active())
    } else {
        (format!(" {title} "), theme::taskbar())
    };
    (TaskbarHit::Window(entry.id), label, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    fn entry(id: u64, title: &str, minimized: bool, active: bool) -> TaskbarEntry {
        TaskbarEntry {
            id: WindowId::new(id),
            title: title.to_string(),
            minimized,
            active,
        }
    }

    #[test]
    fn launcher_button_comes_first() {
        let area = Rect::new(0, 20, 100, 1);
        let layout = TaskbarLayout::new(&[entry(1, "Dashboard", false, true)], area, "Alt+N", 0);
        assert_eq!(layout.hit(0, 20), Some(TaskbarHit::Launcher));
        // "[+ New (Alt+N)]" is 15 wide, then one space.
        assert_eq!(layout.hit(16, 20), Some(TaskbarHit::Window(WindowId::new(1))));
        assert_eq!(layout.hit(15, 20), None);
        assert_eq!(layout.hit(0, 19), None);
    }

    #[test]
    fn overflowing_buttons_scroll_into_view() {
        // Room for a single window button per page.
        let area = Rect::new(0, 0, 60, 1);
        let entries: Vec<_> = (1..=5)
            .map(|i| entry(i, "Purchase Invoice", i == 5, false))
            .collect();
        let mut reached = Vec::new();
        let mut first = 0;
        for _ in 0..entries.len() {
            let layout = TaskbarLayout::new(&entries, area, "Alt+N", first);
            assert!(layout.window_buttons() >= 1);
            // "[+ New (Alt+N)]" is 15 wide, then "«" at 16.
            assert_eq!(layout.hit(16, 0), Some(TaskbarHit::ScrollBack));
            for column in 0..area.width {
                if let Some(TaskbarHit::Window(id)) = layout.hit(column, 0)
                    && !reached.contains(&id)
                {
                    reached.push(id);
                }
            }
            first = layout.scrolled_forward();
        }
        assert_eq!(reached.len(), entries.len());
        assert!(reached.contains(&WindowId::new(5)));

        let last = TaskbarLayout::new(&entries, area, "Alt+N", 99);
        assert_eq!(last.first(), 4);
        assert_eq!(last.scrolled_forward(), 4);
        assert_eq!(last.scrolled_back(), 3);
    }

    #[test]
    fn no_scroll_buttons_when_everything_fits() {
        let area = Rect::new(0, 0, 100, 1);
        let entries = [entry(1, "A", false, true), entry(2, "B", true, false)];
        let layout = TaskbarLayout::new(&entries, area, "Alt+N", 3);
        assert_eq!(layout.window_buttons(), 2);
        assert_eq!(layout.first(), 0);
        for column in 0..area.width {
            assert!(!matches!(
                layout.hit(column, 0),
                Some(TaskbarHit::ScrollBack | TaskbarHit::ScrollForward)
            ));
        }
    }

    #[test]
    fn renders_app_label_on_the_right() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buffer = Buffer::empty(area);
        let layout = TaskbarLayout::new(&[entry(2, "Customer", true, false)], area, "Alt+N", 0);
        {
            let mut frame = UiFrame::from_buffer(&mut buffer);
            layout.render(&mut frame);
        }
        let row: String = (0..60).map(|x| buffer[(x, 0)].symbol().to_string()).collect();
        assert!(row.starts_with("[+ New (Alt+N)]  (Customer) "));
        assert!(row.trim_end().ends_with(&format!("{APP_NAME} {APP_VERSION}")));
    }
}
