//! Read-only projections of the shell state for rendering.
//!
//! Nothing here holds state of its own: frames and taskbar entries are
//! recomputed from the [`WindowManager`] whenever its revision changes.

use super::{CellMetrics, PixelRect, WindowId, WindowManager, WindowRecord};

/// How one window should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameView {
    pub id: WindowId,
    pub title: String,
    /// Where the frame goes; the full viewport while maximized.
    pub rect: PixelRect,
    pub z_index: i32,
    /// Visually active: the focused, non-minimized window.
    pub active: bool,
    pub maximized: bool,
}

/// Frame for a single record. Minimized windows produce nothing.
pub fn frame_for(
    record: &WindowRecord,
    viewport: PixelRect,
    focused: Option<WindowId>,
) -> Option<FrameView> {
    if record.minimized {
        return None;
    }
    let rect = if record.maximized {
        viewport
    } else {
        record.rect()
    };
    Some(FrameView {
        id: record.id,
        title: record.title.clone(),
        rect,
        z_index: record.z_index,
        active: focused == Some(record.id),
        maximized: record.maximized,
    })
}

/// Visible frames, bottom-most first. Equal z-indices keep creation order.
pub fn paint_order(windows: &WindowManager, viewport: PixelRect) -> Vec<FrameView> {
    let focused = windows.focused_window();
    let mut frames: Vec<FrameView> = windows
        .windows()
        .iter()
        .filter_map(|record| frame_for(record, viewport, focused))
        .collect();
    frames.sort_by_key(|frame| frame.z_index);
    frames
}

/// Topmost frame under the cell at (`column`, `row`). `frames` must be in
/// paint order.
pub fn hit_test<'a>(
    frames: &'a [FrameView],
    metrics: &CellMetrics,
    column: u16,
    row: u16,
) -> Option<&'a FrameView> {
    frames.iter().rev().find(|frame| {
        metrics
            .to_cells(frame.rect)
            .contains(i32::from(column), i32::from(row))
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub id: WindowId,
    pub title: String,
    pub minimized: bool,
    pub active: bool,
}

/// One entry per open window, minimized ones included, in creation order.
pub fn taskbar_entries(windows: &WindowManager) -> Vec<TaskbarEntry> {
    let focused = windows.focused_window();
    windows
        .windows()
        .iter()
        .map(|record| TaskbarEntry {
            id: record.id,
            title: record.title.clone(),
            minimized: record.minimized,
            active: focused == Some(record.id),
        })
        .collect()
}

/// A taskbar button press: minimized windows come back, visible ones are
/// brought to the front.
pub fn activate_from_taskbar(windows: &mut WindowManager, id: WindowId) {
    let Some(minimized) = windows.window(id).map(|record| record.minimized) else {
        return;
    };
    if minimized {
        windows.restore_window(id);
    } else {
        windows.set_active_window(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowOptions;

    const VIEWPORT: PixelRect = PixelRect::new(0, 0, 1200, 780);

    fn open(wm: &mut WindowManager, title: &str) -> WindowId {
        wm.create_window(WindowOptions::new(title, "company-transaction"))
    }

    #[test]
    fn minimized_windows_render_nothing() {
        let mut wm = WindowManager::new();
        let a = open(&mut wm, "A");
        let b = open(&mut wm, "B");
        wm.minimize_window(a);
        let frames = paint_order(&wm, VIEWPORT);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].id, b);
    }

    #[test]
    fn maximized_frames_cover_the_viewport() {
        let mut wm = WindowManager::new();
        let a = open(&mut wm, "A");
        wm.maximize_window(a);
        let frames = paint_order(&wm, VIEWPORT);
        assert_eq!(frames[0].rect, VIEWPORT);
        assert!(frames[0].maximized);
        // Stored geometry is untouched.
        assert_eq!(wm.window(a).unwrap().rect(), PixelRect::new(50, 50, 900, 600));
    }

    #[test]
    fn paint_order_follows_z_index() {
        let mut wm = WindowManager::new();
        let a = open(&mut wm, "A");
        let b = open(&mut wm, "B");
        let c = open(&mut wm, "C");
        wm.set_active_window(a);
        let ids: Vec<WindowId> = paint_order(&wm, VIEWPORT).iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![b, c, a]);
        let active: Vec<bool> = paint_order(&wm, VIEWPORT).iter().map(|f| f.active).collect();
        assert_eq!(active, vec![false, false, true]);
    }

    #[test]
    fn hit_test_prefers_the_topmost_frame() {
        let mut wm = WindowManager::new();
        let a = open(&mut wm, "A");
        let b = open(&mut wm, "B");
        let metrics = CellMetrics::default();
        let frames = paint_order(&wm, VIEWPORT);
        // (10, 5) lies inside both A (5,2..) and B (7,3..).
        assert_eq!(hit_test(&frames, &metrics, 10, 5).map(|f| f.id), Some(b));
        // (5, 2) is only inside A.
        assert_eq!(hit_test(&frames, &metrics, 5, 2).map(|f| f.id), Some(a));
        assert!(hit_test(&frames, &metrics, 0, 0).is_none());
    }

    #[test]
    fn taskbar_lists_minimized_windows_and_restores_them() {
        let mut wm = WindowManager::new();
        let a = open(&mut wm, "A");
        let b = open(&mut wm, "B");
        wm.minimize_window(b);
        let entries = taskbar_entries(&wm);
        assert_eq!(entries.len(), 2);
        assert!(entries[1].minimized);
        assert!(!entries[1].active);
        assert!(entries[0].active);

        activate_from_taskbar(&mut wm, b);
        assert!(!wm.window(b).unwrap().is_minimized());
        assert_eq!(wm.focused_window(), Some(b));

        activate_from_taskbar(&mut wm, a);
        assert_eq!(wm.focused_window(), Some(a));
    }
}
