//! Window records, the shared shell state and the services built on them.
//!
//! `ShellState` is plain data. All mutation funnels through
//! [`WindowManager`], which owns it; gestures are driven by the
//! [`pointer`] controller and rendering derives from [`present`].

pub mod decorator;
pub mod metrics;
pub mod pointer;
pub mod present;

mod window_manager;

use std::fmt;

use crate::constants::{
    CASCADE_ORIGIN, CASCADE_STEP, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH, Z_INDEX_BASE,
};
use crate::content::{ContentId, ContentParams};

pub use metrics::{CellMetrics, CellRect};
pub use pointer::{GestureKind, PointerPosition};
pub use window_manager::{ShellEvent, WindowManager};

/// Identity of an open window. Allocated monotonically and never reused
/// for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Pixel rectangle with a signed origin; windows may sit partly off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Sizing and stacking rules applied by the lifecycle manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPolicy {
    pub default_width: u32,
    pub default_height: u32,
    pub min_width: u32,
    pub min_height: u32,
    pub cascade_origin: i32,
    pub cascade_step: i32,
    pub z_index_base: i32,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_WINDOW_WIDTH,
            default_height: DEFAULT_WINDOW_HEIGHT,
            min_width: MIN_WINDOW_WIDTH,
            min_height: MIN_WINDOW_HEIGHT,
            cascade_origin: CASCADE_ORIGIN,
            cascade_step: CASCADE_STEP,
            z_index_base: Z_INDEX_BASE,
        }
    }
}

/// Everything a caller supplies when asking for a new window.
#[derive(Debug, Clone)]
pub struct WindowOptions {
    pub(crate) title: String,
    pub(crate) content: ContentId,
    pub(crate) params: ContentParams,
    pub(crate) width: Option<u32>,
    pub(crate) height: Option<u32>,
    pub(crate) x: Option<i32>,
    pub(crate) y: Option<i32>,
}

impl WindowOptions {
    pub fn new(title: impl Into<String>, content: impl Into<ContentId>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            params: ContentParams::default(),
            width: None,
            height: None,
            x: None,
            y: None,
        }
    }

    pub fn with_params(mut self, params: ContentParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self::new("New Window", ContentId::default())
    }
}

/// One open panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub(crate) id: WindowId,
    pub(crate) title: String,
    pub(crate) content: ContentId,
    pub(crate) params: ContentParams,
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) z_index: i32,
    pub(crate) minimized: bool,
    pub(crate) maximized: bool,
}

impl WindowRecord {
    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &ContentId {
        &self.content
    }

    pub fn params(&self) -> &ContentParams {
        &self.params
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rect(&self) -> PixelRect {
        PixelRect::new(self.x, self.y, self.width, self.height)
    }

    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }
}

/// The single shared mutable resource of the shell.
///
/// `windows` keeps creation order; paint order is derived from `z_index`.
#[derive(Debug, Clone)]
pub struct ShellState {
    pub(crate) windows: Vec<WindowRecord>,
    pub(crate) next_window_id: u64,
    pub(crate) active_window_id: Option<WindowId>,
    pub(crate) z_index_base: i32,
    revision: u64,
}

impl ShellState {
    pub fn new(z_index_base: i32) -> Self {
        Self {
            windows: Vec::new(),
            next_window_id: 1,
            active_window_id: None,
            z_index_base,
            revision: 0,
        }
    }

    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    pub fn window(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|window| window.id == id)
    }

    pub(crate) fn window_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|window| window.id == id)
    }

    pub(crate) fn position(&self, id: WindowId) -> Option<usize> {
        self.windows.iter().position(|window| window.id == id)
    }

    pub fn active_window_id(&self) -> Option<WindowId> {
        self.active_window_id
    }

    /// The id the next `create_window` call will hand out.
    pub fn next_window_id(&self) -> WindowId {
        WindowId(self.next_window_id)
    }

    pub fn z_index_base(&self) -> i32 {
        self.z_index_base
    }

    /// Change counter; bumped by every mutation so presenters know when to
    /// recompute their projections.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(Z_INDEX_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_id_display_and_order() {
        let a = WindowId::new(3);
        let b = WindowId::new(10);
        assert!(a < b);
        assert_eq!(a.to_string(), "#3");
        assert_eq!(b.get(), 10);
    }

    #[test]
    fn fresh_state_starts_at_one() {
        let state = ShellState::default();
        assert!(state.windows().is_empty());
        assert_eq!(state.next_window_id(), WindowId::new(1));
        assert_eq!(state.active_window_id(), None);
        assert_eq!(state.z_index_base(), Z_INDEX_BASE);
    }

    #[test]
    fn options_default_title() {
        let options = WindowOptions::default();
        assert_eq!(options.title, "New Window");
        assert!(options.width.is_none());
        assert!(options.x.is_none());
    }
}
