//! Context handed to hosted content.
//!
//! `ComponentContext` tells a content view which window it lives in and
//! whether that window currently holds focus, so views can style themselves
//! without reaching back into the window manager.

use crate::window::WindowId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentContext {
    window: WindowId,
    focused: bool,
}

impl ComponentContext {
    pub const fn new(window: WindowId) -> Self {
        Self {
            window,
            focused: false,
        }
    }

    pub const fn window(&self) -> WindowId {
        self.window
    }

    pub const fn focused(&self) -> bool {
        self.focused
    }

    pub const fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}
