//! Pointer-interaction controller.
//!
//! Turns a press-move-release gesture on a title bar or resize handle into
//! live geometry updates for exactly one window. Each gesture owns a
//! subscription to the process-wide pointer-move and pointer-release
//! streams; the subscription is a guard, so every way a gesture ends
//! (release, a newer gesture, closing, minimizing or maximizing its window)
//! gives the listeners back.
//!
//! The bus does not route events itself. It is bookkeeping: the window
//! manager forwards pointer moves and releases to the controller only while
//! a subscription is held.

use std::cell::Cell;
use std::rc::Rc;

use super::{ShellState, WindowId};

/// Pointer location in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Resize,
}

/// Snapshot taken when a title-bar drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderDrag {
    pub id: WindowId,
    pub start: PointerPosition,
    pub initial_x: i32,
    pub initial_y: i32,
}

impl HeaderDrag {
    /// Window origin for the pointer at `at`; the delta is applied additively.
    pub fn position_at(&self, at: PointerPosition) -> (i32, i32) {
        let dx = at.x.saturating_sub(self.start.x);
        let dy = at.y.saturating_sub(self.start.y);
        (
            self.initial_x.saturating_add(dx),
            self.initial_y.saturating_add(dy),
        )
    }
}

/// Snapshot taken when a resize-handle drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeDrag {
    pub id: WindowId,
    pub start: PointerPosition,
    pub start_width: u32,
    pub start_height: u32,
    pub min_width: u32,
    pub min_height: u32,
}

impl ResizeDrag {
    /// Window size for the pointer at `at`, never below the minimums.
    pub fn size_at(&self, at: PointerPosition) -> (u32, u32) {
        let dx = at.x.saturating_sub(self.start.x);
        let dy = at.y.saturating_sub(self.start.y);
        (
            grow(self.start_width, dx, self.min_width),
            grow(self.start_height, dy, self.min_height),
        )
    }
}

fn grow(start: u32, delta: i32, min: u32) -> u32 {
    let size = i64::from(start) + i64::from(delta);
    u32::try_from(size.max(i64::from(min))).unwrap_or(u32::MAX)
}

/// Registry of the process-wide pointer listeners.
#[derive(Debug, Clone, Default)]
struct PointerBus {
    listeners: Rc<Cell<usize>>,
}

impl PointerBus {
    fn listen(&self) -> PointerListener {
        self.listeners.set(self.listeners.get() + 1);
        PointerListener {
            listeners: Rc::clone(&self.listeners),
        }
    }

    fn subscribe(&self) -> GestureSubscription {
        GestureSubscription {
            _on_move: self.listen(),
            _on_release: self.listen(),
        }
    }

    fn count(&self) -> usize {
        self.listeners.get()
    }
}

#[derive(Debug)]
struct PointerListener {
    listeners: Rc<Cell<usize>>,
}

impl Drop for PointerListener {
    fn drop(&mut self) {
        self.listeners.set(self.listeners.get().saturating_sub(1));
    }
}

#[derive(Debug)]
struct GestureSubscription {
    _on_move: PointerListener,
    _on_release: PointerListener,
}

#[derive(Debug, Clone, Copy)]
enum Motion {
    Drag(HeaderDrag),
    Resize(ResizeDrag),
}

impl Motion {
    fn target(&self) -> WindowId {
        match self {
            Motion::Drag(drag) => drag.id,
            Motion::Resize(resize) => resize.id,
        }
    }
}

#[derive(Debug)]
struct ActiveGesture {
    motion: Motion,
    _subscription: GestureSubscription,
}

/// `Idle -> Active -> Idle` state machine for drag and resize gestures.
///
/// The target window is captured when the gesture starts and used for every
/// update, independent of which window holds focus afterwards.
#[derive(Debug, Default)]
pub struct PointerController {
    bus: PointerBus,
    active: Option<ActiveGesture>,
}

impl PointerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn begin_drag(&mut self, drag: HeaderDrag) {
        self.begin(Motion::Drag(drag));
    }

    pub(crate) fn begin_resize(&mut self, resize: ResizeDrag) {
        self.begin(Motion::Resize(resize));
    }

    fn begin(&mut self, motion: Motion) {
        // Only one gesture at a time; a stale one is released first.
        self.end();
        tracing::debug!(window_id = %motion.target(), kind = ?kind_of(&motion), "gesture started");
        self.active = Some(ActiveGesture {
            motion,
            _subscription: self.bus.subscribe(),
        });
    }

    /// Apply a pointer move to the gesture target. Returns true when the
    /// target's geometry changed.
    pub(crate) fn update(&self, state: &mut ShellState, at: PointerPosition) -> bool {
        let Some(active) = &self.active else {
            return false;
        };
        let Some(window) = state.window_mut(active.motion.target()) else {
            return false;
        };
        match active.motion {
            Motion::Drag(drag) => {
                let (x, y) = drag.position_at(at);
                if (window.x, window.y) == (x, y) {
                    return false;
                }
                window.x = x;
                window.y = y;
            }
            Motion::Resize(resize) => {
                let (width, height) = resize.size_at(at);
                if (window.width, window.height) == (width, height) {
                    return false;
                }
                window.width = width;
                window.height = height;
            }
        }
        true
    }

    /// End the gesture, keeping whatever geometry the last update wrote.
    pub(crate) fn end(&mut self) -> bool {
        match self.active.take() {
            Some(active) => {
                tracing::debug!(window_id = %active.motion.target(), "gesture ended");
                true
            }
            None => false,
        }
    }

    /// Abort the gesture if it targets `id`.
    pub(crate) fn cancel_for(&mut self, id: WindowId) -> bool {
        if self.target() == Some(id) {
            return self.end();
        }
        false
    }

    pub fn target(&self) -> Option<WindowId> {
        self.active.as_ref().map(|active| active.motion.target())
    }

    pub fn gesture(&self) -> Option<GestureKind> {
        self.active.as_ref().map(|active| kind_of(&active.motion))
    }

    /// Number of process-wide pointer listeners currently held.
    pub fn listeners(&self) -> usize {
        self.bus.count()
    }
}

fn kind_of(motion: &Motion) -> GestureKind {
    match motion {
        Motion::Drag(_) => GestureKind::Drag,
        Motion::Resize(_) => GestureKind::Resize,
    }
}
