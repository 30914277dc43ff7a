use super::pointer::{GestureKind, HeaderDrag, PointerController, PointerPosition, ResizeDrag};
use super::{ShellState, WindowId, WindowOptions, WindowPolicy, WindowRecord};

/// Notifications the embedder drains with [`WindowManager::take_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    Opened(WindowId),
    Closed(WindowId),
    /// Hosted content reported a save. The shell only records it.
    Saved(WindowId),
}

/// Window lifecycle manager.
///
/// Owns the [`ShellState`] and the pointer controller. Every operation
/// taking a window id silently does nothing when the id is unknown.
#[derive(Debug)]
pub struct WindowManager {
    state: ShellState,
    policy: WindowPolicy,
    pointer: PointerController,
    // queue of notifications; the embedder drains via `take_events`
    events: Vec<ShellEvent>,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    pub fn new() -> Self {
        Self::with_policy(WindowPolicy::default())
    }

    pub fn with_policy(policy: WindowPolicy) -> Self {
        Self {
            state: ShellState::new(policy.z_index_base),
            policy,
            pointer: PointerController::new(),
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn policy(&self) -> WindowPolicy {
        self.policy
    }

    pub fn windows(&self) -> &[WindowRecord] {
        self.state.windows()
    }

    pub fn window(&self, id: WindowId) -> Option<&WindowRecord> {
        self.state.window(id)
    }

    pub fn active_window_id(&self) -> Option<WindowId> {
        self.state.active_window_id()
    }

    /// The active window if it is visible. A minimized window is never
    /// treated as visually active even while it is still the stored one.
    pub fn focused_window(&self) -> Option<WindowId> {
        let id = self.state.active_window_id()?;
        self.state
            .window(id)
            .filter(|window| !window.minimized)
            .map(|window| window.id)
    }

    pub fn revision(&self) -> u64 {
        self.state.revision()
    }

    /// Drain notifications produced since the last call.
    pub fn take_events(&mut self) -> Vec<ShellEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn create_window(&mut self, options: WindowOptions) -> WindowId {
        let id = WindowId::new(self.state.next_window_id);
        self.state.next_window_id = self.state.next_window_id.saturating_add(1);

        let cascade = self
            .policy
            .cascade_origin
            .saturating_add(self.policy.cascade_step.saturating_mul(count(self.state.windows.len())));
        let record = WindowRecord {
            id,
            title: options.title,
            content: options.content,
            params: options.params,
            x: options.x.unwrap_or(cascade),
            y: options.y.unwrap_or(cascade),
            width: options
                .width
                .unwrap_or(self.policy.default_width)
                .max(self.policy.min_width),
            height: options
                .height
                .unwrap_or(self.policy.default_height)
                .max(self.policy.min_height),
            z_index: self.state.z_index_base,
            minimized: false,
            maximized: false,
        };
        tracing::debug!(window_id = %id, title = %record.title, content = %record.content, "opened window");
        self.state.windows.push(record);
        self.state.touch();
        self.events.push(ShellEvent::Opened(id));
        self.set_active_window(id);
        id
    }

    pub fn close_window(&mut self, id: WindowId) {
        let Some(index) = self.state.position(id) else {
            return;
        };
        // A gesture must never outlive the record it writes to.
        self.pointer.cancel_for(id);
        self.state.windows.remove(index);
        self.state.touch();
        self.events.push(ShellEvent::Closed(id));
        tracing::debug!(window_id = %id, "closed window");

        if self.state.windows.is_empty() {
            self.state.active_window_id = None;
        } else if self.state.active_window_id == Some(id)
            && let Some(next) = self.state.windows.last().map(|window| window.id)
        {
            self.set_active_window(next);
        }
    }

    /// Focus `id` and restack: every window gets `base + index` in creation
    /// order, then the target is lifted to `base + len`.
    pub fn set_active_window(&mut self, id: WindowId) {
        let Some(index) = self.state.position(id) else {
            return;
        };
        self.state.active_window_id = Some(id);
        let base = self.state.z_index_base;
        for (i, window) in self.state.windows.iter_mut().enumerate() {
            window.z_index = base.saturating_add(count(i));
        }
        let top = base.saturating_add(count(self.state.windows.len()));
        if let Some(window) = self.state.windows.get_mut(index) {
            window.z_index = top;
        }
        self.state.touch();
        tracing::trace!(window_id = %id, z_index = top, "activated window");
    }

    pub fn minimize_window(&mut self, id: WindowId) {
        let Some(window) = self.state.window_mut(id) else {
            return;
        };
        window.minimized = true;
        window.maximized = false;
        self.pointer.cancel_for(id);
        self.state.touch();
        tracing::debug!(window_id = %id, "minimized window");

        if self.state.active_window_id == Some(id)
            && let Some(next) = self
                .state
                .windows
                .iter()
                .rev()
                .find(|window| !window.minimized)
                .map(|window| window.id)
        {
            self.set_active_window(next);
        }
    }

    pub fn restore_window(&mut self, id: WindowId) {
        let Some(window) = self.state.window_mut(id) else {
            return;
        };
        window.minimized = false;
        window.maximized = false;
        self.state.touch();
        tracing::debug!(window_id = %id, "restored window");
        self.set_active_window(id);
    }

    pub fn maximize_window(&mut self, id: WindowId) {
        let Some(window) = self.state.window_mut(id) else {
            return;
        };
        window.maximized = true;
        window.minimized = false;
        // Maximized and minimized windows cannot be moved or resized.
        self.pointer.cancel_for(id);
        self.state.touch();
        tracing::debug!(window_id = %id, "maximized window");
        self.set_active_window(id);
    }

    /// Restore the most recently created minimized window, if any.
    pub fn restore_last_minimized(&mut self) -> Option<WindowId> {
        let id = self
            .state
            .windows
            .iter()
            .rev()
            .find(|window| window.minimized)
            .map(|window| window.id)?;
        self.restore_window(id);
        Some(id)
    }

    /// The maximize/restore chrome button.
    pub fn toggle_maximize(&mut self, id: WindowId) {
        match self.state.window(id).map(|window| window.maximized) {
            Some(true) => self.restore_window(id),
            Some(false) => self.maximize_window(id),
            None => {}
        }
    }

    /// Move focus to the next (or previous) visible window in creation order.
    pub fn cycle_focus(&mut self, forward: bool) {
        let visible: Vec<WindowId> = self
            .state
            .windows
            .iter()
            .filter(|window| !window.minimized)
            .map(|window| window.id)
            .collect();
        if visible.is_empty() {
            return;
        }
        let next = match self
            .focused_window()
            .and_then(|id| visible.iter().position(|candidate| *candidate == id))
        {
            Some(idx) => {
                let step = if forward { 1isize } else { -1isize };
                let len = visible.len() as isize;
                visible[(idx as isize + step).rem_euclid(len) as usize]
            }
            None if forward => visible[0],
            None => visible[visible.len() - 1],
        };
        self.set_active_window(next);
    }

    /// Record a save reported by the content hosted in `id`.
    pub fn record_save(&mut self, id: WindowId) {
        if self.state.window(id).is_none() {
            return;
        }
        tracing::debug!(window_id = %id, "content saved");
        self.events.push(ShellEvent::Saved(id));
    }

    /// Begin moving `id` with the pointer pressed at `origin`. Maximized
    /// windows are not draggable.
    pub fn start_window_drag(&mut self, id: WindowId, origin: PointerPosition) {
        if !self.gesture_allowed(id) {
            return;
        }
        self.set_active_window(id);
        let Some(window) = self.state.window(id) else {
            return;
        };
        let drag = HeaderDrag {
            id,
            start: origin,
            initial_x: window.x,
            initial_y: window.y,
        };
        self.pointer.begin_drag(drag);
    }

    /// Begin resizing `id` from the bottom-right handle. Maximized windows
    /// are not resizable.
    pub fn start_window_resize(&mut self, id: WindowId, origin: PointerPosition) {
        if !self.gesture_allowed(id) {
            return;
        }
        self.set_active_window(id);
        let Some(window) = self.state.window(id) else {
            return;
        };
        let resize = ResizeDrag {
            id,
            start: origin,
            start_width: window.width,
            start_height: window.height,
            min_width: self.policy.min_width,
            min_height: self.policy.min_height,
        };
        self.pointer.begin_resize(resize);
    }

    fn gesture_allowed(&self, id: WindowId) -> bool {
        self.state
            .window(id)
            .is_some_and(|window| !window.maximized)
    }

    /// Feed a pointer move to the active gesture. Moves only reach the
    /// controller while a gesture holds the move subscription.
    pub fn pointer_moved(&mut self, at: PointerPosition) -> bool {
        if self.pointer.listeners() == 0 {
            return false;
        }
        let changed = self.pointer.update(&mut self.state, at);
        if changed {
            self.state.touch();
        }
        changed
    }

    /// End the active gesture, if any.
    pub fn pointer_released(&mut self) -> bool {
        if self.pointer.listeners() == 0 {
            return false;
        }
        self.pointer.end()
    }

    pub fn gesture(&self) -> Option<GestureKind> {
        self.pointer.gesture()
    }

    pub fn gesture_target(&self) -> Option<WindowId> {
        self.pointer.target()
    }

    /// Process-wide pointer listeners held by the active gesture (0 or 2).
    pub fn pointer_listeners(&self) -> usize {
        self.pointer.listeners()
    }
}

fn count(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}
