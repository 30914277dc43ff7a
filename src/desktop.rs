//! The desktop: window manager, mounted content, launcher and taskbar wired
//! to terminal input and output.

use std::collections::BTreeMap;

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::component_context::ComponentContext;
use crate::config::ShellConfig;
use crate::constants::TASKBAR_HEIGHT;
use crate::content::{
    ContentRegistry, ContentSignal, DASHBOARD, HostedContent, UnavailableContent,
};
use crate::keybindings::{Action, KeyBindings};
use crate::launcher::Launcher;
use crate::taskbar::{TaskbarHit, TaskbarLayout};
use crate::theme;
use crate::ui::UiFrame;
use crate::window::decorator::{ChromeHit, DefaultDecorator, WindowDecorator};
use crate::window::present::{
    FrameView, activate_from_taskbar, hit_test, paint_order, taskbar_entries,
};
use crate::window::{CellMetrics, PixelRect, ShellEvent, WindowId, WindowManager, WindowOptions};

/// Terminal size assumed until the first draw or resize event.
const INITIAL_AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 120,
    height: 40,
};

pub struct Desktop {
    windows: WindowManager,
    registry: ContentRegistry,
    mounted: BTreeMap<WindowId, Box<dyn HostedContent>>,
    synced_revision: Option<u64>,
    launcher: Launcher,
    bindings: KeyBindings,
    decorator: Box<dyn WindowDecorator>,
    metrics: CellMetrics,
    mouse_capture: bool,
    area: Rect,
    taskbar_first: usize,
    quit: bool,
}

impl std::fmt::Debug for Desktop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Desktop")
            .field("windows", &self.windows)
            .field("mounted", &self.mounted.keys().collect::<Vec<_>>())
            .field("launcher", &self.launcher)
            .field("area", &self.area)
            .finish_non_exhaustive()
    }
}

impl Desktop {
    pub fn new(config: &ShellConfig) -> Self {
        Self::with_registry(config, ContentRegistry::with_builtins())
    }

    pub fn with_registry(config: &ShellConfig, registry: ContentRegistry) -> Self {
        if registry.is_empty() {
            tracing::warn!("no content registered; every window gets a placeholder");
        } else {
            tracing::debug!(contents = registry.len(), "content registry ready");
        }
        let mut desktop = Self {
            windows: WindowManager::with_policy(config.policy),
            registry,
            mounted: BTreeMap::new(),
            synced_revision: None,
            launcher: Launcher::new(),
            bindings: KeyBindings::default(),
            decorator: Box::new(DefaultDecorator),
            metrics: config.metrics,
            mouse_capture: config.mouse_capture,
            area: INITIAL_AREA,
            taskbar_first: 0,
            quit: false,
        };
        if config.open_dashboard {
            desktop.open_window(WindowOptions::new("Dashboard", DASHBOARD));
        }
        desktop
    }

    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    pub fn mouse_capture(&self) -> bool {
        self.mouse_capture
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_mounted(&self, id: WindowId) -> bool {
        self.mounted.contains_key(&id)
    }

    pub fn mounted_count(&self) -> usize {
        self.mounted.len()
    }

    pub fn take_events(&mut self) -> Vec<ShellEvent> {
        self.windows.take_events()
    }

    pub fn open_window(&mut self, options: WindowOptions) -> WindowId {
        let id = self.windows.create_window(options);
        self.sync_contents();
        id
    }

    pub fn close_window(&mut self, id: WindowId) {
        self.windows.close_window(id);
        self.sync_contents();
    }

    /// Bring mounted content in line with the window list: instantiate for
    /// new windows, drop for closed ones. Does nothing if the window state
    /// has not changed since the last call.
    pub fn sync_contents(&mut self) {
        let revision = self.windows.revision();
        if self.synced_revision == Some(revision) {
            return;
        }
        for record in self.windows.windows() {
            if self.mounted.contains_key(&record.id()) {
                continue;
            }
            let content: Box<dyn HostedContent> = match self.registry.instantiate(record.content(), record.params()) {
                Ok(content) => content,
                Err(err) => {
                    tracing::warn!(window = %record.id(), %err, "mounting placeholder");
                    Box::new(UnavailableContent::new(&err))
                }
            };
            self.mounted.insert(record.id(), content);
        }
        let windows = &self.windows;
        self.mounted.retain(|id, _| windows.window(*id).is_some());
        self.synced_revision = Some(revision);
    }

    pub fn resize(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Terminal area left for windows once the taskbar is reserved.
    pub fn viewport(&self) -> Rect {
        Rect {
            height: self.area.height.saturating_sub(TASKBAR_HEIGHT),
            ..self.area
        }
    }

    fn taskbar_area(&self) -> Rect {
        let height = TASKBAR_HEIGHT.min(self.area.height);
        Rect {
            y: self.area.bottom().saturating_sub(height),
            height,
            ..self.area
        }
    }

    fn viewport_px(&self) -> PixelRect {
        self.metrics.to_pixels(self.viewport())
    }

    pub fn frames(&self) -> Vec<FrameView> {
        paint_order(&self.windows, self.viewport_px())
    }

    fn taskbar(&self) -> TaskbarLayout {
        TaskbarLayout::new(
            &taskbar_entries(&self.windows),
            self.taskbar_area(),
            &self.bindings.hint(Action::ToggleLauncher),
            self.taskbar_first,
        )
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => self.handle_key(key, event),
            Event::Mouse(mouse) => self.handle_mouse(mouse, event),
            Event::Resize(width, height) => self.resize(Rect::new(0, 0, *width, *height)),
            _ => {}
        }
        self.sync_contents();
    }

    fn handle_key(&mut self, key: &KeyEvent, event: &Event) {
        if self
            .launcher
            .handle_key(key, &self.bindings, &mut self.windows)
        {
            return;
        }
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.bindings.matches(Action::Quit, key) {
            tracing::debug!("quit requested");
            self.quit = true;
            return;
        }
        if self.bindings.matches(Action::FocusNext, key) {
            self.windows.cycle_focus(true);
            return;
        }
        if self.bindings.matches(Action::FocusPrev, key) {
            self.windows.cycle_focus(false);
            return;
        }
        if self.bindings.matches(Action::RestoreMinimized, key) {
            self.windows.restore_last_minimized();
            return;
        }
        let Some(focused) = self.windows.focused_window() else {
            return;
        };
        if self.bindings.matches(Action::MinimizeWindow, key) {
            self.windows.minimize_window(focused);
        } else if self.bindings.matches(Action::ToggleMaximize, key) {
            self.windows.toggle_maximize(focused);
        } else if self.bindings.matches(Action::CloseWindow, key) {
            self.close_window(focused);
        } else {
            self.dispatch_to_content(focused, event);
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, event: &Event) {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_press(column, row, event),
            MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                self.windows
                    .pointer_moved(self.metrics.pointer_at(column, row));
            }
            MouseEventKind::Up(_) => {
                self.windows.pointer_released();
            }
            _ => {}
        }
    }

    fn handle_press(&mut self, column: u16, row: u16, event: &Event) {
        let viewport = self.viewport();
        if self.launcher.is_visible() {
            if let Some(entry) = self.launcher.entry_at(viewport, column, row) {
                self.launcher.launch(entry, &mut self.windows);
            } else if !self.launcher.contains(viewport, column, row) {
                self.launcher.close();
            }
            return;
        }
        if row >= viewport.bottom() {
            let taskbar = self.taskbar();
            match taskbar.hit(column, row) {
                Some(TaskbarHit::Launcher) => self.launcher.toggle(),
                Some(TaskbarHit::Window(id)) => activate_from_taskbar(&mut self.windows, id),
                Some(TaskbarHit::ScrollBack) => self.taskbar_first = taskbar.scrolled_back(),
                Some(TaskbarHit::ScrollForward) => {
                    self.taskbar_first = taskbar.scrolled_forward();
                }
                None => {}
            }
            return;
        }

        let frames = self.frames();
        let Some(frame) = hit_test(&frames, &self.metrics, column, row) else {
            return;
        };
        let id = frame.id;
        let cells = self.metrics.to_cells(frame.rect);
        let hit = self.decorator.hit_test(
            cells,
            frame.maximized,
            i32::from(column),
            i32::from(row),
        );
        let origin = self.metrics.pointer_at(column, row);
        match hit {
            Some(ChromeHit::Minimize) => self.windows.minimize_window(id),
            Some(ChromeHit::Maximize | ChromeHit::Restore) => self.windows.toggle_maximize(id),
            Some(ChromeHit::Close) => self.close_window(id),
            Some(ChromeHit::TitleBar) => self.windows.start_window_drag(id, origin),
            Some(ChromeHit::ResizeHandle) => self.windows.start_window_resize(id, origin),
            Some(ChromeHit::Body) => {
                self.windows.set_active_window(id);
                self.dispatch_to_content(id, event);
            }
            None => {}
        }
    }

    fn dispatch_to_content(&mut self, id: WindowId, event: &Event) {
        let ctx = ComponentContext::new(id).with_focus(self.windows.focused_window() == Some(id));
        let Some(content) = self.mounted.get_mut(&id) else {
            return;
        };
        match content.handle_event(event, &ctx) {
            Some(ContentSignal::Close) => self.close_window(id),
            Some(ContentSignal::Save) => self.windows.record_save(id),
            None => {}
        }
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>) {
        self.resize(frame.area());
        self.sync_contents();
        let viewport = self.viewport();

        let frames = self.frames();
        if frames.is_empty() && viewport.height > 0 {
            let hint = format!(
                "No open windows. Press {} to launch a transaction.",
                self.bindings.hint(Action::ToggleLauncher)
            );
            let line_area = Rect {
                y: viewport.y + viewport.height / 2,
                height: 1,
                ..viewport
            };
            frame.render_widget(
                Paragraph::new(Line::styled(hint, theme::muted())).centered(),
                line_area,
            );
        }
        for view in &frames {
            let cells = self.metrics.to_cells(view.rect);
            self.decorator.render_window(
                frame,
                cells,
                viewport,
                &view.title,
                view.active,
                view.maximized,
            );
            let Some(slot) = self.decorator.content_rect(cells).visible_in(viewport) else {
                continue;
            };
            let ctx = ComponentContext::new(view.id).with_focus(view.active);
            if let Some(content) = self.mounted.get_mut(&view.id) {
                content.render(frame, slot, &ctx);
            }
        }

        self.taskbar().render(frame);
        self.launcher.render(frame, viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentParams;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::buffer::Buffer;

    fn empty_desktop() -> Desktop {
        let config = ShellConfig {
            open_dashboard: false,
            ..ShellConfig::default()
        };
        Desktop::new(&config)
    }

    fn key(code: KeyCode, mods: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, mods))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn dashboard_opens_at_startup() {
        let desktop = Desktop::new(&ShellConfig::default());
        assert_eq!(desktop.windows().windows().len(), 1);
        assert_eq!(desktop.windows().windows()[0].title(), "Dashboard");
        assert_eq!(desktop.mounted_count(), 1);
    }

    #[test]
    fn unknown_content_gets_a_placeholder() {
        let mut desktop = empty_desktop();
        let id = desktop.open_window(WindowOptions::new("Payroll", "payroll-transaction"));
        assert!(desktop.is_mounted(id));
        desktop.close_window(id);
        assert!(!desktop.is_mounted(id));
        assert_eq!(desktop.mounted_count(), 0);
    }

    #[test]
    fn empty_registry_still_mounts_windows() {
        let desktop = Desktop::with_registry(&ShellConfig::default(), ContentRegistry::new());
        let id = desktop.windows().windows()[0].id();
        assert!(desktop.is_mounted(id));
    }

    #[test]
    fn content_signals_reach_the_window_manager() {
        let mut desktop = empty_desktop();
        let id = desktop.open_window(
            WindowOptions::new("Customer", "customer-transaction")
                .with_params(ContentParams::new().with("mode", "list")),
        );
        desktop.take_events();
        desktop.handle_event(&key(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(desktop.take_events(), vec![ShellEvent::Saved(id)]);
        desktop.handle_event(&key(KeyCode::Char('w'), KeyModifiers::CONTROL));
        assert!(desktop.windows().window(id).is_none());
        assert_eq!(desktop.mounted_count(), 0);
    }

    #[test]
    fn keyboard_window_operations() {
        let mut desktop = empty_desktop();
        let a = desktop.open_window(WindowOptions::new("A", "company-transaction"));
        let b = desktop.open_window(WindowOptions::new("B", "item-transaction"));
        desktop.handle_event(&key(KeyCode::Char('x'), KeyModifiers::ALT));
        assert!(desktop.windows().window(b).unwrap().is_maximized());
        desktop.handle_event(&key(KeyCode::Char('m'), KeyModifiers::ALT));
        assert!(desktop.windows().window(b).unwrap().is_minimized());
        assert_eq!(desktop.windows().focused_window(), Some(a));
        desktop.handle_event(&key(KeyCode::Char('w'), KeyModifiers::ALT));
        assert!(desktop.windows().window(a).is_none());
        desktop.handle_event(&key(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(desktop.should_quit());
    }

    #[test]
    fn launcher_is_modal_for_keys() {
        let mut desktop = empty_desktop();
        desktop.handle_event(&key(KeyCode::Char('n'), KeyModifiers::ALT));
        assert!(desktop.launcher().is_visible());
        desktop.handle_event(&key(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(!desktop.should_quit());
        desktop.handle_event(&key(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(desktop.windows().windows().len(), 1);
        assert_eq!(desktop.windows().windows()[0].title(), "Company");
        assert_eq!(desktop.mounted_count(), 1);
    }

    #[test]
    fn title_bar_drag_moves_the_window() {
        let mut desktop = empty_desktop();
        let id = desktop.open_window(WindowOptions::new("A", "company-transaction"));
        // Window at (50,50) px is cells (5,2); its header row is 3.
        desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 3));
        assert_eq!(desktop.windows().pointer_listeners(), 2);
        desktop.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 14, 5));
        let record = desktop.windows().window(id).unwrap();
        assert_eq!((record.x(), record.y()), (90, 90));
        desktop.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 14, 5));
        assert_eq!(desktop.windows().pointer_listeners(), 0);
    }

    #[test]
    fn chrome_buttons_and_taskbar() {
        let mut desktop = empty_desktop();
        let id = desktop.open_window(WindowOptions::new("A", "company-transaction"));
        // Cells (5,2) 90x30; right edge column 94, header row 3.
        desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 88, 3));
        assert!(desktop.windows().window(id).unwrap().is_minimized());

        // Taskbar is the last row; the window button follows "[+ New (Alt+N)] ".
        let bottom = desktop.area().height - 1;
        desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 16, bottom));
        assert!(!desktop.windows().window(id).unwrap().is_minimized());

        desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 92, 3));
        assert!(desktop.windows().window(id).is_none());

        desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 0, bottom));
        assert!(desktop.launcher().is_visible());
        desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        assert!(!desktop.launcher().is_visible());
    }

    #[test]
    fn every_minimized_window_can_be_restored() {
        let mut desktop = empty_desktop();
        desktop.resize(Rect::new(0, 0, 80, 24));
        let ids: Vec<WindowId> = (0..6)
            .map(|_| {
                desktop.open_window(WindowOptions::new(
                    "Purchase Invoice",
                    "purchase-invoice-transaction",
                ))
            })
            .collect();
        let last = ids[5];
        desktop.handle_event(&key(KeyCode::Char('m'), KeyModifiers::ALT));
        assert!(desktop.windows().window(last).unwrap().is_minimized());

        // Page through the taskbar with "»" until the minimized window shows.
        let bottom = 23;
        let find = |desktop: &Desktop, hit: TaskbarHit| {
            let taskbar = desktop.taskbar();
            (0..80).find(|&column| taskbar.hit(column, bottom) == Some(hit))
        };
        let mut target = None;
        for _ in 0..ids.len() {
            target = find(&desktop, TaskbarHit::Window(last));
            if target.is_some() {
                break;
            }
            let forward = find(&desktop, TaskbarHit::ScrollForward).unwrap();
            desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), forward, bottom));
        }
        let target = target.unwrap();
        desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), target, bottom));
        assert!(!desktop.windows().window(last).unwrap().is_minimized());
        assert_eq!(desktop.windows().focused_window(), Some(last));

        // The keyboard path needs no taskbar at all.
        desktop.handle_event(&key(KeyCode::Char('m'), KeyModifiers::ALT));
        desktop.handle_event(&key(KeyCode::Char('m'), KeyModifiers::ALT));
        assert!(desktop.windows().window(ids[4]).unwrap().is_minimized());
        desktop.handle_event(&key(KeyCode::Char('r'), KeyModifiers::ALT));
        assert_eq!(desktop.windows().focused_window(), Some(last));
        desktop.handle_event(&key(KeyCode::Char('r'), KeyModifiers::ALT));
        assert_eq!(desktop.windows().focused_window(), Some(ids[4]));
    }

    #[test]
    fn render_draws_frames_and_taskbar() {
        let mut desktop = Desktop::new(&ShellConfig::default());
        let area = Rect::new(0, 0, 100, 34);
        let mut buffer = Buffer::empty(area);
        {
            let mut frame = UiFrame::from_buffer(&mut buffer);
            desktop.render(&mut frame);
        }
        assert_eq!(desktop.viewport(), Rect::new(0, 0, 100, 33));
        // Dashboard frame top-left corner at cells (5, 2).
        assert_eq!(buffer[(5, 2)].symbol(), "┌");
        let taskbar: String = (0..15).map(|x| buffer[(x, 33)].symbol().to_string()).collect();
        assert_eq!(taskbar, "[+ New (Alt+N)]");
    }
}
