use std::io;
use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::desktop::Desktop;
use crate::drivers::InputDriver;
use crate::error::Result;
use crate::event_loop::{ControlFlow, EventLoop};
use crate::ui::UiFrame;
use crate::window::ShellEvent;

/// Drive `desktop` with events from `driver`, drawing to `terminal` on
/// every idle tick. `on_event` receives the shell notifications produced by
/// each step. Returns once the desktop asks to quit; terminal and driver
/// failures come back as [`ShellError::Io`](crate::ShellError::Io).
pub fn run_desktop<B, D, F>(
    terminal: &mut Terminal<B>,
    driver: D,
    desktop: &mut Desktop,
    poll_interval: Duration,
    mut on_event: F,
) -> Result<()>
where
    B: Backend,
    D: InputDriver,
    F: FnMut(ShellEvent),
{
    let mut event_loop = EventLoop::new(driver, poll_interval);
    event_loop
        .driver()
        .set_mouse_capture(desktop.mouse_capture())?;

    event_loop.run(|_driver, event| {
        match event {
            Some(evt) => desktop.handle_event(&evt),
            None => draw(terminal, desktop)?,
        }
        for shell_event in desktop.take_events() {
            on_event(shell_event);
        }
        if desktop.should_quit() {
            Ok(ControlFlow::Quit)
        } else {
            Ok(ControlFlow::Continue)
        }
    })?;
    Ok(())
}

/// Render one frame of `desktop`.
pub fn draw<B: Backend>(terminal: &mut Terminal<B>, desktop: &mut Desktop) -> io::Result<()> {
    terminal
        .draw(|frame| {
            let mut ui = UiFrame::new(frame);
            desktop.render(&mut ui);
        })
        .map(|_| ())
        .map_err(|err| io::Error::other(err.to_string()))
}
