use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::Event;

use super::InputDriver;

/// Replays a fixed list of events. Once the script runs dry, `poll`
/// reports end of input so a loop driven by it terminates.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    events: VecDeque<Event>,
    mouse_capture: Option<bool>,
}

impl ScriptedDriver {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            mouse_capture: None,
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }

    /// Last value passed to `set_mouse_capture`, if any.
    pub fn mouse_capture(&self) -> Option<bool> {
        self.mouse_capture
    }
}

impl InputDriver for ScriptedDriver {
    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        if self.events.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "scripted input exhausted",
            ));
        }
        Ok(true)
    }

    fn read(&mut self) -> io::Result<Event> {
        self.events.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "scripted input exhausted")
        })
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        self.mouse_capture = Some(enabled);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_in_order_then_reports_eof() {
        let mut d = ScriptedDriver::new([Event::Resize(1, 1), Event::Resize(2, 2)]);
        assert!(d.poll(Duration::ZERO).unwrap());
        assert_eq!(d.read().unwrap(), Event::Resize(1, 1));
        assert_eq!(d.remaining(), 1);
        assert_eq!(d.read().unwrap(), Event::Resize(2, 2));
        let err = d.poll(Duration::ZERO).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
