//! Content hosted inside windows.
//!
//! The window manager only stores an opaque [`ContentId`] and a parameter
//! map per window. The desktop turns those into live views through a
//! [`ContentRegistry`].

pub mod dashboard;
pub mod transaction;

use std::collections::BTreeMap;
use std::fmt;

use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::component_context::ComponentContext;
use crate::error::{Result, ShellError};
use crate::launcher::catalog::TRANSACTIONS;
use crate::theme;
use crate::ui::UiFrame;

pub use dashboard::Dashboard;
pub use transaction::TransactionScreen;

pub const DASHBOARD: &str = "dashboard";

/// Opaque name of a content kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentId(String);

impl ContentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ContentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parameters passed to a content factory, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentParams(BTreeMap<String, String>);

impl ContentParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Requests content can make of its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSignal {
    Close,
    Save,
}

pub trait HostedContent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext);

    fn handle_event(&mut self, _event: &Event, _ctx: &ComponentContext) -> Option<ContentSignal> {
        None
    }
}

pub type ContentFactory = Box<dyn Fn(&ContentParams) -> Box<dyn HostedContent>>;

#[derive(Default)]
pub struct ContentRegistry {
    factories: BTreeMap<ContentId, ContentFactory>,
}

impl fmt::Debug for ContentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentRegistry")
            .field("ids", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dashboard plus a transaction screen for every catalog entry.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(DASHBOARD, |_| Box::new(Dashboard::new()));
        for entry in TRANSACTIONS {
            registry.register(entry.content, move |params| {
                Box::new(TransactionScreen::new(entry.name, params))
            });
        }
        registry
    }

    /// Register `factory` under `id`, replacing any earlier one.
    pub fn register<F>(&mut self, id: impl Into<ContentId>, factory: F)
    where
        F: Fn(&ContentParams) -> Box<dyn HostedContent> + 'static,
    {
        self.factories.insert(id.into(), Box::new(factory));
    }

    pub fn contains(&self, id: &ContentId) -> bool {
        self.factories.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    pub fn instantiate(
        &self,
        id: &ContentId,
        params: &ContentParams,
    ) -> Result<Box<dyn HostedContent>> {
        let factory = self
            .factories
            .get(id)
            .ok_or_else(|| ShellError::UnknownContent(id.clone()))?;
        Ok(factory(params))
    }
}

/// Mounted in place of content nobody registered. The window still works;
/// it just has nothing to show.
#[derive(Debug)]
pub struct UnavailableContent {
    message: String,
}

impl UnavailableContent {
    pub fn new(error: &ShellError) -> Self {
        Self {
            message: error.to_string(),
        }
    }
}

impl HostedContent for UnavailableContent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ComponentContext) {
        let lines = vec![
            Line::styled(self.message.clone(), theme::muted()),
            Line::raw(""),
            Line::styled("Close this window with the × button.", theme::muted()),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }
}
