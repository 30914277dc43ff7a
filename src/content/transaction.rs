use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::{ContentParams, ContentSignal, HostedContent};
use crate::component_context::ComponentContext;
use crate::theme;
use crate::ui::UiFrame;

/// Stand-in for a transaction form. It records saves and can ask for its
/// window to close, which is all the shell needs from real screens.
#[derive(Debug, Clone)]
pub struct TransactionScreen {
    name: String,
    mode: String,
    saves: u32,
}

impl TransactionScreen {
    pub fn new(name: impl Into<String>, params: &ContentParams) -> Self {
        Self {
            name: name.into(),
            mode: params.get("mode").unwrap_or("list").to_string(),
            saves: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl HostedContent for TransactionScreen {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        let hint_style = if ctx.focused() {
            theme::category_title()
        } else {
            theme::muted()
        };
        let lines = vec![
            Line::raw(format!("{} ({} view)", self.name, self.mode)),
            Line::raw(""),
            Line::raw(format!("Saved {} time(s)", self.saves)),
            Line::raw(""),
            Line::styled("Ctrl+S save   Ctrl+W close", hint_style),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> Option<ContentSignal> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind != KeyEventKind::Press || !key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }
        match key.code {
            KeyCode::Char('s') => {
                self.saves += 1;
                Some(ContentSignal::Save)
            }
            KeyCode::Char('w') => Some(ContentSignal::Close),
            _ => None,
        }
    }
}
