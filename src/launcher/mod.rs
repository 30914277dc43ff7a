//! Searchable transaction launcher.
//!
//! A modal list of [`catalog::TRANSACTIONS`] grouped by category. Launching
//! an entry opens a window through the [`WindowManager`] and hides the
//! launcher again.

pub mod catalog;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::content::ContentParams;
use crate::keybindings::{Action, KeyBindings};
use crate::theme;
use crate::ui::{UiFrame, rect_contains};
use crate::window::{WindowId, WindowManager, WindowOptions};
use catalog::{CATEGORIES, TRANSACTIONS, TransactionType, glyph};

const PREFERRED_WIDTH: u16 = 56;
const PREFERRED_HEIGHT: u16 = 24;
/// Border, search line and the blank line under it.
const HEADER_ROWS: u16 = 3;

/// One rendered line of the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListRow {
    Category(&'static str),
    Entry(usize, &'static TransactionType),
}

#[derive(Debug, Default, Clone)]
pub struct Launcher {
    visible: bool,
    query: String,
    selected: usize,
}

impl Launcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        if self.visible {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn open(&mut self) {
        self.visible = true;
        self.selected = 0;
    }

    /// Hide the launcher. The query is kept until a launch clears it.
    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.selected = 0;
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.selected = 0;
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.selected = 0;
    }

    /// Catalog entries whose name or category contains the query,
    /// ignoring case. An empty query matches everything.
    pub fn filter_transactions(&self) -> Vec<&'static TransactionType> {
        if self.query.is_empty() {
            return TRANSACTIONS.iter().collect();
        }
        let query = self.query.to_lowercase();
        TRANSACTIONS
            .iter()
            .filter(|t| {
                t.name.to_lowercase().contains(&query) || t.category.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Filtered entries bucketed by category in [`CATEGORIES`] order.
    /// Categories with no match are left out.
    pub fn grouped(&self) -> Vec<(&'static str, Vec<&'static TransactionType>)> {
        let filtered = self.filter_transactions();
        CATEGORIES
            .iter()
            .map(|category| {
                let entries: Vec<_> = filtered
                    .iter()
                    .copied()
                    .filter(|t| t.category == *category)
                    .collect();
                (*category, entries)
            })
            .filter(|(_, entries)| !entries.is_empty())
            .collect()
    }

    /// Entries in the order they are listed, which is the order the
    /// selection moves through.
    pub fn selectable(&self) -> Vec<&'static TransactionType> {
        self.grouped()
            .into_iter()
            .flat_map(|(_, entries)| entries)
            .collect()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&'static TransactionType> {
        let entries = self.selectable();
        entries.get(self.selected.min(entries.len().saturating_sub(1))).copied()
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.selectable().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }

    /// Open `transaction` in a new window, then hide the launcher and clear
    /// the search.
    pub fn launch(
        &mut self,
        transaction: &TransactionType,
        windows: &mut WindowManager,
    ) -> WindowId {
        let options = WindowOptions::new(transaction.name, transaction.content)
            .with_params(ContentParams::new().with("mode", "list"));
        let id = windows.create_window(options);
        tracing::debug!(transaction = transaction.id, window = %id, "launched transaction");
        self.visible = false;
        self.query.clear();
        self.selected = 0;
        id
    }

    /// Route a key press. Returns `true` when the launcher consumed it;
    /// while visible it consumes everything.
    pub fn handle_key(
        &mut self,
        key: &KeyEvent,
        bindings: &KeyBindings,
        windows: &mut WindowManager,
    ) -> bool {
        if key.kind != KeyEventKind::Press {
            return self.visible;
        }
        if bindings.matches(Action::ToggleLauncher, key) {
            self.toggle();
            return true;
        }
        if !self.visible {
            return false;
        }
        if bindings.matches(Action::CloseLauncher, key) {
            self.close();
        } else if bindings.matches(Action::LaunchSelected, key) {
            if let Some(entry) = self.selected_entry() {
                self.launch(entry, windows);
            }
        } else if bindings.matches(Action::MenuUp, key) {
            self.move_selection(-1);
        } else if bindings.matches(Action::MenuDown, key) {
            self.move_selection(1);
        } else if key.code == KeyCode::Backspace {
            self.pop_char();
        } else if let KeyCode::Char(c) = key.code
            && (key.modifiers - KeyModifiers::SHIFT).is_empty()
        {
            self.push_char(c);
        }
        true
    }

    pub fn rect_for(&self, area: Rect) -> Rect {
        let width = area.width.min(PREFERRED_WIDTH).max(1);
        let height = area.height.min(PREFERRED_HEIGHT).max(1);
        Rect {
            x: area.x.saturating_add(area.width.saturating_sub(width) / 2),
            y: area.y.saturating_add(area.height.saturating_sub(height) / 2),
            width,
            height,
        }
    }

    fn rows(&self) -> Vec<ListRow> {
        let mut rows = Vec::new();
        let mut index = 0;
        for (category, entries) in self.grouped() {
            rows.push(ListRow::Category(category));
            for entry in entries {
                rows.push(ListRow::Entry(index, entry));
                index += 1;
            }
        }
        rows
    }

    fn list_area(rect: Rect) -> Rect {
        Rect {
            x: rect.x.saturating_add(1),
            y: rect.y.saturating_add(HEADER_ROWS),
            width: rect.width.saturating_sub(2),
            height: rect.height.saturating_sub(HEADER_ROWS + 1),
        }
    }

    /// First visible row so that the selection stays on screen.
    fn scroll_offset(&self, rows: &[ListRow], visible: usize) -> usize {
        let selected_row = rows
            .iter()
            .position(|row| matches!(row, ListRow::Entry(i, _) if *i == self.selected))
            .unwrap_or(0);
        selected_row.saturating_sub(visible.saturating_sub(1))
    }

    /// Catalog entry drawn at (`column`, `row`) when rendered into `area`.
    pub fn entry_at(&self, area: Rect, column: u16, row: u16) -> Option<&'static TransactionType> {
        let list = Self::list_area(self.rect_for(area));
        if !rect_contains(list, column, row) {
            return None;
        }
        let rows = self.rows();
        let offset = self.scroll_offset(&rows, usize::from(list.height));
        match rows.get(offset + usize::from(row - list.y)) {
            Some(ListRow::Entry(_, entry)) => Some(*entry),
            _ => None,
        }
    }

    pub fn contains(&self, area: Rect, column: u16, row: u16) -> bool {
        rect_contains(self.rect_for(area), column, row)
    }

    pub fn render(&self, frame: &mut UiFrame<'_>, area: Rect) {
        if !self.visible || area.width == 0 || area.height == 0 {
            return;
        }
        let rect = self.rect_for(area);
        frame.render_widget(Clear, rect);
        let block = Block::default()
            .title("Launch Transaction")
            .borders(Borders::ALL);
        frame.render_widget(block, rect);

        let search = Rect {
            x: rect.x.saturating_add(1),
            y: rect.y.saturating_add(1),
            width: rect.width.saturating_sub(2),
            height: 1.min(rect.height.saturating_sub(2)),
        };
        let search_line = Line::from(vec![
            Span::styled("Search: ", theme::muted()),
            Span::raw(self.query.clone()),
            Span::styled("_", theme::selected()),
        ]);
        frame.render_widget(Paragraph::new(search_line), search);

        let list = Self::list_area(rect);
        if list.height == 0 {
            return;
        }
        let rows = self.rows();
        if rows.is_empty() {
            let message = format!("No transactions found matching \"{}\"", self.query);
            frame.render_widget(
                Paragraph::new(Line::styled(message, theme::muted())),
                list,
            );
            return;
        }
        let offset = self.scroll_offset(&rows, usize::from(list.height));
        let lines: Vec<Line> = rows
            .iter()
            .skip(offset)
            .take(usize::from(list.height))
            .map(|row| match row {
                ListRow::Category(name) => Line::styled(*name, theme::category_title()),
                ListRow::Entry(index, entry) => {
                    let text = format!("  {} {}", glyph(entry.icon), entry.name);
                    if *index == self.selected {
                        Line::styled(text, theme::selected())
                    } else {
                        Line::raw(text)
                    }
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), list);
    }
}
