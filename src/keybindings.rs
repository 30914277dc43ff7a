use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    // Launcher
    ToggleLauncher,
    CloseLauncher,
    LaunchSelected,
    MenuUp,
    MenuDown,
    // Focused window
    FocusNext,
    FocusPrev,
    RestoreMinimized,
    MinimizeWindow,
    ToggleMaximize,
    CloseWindow,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Quit => "Quit",
            Action::ToggleLauncher => "Toggle transaction launcher",
            Action::CloseLauncher => "Close launcher",
            Action::LaunchSelected => "Launch selected transaction",
            Action::MenuUp => "Menu up",
            Action::MenuDown => "Menu down",
            Action::FocusNext => "Focus next window",
            Action::FocusPrev => "Focus previous window",
            Action::RestoreMinimized => "Restore last minimized window",
            Action::MinimizeWindow => "Minimize window",
            Action::ToggleMaximize => "Maximize / restore window",
            Action::CloseWindow => "Close window",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.mods
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "BackTab".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Action::*;
        let alt = KeyModifiers::ALT;
        let none = KeyModifiers::NONE;
        let mut kb = Self::empty();
        kb.add(
            Quit,
            KeyCombo::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        kb.add(ToggleLauncher, KeyCombo::new(KeyCode::Char('n'), alt));
        kb.add(CloseLauncher, KeyCombo::new(KeyCode::Esc, none));
        kb.add(LaunchSelected, KeyCombo::new(KeyCode::Enter, none));
        kb.add(MenuUp, KeyCombo::new(KeyCode::Up, none));
        kb.add(MenuDown, KeyCombo::new(KeyCode::Down, none));
        kb.add(FocusNext, KeyCombo::new(KeyCode::Char('.'), alt));
        kb.add(FocusPrev, KeyCombo::new(KeyCode::Char(','), alt));
        kb.add(RestoreMinimized, KeyCombo::new(KeyCode::Char('r'), alt));
        kb.add(MinimizeWindow, KeyCombo::new(KeyCode::Char('m'), alt));
        kb.add(ToggleMaximize, KeyCombo::new(KeyCode::Char('x'), alt));
        kb.add(CloseWindow, KeyCombo::new(KeyCode::Char('w'), alt));
        kb
    }
}

impl KeyBindings {
    /// Bindings with nothing mapped.
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        self.map
            .get(&action)
            .is_some_and(|list| list.iter().any(|c| c.matches(key)))
    }

    /// Return the display strings for all combos mapped to `action`.
    pub fn combos_for(&self, action: Action) -> Vec<String> {
        self.map
            .get(&action)
            .map(|list| list.iter().map(|c| c.display()).collect())
            .unwrap_or_default()
    }

    /// Display string of the first combo for `action`, or an empty string.
    pub fn hint(&self, action: Action) -> String {
        self.combos_for(action).into_iter().next().unwrap_or_default()
    }
}
