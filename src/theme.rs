use ratatui::style::{Color, Modifier, Style};

// Centralized colors for window chrome, the taskbar and the launcher.

pub fn header_focused() -> Style {
    Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn header_normal() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

pub fn border() -> Style {
    Style::default().fg(Color::DarkGray).bg(Color::Reset)
}

pub fn border_focused() -> Style {
    Style::default().fg(Color::Blue).bg(Color::Reset)
}

pub fn close_button() -> Style {
    Style::default()
        .bg(Color::Red)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn taskbar() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::Black)
}

pub fn taskbar_active() -> Style {
    Style::default().bg(Color::Gray).fg(Color::Black)
}

pub fn taskbar_minimized() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .fg(Color::Black)
        .add_modifier(Modifier::ITALIC | Modifier::DIM)
}

pub fn launcher_button() -> Style {
    Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn category_title() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn selected() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}
