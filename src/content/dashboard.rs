use indoc::formatdoc;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::HostedContent;
use crate::component_context::ComponentContext;
use crate::constants::{APP_NAME, APP_VERSION};
use crate::log_buffer::recent_lines;
use crate::theme;
use crate::ui::UiFrame;

const USER_NAME: &str = "Demo User";
const USER_ROLE: &str = "Administrator";

/// Landing view opened at startup: a greeting, the shortcut cheat sheet and
/// the tail of the activity log.
#[derive(Debug, Default)]
pub struct Dashboard;

impl Dashboard {
    pub fn new() -> Self {
        Self
    }

    fn welcome(&self) -> String {
        formatdoc! {"
            Welcome to {APP_NAME} {APP_VERSION}
            Signed in as {USER_NAME} ({USER_ROLE})

            Alt+N        open the transaction launcher
            Alt+. Alt+,  cycle between windows
            Alt+M        minimize    Alt+X  maximize/restore
            Alt+R        restore the last minimized window
            Alt+W        close the focused window
            Ctrl+Q       quit
        "}
    }
}

impl HostedContent for Dashboard {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ComponentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let welcome = self.welcome();
        let welcome_height = u16::try_from(welcome.lines().count()).unwrap_or(u16::MAX);
        let [top, bottom] =
            Layout::vertical([Constraint::Length(welcome_height), Constraint::Min(0)])
                .areas(area);
        frame.render_widget(Paragraph::new(welcome).wrap(Wrap { trim: false }), top);

        if bottom.height < 3 {
            return;
        }
        let rows = usize::from(bottom.height.saturating_sub(2));
        let lines: Vec<Line> = recent_lines(rows).into_iter().map(Line::raw).collect();
        let block = Block::default()
            .borders(Borders::TOP)
            .title("Recent activity")
            .border_style(theme::muted());
        frame.render_widget(Paragraph::new(Text::from(lines)).block(block), bottom);
    }
}
