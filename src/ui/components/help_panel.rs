//! Help and logs overlays

use crate::constants::DIALOG_TITLE_LOGS;
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Palette;
use ratatui::{
    layout::Alignment,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const HELP_CONTENT: &str = r"
TASK LIST
---------
j/k, ↓/↑    Move selection
Space/Enter Complete or undo selected task
e           Edit selected task
d/Delete    Delete selected task

FORM
----
a/i/Tab     Focus the title input
Enter       Add task (or update while editing)
Esc         Cancel edit / back to list

VIEW
----
1/2/3       Show all / completed / pending
f           Next filter
t           Toggle light/dark mode
r           Refresh from server
L           Show logs

GENERAL
-------
?           Toggle this help
q, Ctrl+C   Quit
";

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    pub fn render(f: &mut Frame, palette: &Palette) {
        let (help_width, help_height) = LayoutManager::help_panel_dimensions(f.area().width, f.area().height);
        let help_area = LayoutManager::centered_rect(help_width, help_height, f.area());
        f.render_widget(Clear, help_area);

        let help = Paragraph::new(HELP_CONTENT)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Help - Press '?' or 'Esc' to close ")
                    .title_alignment(Alignment::Center)
                    .border_style(palette.accent()),
            )
            .style(palette.base())
            .wrap(Wrap { trim: false });
        f.render_widget(help, help_area);
    }
}

/// In-memory log viewer, with requests still in flight listed first
pub struct LogsPanel;

impl LogsPanel {
    pub fn content(running: &[String], logs: &[String]) -> String {
        let mut content = String::new();
        if !running.is_empty() {
            content.push_str("In flight:\n");
            for description in running {
                content.push_str("  ");
                content.push_str(description);
                content.push('\n');
            }
            content.push('\n');
        }

        if logs.is_empty() {
            content.push_str("No log entries yet.");
        } else {
            content.push_str(&logs.join("\n"));
        }
        content
    }

    pub fn render(f: &mut Frame, running: &[String], logs: &[String], palette: &Palette) {
        let area = LayoutManager::centered_rect(90, 80, f.area());
        f.render_widget(Clear, area);

        let content = Self::content(running, logs);

        let panel = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(DIALOG_TITLE_LOGS)
                    .border_style(palette.accent()),
            )
            .style(palette.base())
            .wrap(Wrap { trim: false });
        f.render_widget(panel, area);
    }
}
