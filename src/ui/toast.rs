use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::monitor::Severity;
use crate::types::App;

const TOAST_WIDTH: u16 = 42;
const TOAST_HEIGHT: u16 = 3;

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Danger => Color::Red,
        Severity::Info => Color::Cyan,
    }
}

/// Render the toast stack in the top-right corner, newest at the bottom
pub fn render(f: &mut Frame, app: &App) {
    let area = f.size();
    if area.width < 4 {
        return;
    }

    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    let x = area.width.saturating_sub(width + 1);
    let mut y = 1;

    for toast in &app.toasts {
        if y + TOAST_HEIGHT > area.height {
            break;
        }
        let rect = Rect {
            x,
            y,
            width,
            height: TOAST_HEIGHT,
        };
        f.render_widget(Clear, rect);
        let body = Paragraph::new(toast.message.as_str())
            .wrap(Wrap { trim: true })
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(severity_color(toast.severity)),
            )
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(body, rect);
        y += TOAST_HEIGHT;
    }
}
