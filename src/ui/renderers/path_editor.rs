use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use crate::nav::{self, NAV_LINKS};
use crate::types::App;

/// Render the page-path editing view
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints(
            [
                Constraint::Length(3), // Title
                Constraint::Length(3), // Path input
                Constraint::Min(0),    // Live preview
            ]
            .as_ref(),
        )
        .split(f.size());

    render_title(f, chunks[0]);
    render_path_input(f, app, chunks[1]);
    render_cursor(f, app, &chunks);
    render_preview(f, app, chunks[2]);
}

/// Render the title section
fn render_title(f: &mut Frame, area: ratatui::layout::Rect) {
    let title = Paragraph::new("Set the page path used for the navigation preview").block(
        Block::default()
            .borders(Borders::ALL)
            .title("Page Path (Esc to cancel, Enter to apply)"),
    );
    f.render_widget(title, area);
}

/// Render the path input field
fn render_path_input(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let path_input = Paragraph::new(app.path_input.as_str())
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Path (e.g. /books/edit/3)"),
        );
    f.render_widget(path_input, area);
}

/// Set cursor position at the end of the input
fn render_cursor(f: &mut Frame, app: &App, chunks: &[ratatui::layout::Rect]) {
    f.set_cursor(chunks[1].x + app.path_input.len() as u16 + 1, chunks[1].y + 1);
}

/// Render which navigation link the entered path would activate
fn render_preview(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let normalized = nav::normalize_path(&app.path_input);
    let active = nav::active_link(&normalized).map(|link| link.href);

    let link_lines: Vec<Line> = NAV_LINKS
        .iter()
        .map(|link| {
            if Some(link.href) == active {
                Line::from(Span::styled(
                    format!("> {} ({})", link.label, link.href),
                    Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan),
                ))
            } else {
                Line::from(format!("  {} ({})", link.label, link.href))
            }
        })
        .collect();

    let preview = Paragraph::new(Text::from(link_lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Link highlighted for this path"),
    );
    f.render_widget(preview, area);
}
