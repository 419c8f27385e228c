use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::monitor::Phase;
use crate::nav::{self, NAV_LINKS};
use crate::session::STATUS_ENDPOINT;
use crate::types::App;
use crate::ui::utils::format_countdown;

/// Render the dashboard view
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Title
                Constraint::Length(3), // Navigation preview
                Constraint::Min(0),    // Session panel
                Constraint::Length(3), // Footer
            ]
            .as_ref(),
        )
        .split(f.size());

    render_title(f, app, chunks[0]);
    render_nav_bar(f, app, chunks[1]);
    render_session_panel(f, app, chunks[2]);
    render_footer(f, chunks[3]);
}

/// Render the title section
fn render_title(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let title = Paragraph::new(format!("Watching {}", app.base_url))
        .block(Block::default().borders(Borders::ALL).title("Sessionwatch"));
    f.render_widget(title, area);
}

/// Render the navbar preview with the active link highlighted
fn render_nav_bar(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let active = nav::active_link(&app.current_path).map(|link| link.href);

    let mut spans: Vec<Span> = Vec::new();
    for (i, link) in NAV_LINKS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        if Some(link.href) == active {
            spans.push(Span::styled(
                link.label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            spans.push(Span::raw(link.label));
        }
    }

    let nav_bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Navigation ({})", app.current_path)),
    );
    f.render_widget(nav_bar, area);
}

/// Render the session status panel
fn render_session_panel(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let (state_text, state_style) = if !app.authenticated {
        (
            "Not authenticated".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        let style = match app.monitor.phase() {
            Phase::Idle => Style::default().fg(Color::Green),
            Phase::ExpiringDetected | Phase::WarningShown => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        };
        (app.phase_label().to_string(), style)
    };

    let last_check = app
        .last_check
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    let next_check = if !app.authenticated {
        "-".to_string()
    } else {
        match app.next_check_in() {
            Some(remaining) => format_countdown(remaining),
            None => "due".to_string(),
        }
    };

    let rows = vec![
        Row::new(vec![
            Cell::from("Session"),
            Cell::from(state_text).style(state_style),
        ]),
        Row::new(vec![
            Cell::from("Status endpoint"),
            Cell::from(STATUS_ENDPOINT),
        ]),
        Row::new(vec![
            Cell::from("Checks run"),
            Cell::from(format!(
                "{} ({} failed)",
                app.checks_run, app.check_failures
            )),
        ]),
        Row::new(vec![Cell::from("Last check"), Cell::from(last_check)]),
        Row::new(vec![Cell::from("Next check in"), Cell::from(next_check)]),
        Row::new(vec![
            Cell::from("Extend request"),
            Cell::from(if app.extend_in_flight {
                "in flight"
            } else {
                "idle"
            }),
        ]),
    ];

    let table = Table::new(
        rows,
        [Constraint::Percentage(30), Constraint::Percentage(70)],
    )
    .block(Block::default().borders(Borders::ALL).title("Session"));
    f.render_widget(table, area);
}

/// Render the footer
fn render_footer(f: &mut Frame, area: ratatui::layout::Rect) {
    let footer = Paragraph::new("q: quit | e: extend session | p: set page path")
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
