use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::monitor::WARNING_AUTO_HIDE_SECS;
use crate::types::App;
use crate::ui::renderers::dashboard;
use crate::ui::utils::centered_rect;

/// Render the dashboard with the session warning modal over it
pub fn render(f: &mut Frame, app: &App) {
    dashboard::render(f, app);

    let Some(warning) = &app.warning else {
        return;
    };

    let area = centered_rect(60, 9, f.size());
    f.render_widget(Clear, area);

    let hides_in = WARNING_AUTO_HIDE_SECS.saturating_sub(warning.presented.elapsed().as_secs());
    let lines = vec![
        Line::from(format!(
            "Your session will expire in {} minutes due to inactivity.",
            warning.minutes
        )),
        Line::from(""),
        Line::from("To continue working, press 'e' to extend your session."),
        Line::from("Press 'd' to dismiss this warning."),
        Line::from(""),
        Line::from(Span::styled(
            format!("Hides by itself in {}s", hides_in),
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let modal = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Black).bg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("⚠ Session Expiring Soon"),
        );
    f.render_widget(modal, area);
}
