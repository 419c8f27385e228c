use crossterm::event::KeyCode;

use crate::monitor::MonitorEvent;
use crate::types::{App, AppMode};

/// Handle keyboard input events for all application modes. Returns true when
/// the application should exit.
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match app.mode {
        AppMode::EditingPath => handle_path_editing_keys(app, key),
        AppMode::Dashboard => {
            if app.warning.is_some() {
                handle_warning_keys(app, key)
            } else {
                handle_dashboard_keys(app, key)
            }
        }
    }
}

/// Handle key events on the dashboard
fn handle_dashboard_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Char('e') => app.request_extend(),
        KeyCode::Char('p') => {
            app.mode = AppMode::EditingPath;
            app.path_input = app.current_path.clone();
        }
        _ => {}
    }
    false
}

/// Handle key events while the warning modal is up
fn handle_warning_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Char('e') => app.request_extend(),
        KeyCode::Char('d') | KeyCode::Esc => {
            app.dispatch(MonitorEvent::WarningDismissed);
        }
        _ => {}
    }
    false
}

/// Handle key events in path editing mode
fn handle_path_editing_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(c) => app.path_input.push(c),
        KeyCode::Backspace => {
            app.path_input.pop();
        }
        KeyCode::Esc => {
            app.mode = AppMode::Dashboard;
            app.path_input.clear();
        }
        KeyCode::Enter => {
            let input = app.path_input.clone();
            app.set_current_path(&input);
            app.mode = AppMode::Dashboard;
            app.path_input.clear();
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::Phase;
    use crate::session::SessionStatus;
    use std::time::Duration;

    fn app() -> App {
        App::new(
            "http://localhost:8080".to_string(),
            true,
            Duration::from_secs(120),
            "/".to_string(),
        )
    }

    fn warn(app: &mut App) {
        app.dispatch(MonitorEvent::StatusChecked(SessionStatus {
            expiring: true,
            remaining_minutes: Some(5),
        }));
    }

    #[test]
    fn test_q_quits_everywhere() {
        let mut app = app();
        assert!(handle_key_event(&mut app, KeyCode::Char('q')));

        warn(&mut app);
        assert!(handle_key_event(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_extend_reachable_from_dashboard_and_warning() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Char('e'));
        assert!(app.extend_requested);

        app.extend_requested = false;
        warn(&mut app);
        handle_key_event(&mut app, KeyCode::Char('e'));
        assert!(app.extend_requested);
    }

    #[test]
    fn test_dismiss_hides_modal_but_keeps_episode() {
        let mut app = app();
        warn(&mut app);
        assert!(app.warning.is_some());

        assert!(!handle_key_event(&mut app, KeyCode::Char('d')));
        assert!(app.warning.is_none());
        assert_eq!(app.monitor.phase(), Phase::WarningShown);
    }

    #[test]
    fn test_path_editing_commit() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Char('p'));
        assert_eq!(app.mode, AppMode::EditingPath);

        app.path_input.clear();
        for c in "books/edit/3".chars() {
            handle_key_event(&mut app, KeyCode::Char(c));
        }
        handle_key_event(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, AppMode::Dashboard);
        assert_eq!(app.current_path, "/books/edit/3");
        assert!(app.path_input.is_empty());
    }

    #[test]
    fn test_path_editing_cancel_keeps_previous_path() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Char('p'));
        handle_key_event(&mut app, KeyCode::Char('x'));
        handle_key_event(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, AppMode::Dashboard);
        assert_eq!(app.current_path, "/");
    }
}
