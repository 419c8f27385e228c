use std::collections::VecDeque;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::monitor::{Effect, MonitorEvent, SessionMonitor, Severity, WARNING_AUTO_HIDE_SECS};
use crate::session::{SessionError, SessionStatus};

/// How long a toast stays on screen before it is removed, in seconds.
pub const TOAST_VISIBLE_SECS: u64 = 5;

/// Upper bound on queued toasts; the oldest is dropped beyond this.
pub const MAX_TOASTS: usize = 8;

/// Messages sent back to the UI loop by the network tasks.
pub enum NetEvent {
    Status(Result<SessionStatus, SessionError>),
    Extend(Result<(), SessionError>),
}

#[derive(Debug, PartialEq)]
pub enum AppMode {
    Dashboard,
    EditingPath,
}

/// A transient notification in the top-right toast stack.
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub created: Instant,
}

/// The warning modal currently on screen.
pub struct Warning {
    pub minutes: u32,
    pub presented: Instant,
}

/// One-shot status report printed by `--json`.
#[derive(Serialize)]
pub struct StatusReport {
    pub base_url: String,
    pub expiring: bool,
    pub remaining_minutes: Option<u32>,
    pub checked_at: DateTime<Local>,
}

/// TUI application state
pub struct App {
    pub monitor: SessionMonitor,
    pub mode: AppMode,
    pub warning: Option<Warning>,
    pub toasts: VecDeque<Toast>,
    // Nav preview
    pub current_path: String,
    pub path_input: String,
    // Effective configuration
    pub base_url: String,
    pub authenticated: bool,
    pub poll_interval: Duration,
    // Poll bookkeeping
    pub checks_run: u64,
    pub check_failures: u64,
    pub last_check: Option<DateTime<Local>>,
    pub last_check_instant: Option<Instant>,
    // Extend plumbing
    pub extend_requested: bool,
    pub extend_in_flight: bool,
}

impl App {
    pub fn new(
        base_url: String,
        authenticated: bool,
        poll_interval: Duration,
        current_path: String,
    ) -> Self {
        App {
            monitor: SessionMonitor::new(),
            mode: AppMode::Dashboard,
            warning: None,
            toasts: VecDeque::new(),
            current_path,
            path_input: String::new(),
            base_url,
            authenticated,
            poll_interval,
            checks_run: 0,
            check_failures: 0,
            last_check: None,
            last_check_instant: None,
            extend_requested: false,
            extend_in_flight: false,
        }
    }

    /// Run an event through the monitor and apply the resulting effects.
    pub fn dispatch(&mut self, event: MonitorEvent) {
        let effects = self.monitor.handle(event);
        for effect in effects {
            self.apply_effect(effect);
        }
    }

    /// Apply a single monitor effect to the UI state. This is the only place
    /// effects touch widgets, which keeps the monitor itself free of them.
    pub fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ShowWarning { minutes } => {
                if self.warning.is_none() {
                    self.warning = Some(Warning {
                        minutes,
                        presented: Instant::now(),
                    });
                    // Confirm back to the monitor that the surface exists
                    self.dispatch(MonitorEvent::WarningPresented);
                }
            }
            Effect::DismissWarning => {
                self.warning = None;
            }
            Effect::ShowToast { message, severity } => {
                self.push_toast(message, severity);
            }
        }
    }

    pub fn push_toast(&mut self, message: String, severity: Severity) {
        self.toasts.push_back(Toast {
            message,
            severity,
            created: Instant::now(),
        });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
    }

    /// Drop toasts that have been visible long enough.
    pub fn prune_toasts(&mut self) {
        self.toasts
            .retain(|toast| toast.created.elapsed() < Duration::from_secs(TOAST_VISIBLE_SECS));
    }

    /// True when the warning modal has been up past its self-dismiss deadline.
    pub fn warning_timed_out(&self) -> bool {
        self.warning
            .as_ref()
            .map(|warning| {
                warning.presented.elapsed() >= Duration::from_secs(WARNING_AUTO_HIDE_SECS)
            })
            .unwrap_or(false)
    }

    /// Ask for a session extension. Callable from every mode; only one
    /// request is in flight at a time.
    pub fn request_extend(&mut self) {
        if !self.authenticated {
            self.push_toast(
                "No session cookie configured; nothing to extend.".to_string(),
                Severity::Info,
            );
        } else if !self.extend_in_flight {
            self.extend_requested = true;
        }
    }

    /// Replace the nav preview path, normalizing it to a leading slash.
    pub fn set_current_path(&mut self, input: &str) {
        self.current_path = crate::nav::normalize_path(input);
    }

    /// Time until the next scheduled status check, for display only.
    pub fn next_check_in(&self) -> Option<Duration> {
        let started = self.last_check_instant?;
        Some(self.poll_interval.saturating_sub(started.elapsed()))
    }

    pub fn phase_label(&self) -> &'static str {
        use crate::monitor::Phase;
        match self.monitor.phase() {
            Phase::Idle => "Active",
            Phase::ExpiringDetected => "Expiring soon",
            Phase::WarningShown => "Warning shown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::Phase;

    fn app() -> App {
        App::new(
            "http://localhost:8080".to_string(),
            true,
            Duration::from_secs(120),
            "/".to_string(),
        )
    }

    fn expiring(minutes: u32) -> MonitorEvent {
        MonitorEvent::StatusChecked(SessionStatus {
            expiring: true,
            remaining_minutes: Some(minutes),
        })
    }

    mod effects {
        use super::*;

        #[test]
        fn test_show_warning_creates_modal_and_confirms() {
            let mut app = app();
            app.dispatch(expiring(5));

            let warning = app.warning.as_ref().expect("modal should exist");
            assert_eq!(warning.minutes, 5);
            // The presented confirmation ran, so the episode is fully open
            assert_eq!(app.monitor.phase(), Phase::WarningShown);
        }

        #[test]
        fn test_extend_success_clears_modal_and_flags() {
            let mut app = app();
            app.dispatch(expiring(5));
            assert!(app.warning.is_some());

            app.dispatch(MonitorEvent::ExtendSucceeded);
            assert!(app.warning.is_none());
            assert!(!app.monitor.expiring_soon());
            assert!(!app.monitor.warning_shown());
            assert!(app.toasts.iter().any(|t| t.severity == Severity::Success));
        }

        #[test]
        fn test_extend_failure_keeps_modal_and_flags() {
            let mut app = app();
            app.dispatch(expiring(5));

            app.dispatch(MonitorEvent::ExtendFailed);
            assert!(app.warning.is_some());
            assert_eq!(app.monitor.phase(), Phase::WarningShown);
            assert!(app.toasts.iter().any(|t| t.severity == Severity::Danger));
        }

        #[test]
        fn test_repeated_polls_do_not_stack_modals() {
            let mut app = app();
            app.dispatch(expiring(5));
            let first = app.warning.as_ref().unwrap().minutes;

            app.dispatch(expiring(3));
            assert_eq!(app.warning.as_ref().unwrap().minutes, first);
        }
    }

    mod toasts {
        use super::*;

        #[test]
        fn test_prune_removes_expired_toasts() {
            let mut app = app();
            app.toasts.push_back(Toast {
                message: "old".to_string(),
                severity: Severity::Info,
                created: Instant::now() - Duration::from_secs(TOAST_VISIBLE_SECS + 1),
            });
            app.push_toast("fresh".to_string(), Severity::Info);

            app.prune_toasts();
            assert_eq!(app.toasts.len(), 1);
            assert_eq!(app.toasts[0].message, "fresh");
        }

        #[test]
        fn test_toast_queue_is_bounded() {
            let mut app = app();
            for i in 0..MAX_TOASTS + 3 {
                app.push_toast(format!("toast {}", i), Severity::Info);
            }
            assert_eq!(app.toasts.len(), MAX_TOASTS);
            assert_eq!(app.toasts[0].message, "toast 3");
        }
    }

    mod warning_deadline {
        use super::*;

        #[test]
        fn test_fresh_warning_has_not_timed_out() {
            let mut app = app();
            app.dispatch(expiring(5));
            assert!(!app.warning_timed_out());
        }

        #[test]
        fn test_warning_times_out_after_deadline() {
            let mut app = app();
            app.dispatch(expiring(5));
            app.warning.as_mut().unwrap().presented =
                Instant::now() - Duration::from_secs(WARNING_AUTO_HIDE_SECS + 1);
            assert!(app.warning_timed_out());
        }

        #[test]
        fn test_no_warning_never_times_out() {
            let app = app();
            assert!(!app.warning_timed_out());
        }
    }

    mod extend_requests {
        use super::*;

        #[test]
        fn test_unauthenticated_extend_only_toasts() {
            let mut app = App::new(
                "http://localhost:8080".to_string(),
                false,
                Duration::from_secs(120),
                "/".to_string(),
            );
            app.request_extend();
            assert!(!app.extend_requested);
            assert!(app.toasts.iter().any(|t| t.severity == Severity::Info));
        }

        #[test]
        fn test_extend_not_requeued_while_in_flight() {
            let mut app = app();
            app.extend_in_flight = true;
            app.request_extend();
            assert!(!app.extend_requested);
        }
    }

    mod path_normalization {
        use super::*;

        #[test]
        fn test_empty_input_becomes_root() {
            let mut app = app();
            app.set_current_path("   ");
            assert_eq!(app.current_path, "/");
        }

        #[test]
        fn test_missing_slash_is_prepended() {
            let mut app = app();
            app.set_current_path("books/edit/3");
            assert_eq!(app.current_path, "/books/edit/3");
        }

        #[test]
        fn test_well_formed_path_is_kept() {
            let mut app = app();
            app.set_current_path("/cart");
            assert_eq!(app.current_path, "/cart");
        }
    }
}
