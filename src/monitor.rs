//! Session expiration episode tracking.
//!
//! An episode runs from the first "expiring soon" poll result to its
//! resolution (successful extend or user activity). The monitor owns only the
//! episode phase; everything it wants done to the UI comes back as effects,
//! so transitions stay deterministic and free of I/O, clocks, and widgets.

use crate::session::SessionStatus;

/// Cadence of the recurring status check, in seconds.
pub const POLL_INTERVAL_SECS: u64 = 120;

/// How long the warning modal stays up before hiding itself, in seconds.
pub const WARNING_AUTO_HIDE_SECS: u64 = 10;

/// Where the current expiration episode stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No expiration signalled. Initial and terminal state of every episode.
    Idle,
    /// The server reported imminent expiration; the warning surface has been
    /// requested but not confirmed on screen yet.
    ExpiringDetected,
    /// The warning surface was created for this episode. Stays set even after
    /// the surface auto-hides, so repeated polls cannot re-warn.
    WarningShown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
    Info,
}

/// Everything the monitor reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorEvent {
    StatusChecked(SessionStatus),
    StatusCheckFailed,
    WarningPresented,
    WarningTimedOut,
    WarningDismissed,
    ExtendSucceeded,
    ExtendFailed,
    UserActivity,
}

/// UI reactions requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowWarning { minutes: u32 },
    DismissWarning,
    ShowToast { message: String, severity: Severity },
}

pub struct SessionMonitor {
    phase: Phase,
}

impl SessionMonitor {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once the server has signalled imminent expiration for the current
    /// episode.
    pub fn expiring_soon(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// True once the warning surface has been created for the current episode.
    pub fn warning_shown(&self) -> bool {
        self.phase == Phase::WarningShown
    }

    /// Advance the episode and return the UI effects the transition calls for.
    pub fn handle(&mut self, event: MonitorEvent) -> Vec<Effect> {
        match event {
            MonitorEvent::StatusChecked(status) => {
                // Only a fresh episode with a usable minute count triggers the
                // warning; while an episode is open, identical poll results
                // are ignored.
                match (self.phase, status.expiring, status.remaining_minutes) {
                    (Phase::Idle, true, Some(minutes)) => {
                        self.phase = Phase::ExpiringDetected;
                        vec![Effect::ShowWarning { minutes }]
                    }
                    _ => Vec::new(),
                }
            }
            // Poll failures are not expiration; the caller logs them.
            MonitorEvent::StatusCheckFailed => Vec::new(),
            MonitorEvent::WarningPresented => {
                if self.phase == Phase::ExpiringDetected {
                    self.phase = Phase::WarningShown;
                }
                Vec::new()
            }
            // Hiding the surface does not resolve the episode; that takes a
            // successful extend or user activity.
            MonitorEvent::WarningTimedOut | MonitorEvent::WarningDismissed => {
                vec![Effect::DismissWarning]
            }
            MonitorEvent::ExtendSucceeded => {
                self.phase = Phase::Idle;
                vec![
                    Effect::DismissWarning,
                    Effect::ShowToast {
                        message: "Session extended successfully!".to_string(),
                        severity: Severity::Success,
                    },
                ]
            }
            MonitorEvent::ExtendFailed => {
                // Episode left open so a later poll can re-warn once the
                // phase resets.
                vec![Effect::ShowToast {
                    message: "Failed to extend session. Please login again.".to_string(),
                    severity: Severity::Danger,
                }]
            }
            MonitorEvent::UserActivity => {
                if self.phase != Phase::Idle {
                    self.phase = Phase::Idle;
                }
                Vec::new()
            }
        }
    }
}

impl Default for SessionMonitor {
    fn default() -> Self {
        Self::new()
    }
}
