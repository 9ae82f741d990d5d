//! Focus-session stopwatch.
//!
//! A two-state machine driven entirely by wall-clock deltas supplied by
//! the caller -- no internal thread, no tick side effects.
//!
//! ```text
//! Idle -> Running -> Idle
//! ```
//!
//! While running, elapsed minutes are a pure display query. Stopping
//! always records a session of at least one minute; there is no cancel
//! path. Invalid transitions (start while running, stop while idle) are
//! no-ops so duplicate UI events are harmless.

use serde::{Deserialize, Serialize};

use crate::day::FocusSession;

/// Bonus divisor: one point per ten full focus minutes.
pub const BONUS_MINUTES_PER_POINT: u32 = 10;

/// Minimum recorded session length in minutes.
pub const MIN_SESSION_MIN: u32 = 1;

/// Single-session stopwatch state. The running start timestamp is part of
/// persisted engine state, so an in-flight session survives a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum FocusTimer {
    #[default]
    Idle,
    Running { started_at_ms: i64 },
}

impl FocusTimer {
    pub fn is_running(&self) -> bool {
        matches!(self, FocusTimer::Running { .. })
    }

    /// Idle -> Running. Returns false (no-op) when already running.
    pub fn start(&mut self, now_ms: i64) -> bool {
        match self {
            FocusTimer::Idle => {
                *self = FocusTimer::Running {
                    started_at_ms: now_ms,
                };
                true
            }
            FocusTimer::Running { .. } => false,
        }
    }

    /// Whole minutes elapsed so far, or None when idle. Display only;
    /// nothing is recorded until [`stop`](Self::stop).
    pub fn elapsed_min(&self, now_ms: i64) -> Option<u32> {
        match self {
            FocusTimer::Idle => None,
            FocusTimer::Running { started_at_ms } => {
                Some((now_ms.saturating_sub(*started_at_ms).max(0) / 60_000) as u32)
            }
        }
    }

    /// Running -> Idle, yielding the recorded session. Sessions shorter
    /// than a minute round up to [`MIN_SESSION_MIN`]. No-op when idle.
    pub fn stop(&mut self, now_ms: i64) -> Option<FocusSession> {
        match *self {
            FocusTimer::Idle => None,
            FocusTimer::Running { started_at_ms } => {
                let elapsed = self.elapsed_min(now_ms).unwrap_or(0);
                *self = FocusTimer::Idle;
                Some(FocusSession {
                    started_at_ms,
                    minutes: elapsed.max(MIN_SESSION_MIN),
                })
            }
        }
    }
}

/// Bonus points for a session: one per ten full minutes, remainder dropped.
pub fn session_bonus(minutes: u32) -> u32 {
    minutes / BONUS_MINUTES_PER_POINT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_stop_records_floor_minutes() {
        let mut timer = FocusTimer::default();
        assert!(timer.start(0));
        assert_eq!(timer.elapsed_min(125_000), Some(2));

        let session = timer.stop(125_000).unwrap();
        assert_eq!(session.minutes, 2);
        assert_eq!(session.started_at_ms, 0);
        assert_eq!(session_bonus(session.minutes), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn ten_minutes_earn_one_bonus_point() {
        let mut timer = FocusTimer::default();
        timer.start(0);
        let session = timer.stop(600_000).unwrap();
        assert_eq!(session.minutes, 10);
        assert_eq!(session_bonus(session.minutes), 1);
    }

    #[test]
    fn sub_minute_session_records_one_minute() {
        let mut timer = FocusTimer::default();
        timer.start(0);
        let session = timer.stop(42_000).unwrap();
        assert_eq!(session.minutes, 1);
    }

    #[test]
    fn double_start_is_a_noop() {
        let mut timer = FocusTimer::default();
        assert!(timer.start(0));
        assert!(!timer.start(60_000));
        // Original start timestamp is kept.
        assert_eq!(timer.elapsed_min(120_000), Some(2));
    }

    #[test]
    fn stop_while_idle_is_a_noop() {
        let mut timer = FocusTimer::default();
        assert!(timer.stop(1_000).is_none());
    }

    #[test]
    fn bonus_drops_fractional_remainder() {
        assert_eq!(session_bonus(9), 0);
        assert_eq!(session_bonus(10), 1);
        assert_eq!(session_bonus(19), 1);
        assert_eq!(session_bonus(20), 2);
        assert_eq!(session_bonus(35), 3);
    }

    #[test]
    fn running_state_roundtrips_through_json() {
        let mut timer = FocusTimer::default();
        timer.start(1_700_000_000_000);
        let json = serde_json::to_string(&timer).unwrap();
        let restored: FocusTimer = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, timer);
    }
}
