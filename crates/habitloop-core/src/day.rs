//! The daily activity record.
//!
//! [`DayState`] is the single mutable record of "today". It is replaced
//! wholesale on rollover (preserving only the team name) and archived as an
//! immutable [`DaySnapshot`] when the user commits the day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One completed screen-free focus session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusSession {
    /// Session start, milliseconds since the Unix epoch.
    pub started_at_ms: i64,
    /// Recorded duration. Always at least one minute.
    pub minutes: u32,
}

/// Mutable record of today's progress.
///
/// Exactly one `DayState` is current at a time. `points` only ever grows
/// within a day; points are granted, never retracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayState {
    pub date: NaiveDate,
    #[serde(default)]
    pub steps: u32,
    #[serde(default)]
    pub water_ml: u32,
    #[serde(default)]
    pub screen_min: u32,
    #[serde(default)]
    pub sleep_hours: f64,
    #[serde(default)]
    pub focus_sessions: Vec<FocusSession>,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub team: String,
}

impl DayState {
    /// A zeroed record for `date`. Only the team identity carries over
    /// across days.
    pub fn fresh(date: NaiveDate, team: &str) -> Self {
        Self {
            date,
            steps: 0,
            water_ml: 0,
            screen_min: 0,
            sleep_hours: 0.0,
            focus_sessions: Vec::new(),
            points: 0,
            team: team.to_string(),
        }
    }

    /// Immutable archive snapshot, taken at commit time.
    pub fn snapshot(&self) -> DaySnapshot {
        DaySnapshot {
            steps: self.steps,
            water_ml: self.water_ml,
            screen_min: self.screen_min,
            sleep_hours: self.sleep_hours,
            points: self.points,
        }
    }

    /// Total committed focus minutes recorded today.
    pub fn focus_minutes(&self) -> u32 {
        self.focus_sessions.iter().map(|s| s.minutes).sum()
    }
}

/// History record for one committed day. Never mutated after insertion;
/// a later commit for the same date overwrites the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DaySnapshot {
    pub steps: u32,
    pub water_ml: u32,
    pub screen_min: u32,
    pub sleep_hours: f64,
    pub points: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fresh_day_is_zeroed_except_team() {
        let day = DayState::fresh(date(2024, 5, 10), "Blue");
        assert_eq!(day.steps, 0);
        assert_eq!(day.water_ml, 0);
        assert_eq!(day.screen_min, 0);
        assert_eq!(day.sleep_hours, 0.0);
        assert!(day.focus_sessions.is_empty());
        assert_eq!(day.points, 0);
        assert_eq!(day.team, "Blue");
    }

    #[test]
    fn snapshot_captures_metrics_and_points() {
        let mut day = DayState::fresh(date(2024, 5, 10), "Blue");
        day.steps = 9000;
        day.water_ml = 1800;
        day.screen_min = 45;
        day.sleep_hours = 7.5;
        day.points = 12;

        let snap = day.snapshot();
        assert_eq!(snap.steps, 9000);
        assert_eq!(snap.water_ml, 1800);
        assert_eq!(snap.screen_min, 45);
        assert_eq!(snap.sleep_hours, 7.5);
        assert_eq!(snap.points, 12);
    }

    #[test]
    fn focus_minutes_sums_sessions() {
        let mut day = DayState::fresh(date(2024, 5, 10), "Blue");
        day.focus_sessions.push(FocusSession {
            started_at_ms: 0,
            minutes: 12,
        });
        day.focus_sessions.push(FocusSession {
            started_at_ms: 900_000,
            minutes: 8,
        });
        assert_eq!(day.focus_minutes(), 20);
    }

    #[test]
    fn missing_fields_deserialize_to_zero() {
        let day: DayState = serde_json::from_str(r#"{"date":"2024-05-10"}"#).unwrap();
        assert_eq!(day.steps, 0);
        assert_eq!(day.points, 0);
        assert!(day.team.is_empty());
    }
}
