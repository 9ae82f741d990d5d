//! User-configured daily targets and their evaluation.
//!
//! The comparison is deliberately asymmetric: screen time is an upper
//! bound, everything else a lower bound. All bounds are inclusive.

use serde::{Deserialize, Serialize};

use crate::day::DayState;

/// Daily targets. One active instance process-wide, edited only explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSet {
    #[serde(default = "default_steps")]
    pub steps: u32,
    #[serde(default = "default_water_ml")]
    pub water_ml: u32,
    #[serde(default = "default_screen_limit_min")]
    pub screen_limit_min: u32,
    #[serde(default = "default_sleep_hours")]
    pub sleep_hours: f64,
}

fn default_steps() -> u32 {
    8000
}
fn default_water_ml() -> u32 {
    1500
}
fn default_screen_limit_min() -> u32 {
    120
}
fn default_sleep_hours() -> f64 {
    8.0
}

impl Default for GoalSet {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            water_ml: default_water_ml(),
            screen_limit_min: default_screen_limit_min(),
            sleep_hours: default_sleep_hours(),
        }
    }
}

impl GoalSet {
    /// True when every goal is met: steps, water and sleep at or above
    /// target, screen time at or below the limit.
    pub fn all_met(&self, day: &DayState) -> bool {
        day.steps >= self.steps
            && day.water_ml >= self.water_ml
            && day.sleep_hours >= self.sleep_hours
            && day.screen_min <= self.screen_limit_min
    }

    /// Per-metric completion percentages for display, clamped to 0..=100.
    ///
    /// Screen time reports consumption of the limit, so 100 means the
    /// budget is used up, not that the goal is met.
    pub fn progress(&self, day: &DayState) -> GoalProgress {
        GoalProgress {
            steps_pct: pct(day.steps as f64, self.steps as f64),
            water_pct: pct(day.water_ml as f64, self.water_ml as f64),
            screen_pct: pct(day.screen_min as f64, self.screen_limit_min as f64),
            sleep_pct: pct(day.sleep_hours, self.sleep_hours),
        }
    }
}

fn pct(value: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (value / target * 100.0).clamp(0.0, 100.0)
}

/// Derived display value, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub steps_pct: f64,
    pub water_pct: f64,
    pub screen_pct: f64,
    pub sleep_pct: f64,
}
