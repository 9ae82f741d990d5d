//! Threshold badges, evaluated only at commit time.
//!
//! Badges are an append-only log: the same label may recur across days and
//! is never deduplicated. A single committed day can earn several badges.

use crate::day::DayState;

/// One badge rule: a predicate over the committed day and the label it
/// appends when the predicate holds.
#[derive(Clone, Copy)]
pub struct BadgeRule {
    pub label: &'static str,
    pub rule: fn(&DayState) -> bool,
}

fn step_master(day: &DayState) -> bool {
    day.steps >= 10_000
}

fn hydration_hero(day: &DayState) -> bool {
    day.water_ml >= 2_000
}

fn screen_smart(day: &DayState) -> bool {
    day.screen_min <= 60
}

fn well_rested(day: &DayState) -> bool {
    day.sleep_hours >= 8.0
}

/// Fixed rule catalog.
pub const RULES: [BadgeRule; 4] = [
    BadgeRule {
        label: "Step Master",
        rule: step_master,
    },
    BadgeRule {
        label: "Hydration Hero",
        rule: hydration_hero,
    },
    BadgeRule {
        label: "Screen Smart",
        rule: screen_smart,
    },
    BadgeRule {
        label: "Well Rested",
        rule: well_rested,
    },
];

/// Labels earned by `day`, in catalog order.
pub fn earned(day: &DayState) -> Vec<String> {
    RULES
        .iter()
        .filter(|r| (r.rule)(day))
        .map(|r| r.label.to_string())
        .collect()
}
