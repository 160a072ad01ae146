//! Completion estimation and planned-calendar outputs.
//!
//! These are the aggregate-mode results: no item detail, only a
//! completion date derived from total duration, and the blank grid of
//! upcoming study days.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::config::weekday_label;

/// Result of aggregate-only completion estimation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionEstimate {
    /// The study date on which cumulative sessions cross the threshold.
    pub completion_date: NaiveDate,
    /// Calendar days from the start date through `completion_date`,
    /// inclusive of both endpoints.
    pub total_elapsed_days: i64,
    /// Number of study sessions consumed to cross the threshold
    /// (the real-valued session count rounded up).
    pub sessions_needed: u32,
}

/// One entry of the blank study-day grid: an eligible date carrying the
/// full daily budget, with no items assigned yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannedDay {
    /// The study date.
    pub date: NaiveDate,
    /// Budgeted minutes for this day.
    pub duration_minutes: f64,
}

impl PlannedDay {
    /// Creates a planned day.
    pub fn new(date: NaiveDate, duration_minutes: f64) -> Self {
        Self {
            date,
            duration_minutes,
        }
    }

    /// The English weekday name of this day's date.
    pub fn weekday_label(&self) -> &'static str {
        weekday_label(self.date)
    }
}
