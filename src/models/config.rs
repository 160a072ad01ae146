//! Availability pattern and scheduling configuration.
//!
//! Defines which weekdays are study days and how much study time a
//! single day holds.
//!
//! # Weekday Indexing
//! Weekday indices follow the fixed mapping Monday=0 … Sunday=6, and
//! weekday labels are derived from that mapping. This is also the serde
//! wire form of [`StudyWeekdays`]: an ascending list of indices.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// English weekday names, indexed Monday=0 … Sunday=6.
pub const WEEKDAY_LABELS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Returns the English weekday name for a date.
pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAY_LABELS[date.weekday().num_days_from_monday() as usize]
}

/// The set of weekdays designated as study days.
///
/// Stored as a 7-bit mask over the Monday=0 … Sunday=6 index mapping;
/// duplicate indices collapse. An empty set is representable
/// (operations that need at least one study day reject it at call
/// time), but out-of-range indices are rejected at construction: an
/// index above 6 can never match a date, so a walk filtered by it
/// would never terminate.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use u_studyplan::models::StudyWeekdays;
///
/// let days = StudyWeekdays::from_indices(&[0, 2, 4]).unwrap();
/// assert!(days.contains(Weekday::Wed));
/// assert!(!days.contains(Weekday::Sun));
/// assert_eq!(days.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct StudyWeekdays {
    mask: u8,
}

impl StudyWeekdays {
    /// Builds the set from weekday indices (0=Monday … 6=Sunday).
    ///
    /// Duplicates collapse. Fails with
    /// [`ScheduleError::WeekdayIndexOutOfRange`] on any index above 6.
    pub fn from_indices(indices: &[u8]) -> Result<Self> {
        let mut mask = 0u8;
        for &index in indices {
            if index > 6 {
                return Err(ScheduleError::WeekdayIndexOutOfRange { index });
            }
            mask |= 1 << index;
        }
        Ok(Self { mask })
    }

    /// Builds the set from `chrono` weekdays.
    pub fn from_weekdays<I>(days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        let mut mask = 0u8;
        for day in days {
            mask |= 1 << day.num_days_from_monday();
        }
        Self { mask }
    }

    /// Whether the given weekday is a study day.
    #[inline]
    pub fn contains(&self, day: Weekday) -> bool {
        self.mask & (1 << day.num_days_from_monday()) != 0
    }

    /// Whether the given date falls on a study day.
    #[inline]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.contains(date.weekday())
    }

    /// Whether no weekday is configured.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Number of distinct study weekdays.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Ascending weekday indices (0=Monday … 6=Sunday).
    pub fn indices(&self) -> Vec<u8> {
        (0u8..7).filter(|i| self.mask & (1 << i) != 0).collect()
    }
}

impl TryFrom<Vec<u8>> for StudyWeekdays {
    type Error = ScheduleError;

    fn try_from(indices: Vec<u8>) -> Result<Self> {
        Self::from_indices(&indices)
    }
}

impl From<StudyWeekdays> for Vec<u8> {
    fn from(days: StudyWeekdays) -> Self {
        days.indices()
    }
}

/// Immutable input configuration for one scheduling invocation.
///
/// No defaults are applied here: the caller supplies every field
/// explicitly (a "1 hour per day" fallback, for instance, belongs to
/// the caller, not the engine).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Weekdays available for study.
    pub study_weekdays: StudyWeekdays,
    /// Maximum minutes of content assignable to one day. May be fractional.
    pub daily_budget_minutes: f64,
    /// First candidate study date (timezone-naive, no time of day).
    pub start_date: NaiveDate,
}

impl ScheduleConfig {
    /// Creates a new configuration.
    pub fn new(
        study_weekdays: StudyWeekdays,
        daily_budget_minutes: f64,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            study_weekdays,
            daily_budget_minutes,
            start_date,
        }
    }

    /// Total budgeted minutes across one week of study days.
    pub fn weekly_budget_minutes(&self) -> f64 {
        self.study_weekdays.len() as f64 * self.daily_budget_minutes
    }

    /// Checks that at least one study weekday is configured.
    pub fn require_study_days(&self) -> Result<()> {
        if self.study_weekdays.is_empty() {
            return Err(ScheduleError::EmptyStudyWeekdays);
        }
        Ok(())
    }

    /// Checks that the daily budget is positive.
    ///
    /// A `NaN` budget is rejected like a non-positive one.
    pub fn require_positive_budget(&self) -> Result<()> {
        if self.daily_budget_minutes > 0.0 {
            Ok(())
        } else {
            Err(ScheduleError::NonPositiveDailyBudget {
                minutes: self.daily_budget_minutes,
            })
        }
    }
}
