//! Calendar walker: the ordered stream of eligible study dates.
//!
//! # Algorithm
//!
//! Advance a date cursor one calendar day at a time, yielding exactly
//! the dates whose weekday belongs to the configured study set. With a
//! non-empty set, each `next()` inspects at most seven dates.
//!
//! # Termination
//!
//! The stream is infinite in principle; callers bound it. Construction
//! fails fast on an empty weekday set (no date could ever qualify), and
//! open-ended searches on top of the walker must additionally enforce
//! [`SEARCH_HORIZON_DAYS`] so that unreachable targets fail predictably
//! instead of hanging.

use chrono::NaiveDate;

use crate::error::{Result, ScheduleError};
use crate::models::StudyWeekdays;

/// Hard ceiling, in calendar days, for open-ended searches over the
/// walker. A deliberate policy bound: a target that cannot be met
/// within a year of the start date is reported as unreachable.
pub const SEARCH_HORIZON_DAYS: i64 = 365;

/// Iterator over study dates, strictly increasing, starting at the
/// earliest eligible date on or after `start`.
///
/// If `start` itself falls on a study weekday, it is the first result.
/// The iterator is restartable by constructing a new walker from the
/// same inputs, and ends only at the upper bound of the representable
/// calendar — consumers surface that as [`ScheduleError::DateOverflow`].
#[derive(Debug, Clone)]
pub struct StudyDateWalker {
    weekdays: StudyWeekdays,
    cursor: Option<NaiveDate>,
}

impl StudyDateWalker {
    /// Creates a walker from the study-weekday set and a start date.
    ///
    /// Fails with [`ScheduleError::EmptyStudyWeekdays`] when the set is
    /// empty, rather than looping forever on a predicate that can never
    /// hold.
    pub fn new(weekdays: StudyWeekdays, start: NaiveDate) -> Result<Self> {
        if weekdays.is_empty() {
            return Err(ScheduleError::EmptyStudyWeekdays);
        }
        Ok(Self {
            weekdays,
            cursor: Some(start),
        })
    }
}

impl Iterator for StudyDateWalker {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        loop {
            let date = self.cursor?;
            self.cursor = date.succ_opt();
            if self.weekdays.contains_date(date) {
                return Some(date);
            }
        }
    }
}
