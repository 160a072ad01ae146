//! Study plan (solution) model.
//!
//! A study plan is the complete output of item-level packing: an ordered
//! sequence of sessions, each binding one calendar day to the items
//! assigned to it.
//!
//! # Invariants
//! - Session dates are strictly increasing and all fall on configured
//!   study weekdays.
//! - Concatenating the sessions' items reproduces the input item
//!   sequence exactly once each.
//! - A session holding two or more items never exceeds the daily budget;
//!   only a forced singleton (an item larger than the budget) may.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::config::weekday_label;
use super::item::Item;

/// One calendar day's worth of packed items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The study date.
    pub date: NaiveDate,
    /// Items assigned to this day, in input order.
    pub items: Vec<Item>,
    /// Sum of the assigned items' durations (minutes).
    pub total_minutes: f64,
}

impl Session {
    /// Creates a session, computing the total from its items.
    pub fn new(date: NaiveDate, items: Vec<Item>) -> Self {
        let total_minutes = items.iter().map(|i| i.duration_minutes).sum();
        Self {
            date,
            items,
            total_minutes,
        }
    }

    /// The English weekday name of this session's date.
    ///
    /// Derived from `date` on demand — never stored alongside it.
    pub fn weekday_label(&self) -> &'static str {
        weekday_label(self.date)
    }

    /// Number of items in this session.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// A complete study plan: the ordered sequence of sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    /// First candidate study date of the invocation that built this plan.
    pub start_date: NaiveDate,
    /// Sessions in date order.
    pub sessions: Vec<Session>,
}

impl StudyPlan {
    /// Creates an empty plan anchored at the given start date.
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            sessions: Vec::new(),
        }
    }

    /// Appends a session.
    pub fn push_session(&mut self, session: Session) {
        self.sessions.push(session);
    }

    /// Date of the last session, or `None` for an empty plan.
    pub fn completion_date(&self) -> Option<NaiveDate> {
        self.sessions.last().map(|s| s.date)
    }

    /// Calendar days from the start date through the completion date,
    /// inclusive of both endpoints. `None` for an empty plan.
    pub fn total_elapsed_days(&self) -> Option<i64> {
        self.completion_date()
            .map(|end| end.signed_duration_since(self.start_date).num_days() + 1)
    }

    /// Number of sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Sum of all sessions' minutes.
    pub fn total_minutes(&self) -> f64 {
        self.sessions.iter().map(|s| s.total_minutes).sum()
    }

    /// Whether the plan holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// All assigned items in session order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.sessions.iter().flat_map(|s| s.items.iter())
    }
}
