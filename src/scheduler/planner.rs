//! Greedy session allocator.
//!
//! # Algorithm
//!
//! Item-level packing is strict greedy first-fit in arrival order:
//! items flow into the current day's bucket until the next item would
//! push the running total past the daily budget, at which point the
//! bucket closes as a session and the walker advances to the next
//! eligible study date. Items are never reordered or split.
//!
//! An item whose own duration exceeds the budget is still admitted into
//! an empty bucket, guaranteeing progress, and overflows that session.
//! Only such forced singletons may exceed the budget.
//!
//! # Complexity
//! O(n + s·w) for n items, s sessions, and w ≤ 7 cursor steps between
//! study dates.

use std::mem;

use chrono::NaiveDate;

use crate::error::{Result, ScheduleError};
use crate::models::{CompletionEstimate, Item, PlannedDay, ScheduleConfig, Session, StudyPlan};

use super::walker::{StudyDateWalker, SEARCH_HORIZON_DAYS};

/// Study-plan scheduler over a fixed configuration.
///
/// Stateless between calls: each operation is a pure function of the
/// configuration and its arguments.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_studyplan::models::{Item, ScheduleConfig, StudyWeekdays};
/// use u_studyplan::scheduler::StudyPlanner;
///
/// let config = ScheduleConfig::new(
///     StudyWeekdays::from_indices(&[0, 2, 4]).unwrap(), // Mon/Wed/Fri
///     60.0,
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
/// );
/// let planner = StudyPlanner::new(config);
///
/// let plan = planner
///     .distribute(vec![
///         Item::new("a", 30.0).with_title("Intro"),
///         Item::new("b", 40.0).with_title("Basics"),
///         Item::new("c", 20.0).with_title("Practice"),
///     ])
///     .unwrap();
///
/// assert_eq!(plan.session_count(), 2);
/// assert_eq!(
///     plan.completion_date(),
///     NaiveDate::from_ymd_opt(2024, 1, 3)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StudyPlanner {
    config: ScheduleConfig,
}

impl StudyPlanner {
    /// Creates a planner for the given configuration.
    pub fn new(config: ScheduleConfig) -> Self {
        Self { config }
    }

    /// The configuration this planner schedules against.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Packs items into study-day sessions, in input order.
    ///
    /// An empty item list yields an empty plan, not an error. A
    /// non-positive daily budget is not rejected here: the greedy rule
    /// still makes progress by placing every item in its own session.
    ///
    /// # Errors
    /// [`ScheduleError::EmptyStudyWeekdays`] when no study weekday is
    /// configured.
    pub fn distribute(&self, items: Vec<Item>) -> Result<StudyPlan> {
        self.config.require_study_days()?;

        let mut plan = StudyPlan::new(self.config.start_date);
        if items.is_empty() {
            return Ok(plan);
        }

        let budget = self.config.daily_budget_minutes;
        let item_count = items.len();
        let mut walker = StudyDateWalker::new(self.config.study_weekdays, self.config.start_date)?;
        let mut current_date = walker.next().ok_or(ScheduleError::DateOverflow)?;
        let mut bucket: Vec<Item> = Vec::new();
        let mut bucket_minutes = 0.0_f64;

        for item in items {
            if bucket_minutes + item.duration_minutes > budget && !bucket.is_empty() {
                tracing::trace!(
                    date = %current_date,
                    minutes = bucket_minutes,
                    "closing session"
                );
                plan.push_session(Session::new(current_date, mem::take(&mut bucket)));
                bucket_minutes = 0.0;
                current_date = walker.next().ok_or(ScheduleError::DateOverflow)?;
            }
            bucket_minutes += item.duration_minutes;
            bucket.push(item);
        }
        plan.push_session(Session::new(current_date, bucket));

        tracing::debug!(
            items = item_count,
            sessions = plan.session_count(),
            completion = %current_date,
            "packed study plan"
        );
        Ok(plan)
    }

    /// Estimates a completion date from aggregate duration alone.
    ///
    /// The real-valued session count `total / budget` is meaningful in
    /// its fraction: 4.2 sessions means the fifth study date is the one
    /// that crosses the threshold. A zero (or negative) total needs
    /// zero sessions and completes the day before the start date, with
    /// zero elapsed days.
    ///
    /// # Errors
    /// - [`ScheduleError::NonPositiveDailyBudget`] when the budget is
    ///   zero or negative (the division is undefined).
    /// - [`ScheduleError::EmptyStudyWeekdays`] when no study weekday is
    ///   configured.
    /// - [`ScheduleError::Unreachable`] when the threshold is not
    ///   crossed within [`SEARCH_HORIZON_DAYS`] of the start date.
    pub fn estimate(&self, total_duration_minutes: f64) -> Result<CompletionEstimate> {
        self.config.require_positive_budget()?;
        let start = self.config.start_date;
        let sessions_needed = total_duration_minutes / self.config.daily_budget_minutes;

        if sessions_needed <= 0.0 {
            let completion = start.pred_opt().unwrap_or(start);
            return Ok(CompletionEstimate {
                completion_date: completion,
                total_elapsed_days: 0,
                sessions_needed: 0,
            });
        }

        let walker = StudyDateWalker::new(self.config.study_weekdays, start)?;
        let mut counted: u32 = 0;
        for date in walker {
            if date.signed_duration_since(start).num_days() >= SEARCH_HORIZON_DAYS {
                return Err(ScheduleError::Unreachable {
                    start,
                    horizon_days: SEARCH_HORIZON_DAYS,
                });
            }
            counted += 1;
            if f64::from(counted) >= sessions_needed {
                let elapsed = date.signed_duration_since(start).num_days() + 1;
                tracing::debug!(
                    sessions = counted,
                    completion = %date,
                    "estimated completion"
                );
                return Ok(CompletionEstimate {
                    completion_date: date,
                    total_elapsed_days: elapsed,
                    sessions_needed: counted,
                });
            }
        }
        Err(ScheduleError::DateOverflow)
    }

    /// Generates the blank study-day grid from the start date through
    /// `end_date` inclusive, one entry per eligible date carrying the
    /// full daily budget.
    ///
    /// Empty when `end_date` precedes the first eligible date.
    ///
    /// # Errors
    /// [`ScheduleError::EmptyStudyWeekdays`] when no study weekday is
    /// configured.
    pub fn planned_calendar(&self, end_date: NaiveDate) -> Result<Vec<PlannedDay>> {
        self.config.require_study_days()?;
        let walker = StudyDateWalker::new(self.config.study_weekdays, self.config.start_date)?;
        Ok(walker
            .take_while(|date| *date <= end_date)
            .map(|date| PlannedDay::new(date, self.config.daily_budget_minutes))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StudyWeekdays;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Mon/Wed/Fri, 60 min/day, starting Monday 2024-01-01.
    fn sample_planner() -> StudyPlanner {
        StudyPlanner::new(ScheduleConfig::new(
            StudyWeekdays::from_indices(&[0, 2, 4]).unwrap(),
            60.0,
            date(2024, 1, 1),
        ))
    }

    fn planner_with(indices: &[u8], budget: f64, start: NaiveDate) -> StudyPlanner {
        StudyPlanner::new(ScheduleConfig::new(
            StudyWeekdays::from_indices(indices).unwrap(),
            budget,
            start,
        ))
    }

    #[test]
    fn test_distribute_greedy_packing() {
        // A(30) opens the first bucket; B(40) would push it to 70 > 60,
        // so the bucket closes as [A] and B opens the next day; C(20)
        // lands beside B at exactly the budget.
        let plan = sample_planner()
            .distribute(vec![
                Item::new("A", 30.0),
                Item::new("B", 40.0),
                Item::new("C", 20.0),
            ])
            .unwrap();

        assert_eq!(plan.session_count(), 2);

        let s1 = &plan.sessions[0];
        assert_eq!(s1.date, date(2024, 1, 1));
        assert_eq!(s1.weekday_label(), "Monday");
        assert_eq!(s1.item_count(), 1);
        assert_eq!(s1.items[0].id, "A");
        assert!((s1.total_minutes - 30.0).abs() < 1e-10);

        let s2 = &plan.sessions[1];
        assert_eq!(s2.date, date(2024, 1, 3));
        assert_eq!(s2.weekday_label(), "Wednesday");
        assert_eq!(s2.item_count(), 2);
        assert_eq!(s2.items[0].id, "B");
        assert_eq!(s2.items[1].id, "C");
        assert!((s2.total_minutes - 60.0).abs() < 1e-10);

        assert_eq!(plan.completion_date(), Some(date(2024, 1, 3)));
        assert_eq!(plan.total_elapsed_days(), Some(3));
    }

    #[test]
    fn test_distribute_empty_items() {
        let plan = sample_planner().distribute(vec![]).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.completion_date(), None);
    }

    #[test]
    fn test_distribute_empty_weekdays() {
        let planner = planner_with(&[], 60.0, date(2024, 1, 1));
        let err = planner.distribute(vec![Item::new("a", 10.0)]).unwrap_err();
        assert_eq!(err, ScheduleError::EmptyStudyWeekdays);
    }

    #[test]
    fn test_distribute_start_not_a_study_day() {
        // Tuesday start, first session lands on Wednesday
        let planner = planner_with(&[0, 2, 4], 60.0, date(2024, 1, 2));
        let plan = planner.distribute(vec![Item::new("a", 10.0)]).unwrap();
        assert_eq!(plan.sessions[0].date, date(2024, 1, 3));
    }

    #[test]
    fn test_distribute_overflow_item_placed_alone() {
        // X(90) exceeds the budget but must still be admitted, alone.
        let plan = sample_planner()
            .distribute(vec![
                Item::new("X", 90.0),
                Item::new("Y", 30.0),
                Item::new("Z", 100.0),
            ])
            .unwrap();

        assert_eq!(plan.session_count(), 3);
        assert_eq!(plan.sessions[0].item_count(), 1);
        assert!(plan.sessions[0].total_minutes > 60.0);
        assert_eq!(plan.sessions[1].items[0].id, "Y");
        assert_eq!(plan.sessions[2].item_count(), 1);
        assert_eq!(plan.sessions[2].items[0].id, "Z");
    }

    #[test]
    fn test_distribute_exact_fit_stays() {
        // 20+40 = 60 fits exactly; the strict > rule keeps both together.
        let plan = sample_planner()
            .distribute(vec![Item::new("a", 20.0), Item::new("b", 40.0)])
            .unwrap();
        assert_eq!(plan.session_count(), 1);
        assert!((plan.sessions[0].total_minutes - 60.0).abs() < 1e-10);
    }

    #[test]
    fn test_distribute_invariants_hold() {
        let items: Vec<Item> = [10.0, 20.0, 30.0, 40.0, 50.0, 5.0, 15.0, 25.0, 70.0, 10.0]
            .iter()
            .enumerate()
            .map(|(i, &minutes)| Item::new(format!("v{i}"), minutes))
            .collect();
        let planner = sample_planner();
        let plan = planner.distribute(items.clone()).unwrap();

        // Conservation: same items, same order, no drop or duplicate
        let packed: Vec<&str> = plan.items().map(|i| i.id.as_str()).collect();
        let original: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(packed, original);

        let weekdays = planner.config().study_weekdays;
        for pair in plan.sessions.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        for session in &plan.sessions {
            assert!(weekdays.contains_date(session.date));
            // Only forced singletons may exceed the budget
            if session.item_count() >= 2 {
                assert!(session.total_minutes <= 60.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_distribute_zero_budget_makes_singletons() {
        // Budget guard applies to estimation only; packing degrades to
        // one item per study day.
        let planner = planner_with(&[0, 2, 4], 0.0, date(2024, 1, 1));
        let plan = planner
            .distribute(vec![Item::new("a", 30.0), Item::new("b", 40.0)])
            .unwrap();
        assert_eq!(plan.session_count(), 2);
        assert_eq!(plan.sessions[0].item_count(), 1);
        assert_eq!(plan.sessions[1].item_count(), 1);
    }

    #[test]
    fn test_distribute_fractional_durations() {
        // 59.5 + 0.4 = 59.9 fits under 60; 0.2 more would exceed it
        let plan = sample_planner()
            .distribute(vec![
                Item::from_seconds("a", 3570), // 59.5 min
                Item::from_seconds("b", 24),   // 0.4 min
                Item::from_seconds("c", 12),   // 0.2 min
            ])
            .unwrap();
        assert_eq!(plan.session_count(), 2);
        assert_eq!(plan.sessions[0].item_count(), 2);
        assert_eq!(plan.sessions[1].items[0].id, "c");
    }

    #[test]
    fn test_estimate_exact_division() {
        // 600 / 60 = 10 sessions; the 10th Mon/Wed/Fri from Jan 1 2024
        // is Monday Jan 22 (1, 3, 5, 8, 10, 12, 15, 17, 19, 22).
        let estimate = sample_planner().estimate(600.0).unwrap();
        assert_eq!(estimate.sessions_needed, 10);
        assert_eq!(estimate.completion_date, date(2024, 1, 22));
        assert_eq!(estimate.total_elapsed_days, 22);
    }

    #[test]
    fn test_estimate_fractional_sessions_round_up() {
        // 250 / 60 ≈ 4.17 → the 5th study date crosses the threshold
        let estimate = sample_planner().estimate(250.0).unwrap();
        assert_eq!(estimate.sessions_needed, 5);
        assert_eq!(estimate.completion_date, date(2024, 1, 10));
        assert_eq!(estimate.total_elapsed_days, 10);
    }

    #[test]
    fn test_estimate_start_not_a_study_day() {
        let planner = planner_with(&[0, 2, 4], 60.0, date(2024, 1, 2));
        let estimate = planner.estimate(120.0).unwrap();
        // Jan 3 and Jan 5; elapsed counts from the Tuesday start
        assert_eq!(estimate.completion_date, date(2024, 1, 5));
        assert_eq!(estimate.total_elapsed_days, 4);
        assert_eq!(estimate.sessions_needed, 2);
    }

    #[test]
    fn test_estimate_zero_total() {
        let estimate = sample_planner().estimate(0.0).unwrap();
        assert_eq!(estimate.sessions_needed, 0);
        assert_eq!(estimate.total_elapsed_days, 0);
        assert_eq!(estimate.completion_date, date(2023, 12, 31));
    }

    #[test]
    fn test_estimate_non_positive_budget() {
        let planner = planner_with(&[0], 0.0, date(2024, 1, 1));
        let err = planner.estimate(600.0).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::NonPositiveDailyBudget { .. }
        ));

        let negative = planner_with(&[0], -15.0, date(2024, 1, 1));
        assert!(negative.estimate(600.0).is_err());
    }

    #[test]
    fn test_estimate_empty_weekdays() {
        let planner = planner_with(&[], 60.0, date(2024, 1, 1));
        let err = planner.estimate(600.0).unwrap_err();
        assert_eq!(err, ScheduleError::EmptyStudyWeekdays);
    }

    #[test]
    fn test_estimate_unreachable_within_horizon() {
        // Mondays only: at most 53 sessions fit inside a year
        let planner = planner_with(&[0], 60.0, date(2024, 1, 1));
        let err = planner.estimate(60.0 * 400.0).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::Unreachable {
                start: date(2024, 1, 1),
                horizon_days: SEARCH_HORIZON_DAYS,
            }
        );
    }

    #[test]
    fn test_estimate_just_inside_horizon() {
        // 53 Mondays starting Monday Jan 1 2024: the 53rd falls on day
        // offset 364, still inside the 365-day ceiling.
        let planner = planner_with(&[0], 60.0, date(2024, 1, 1));
        let estimate = planner.estimate(60.0 * 53.0).unwrap();
        assert_eq!(estimate.sessions_needed, 53);
        assert_eq!(estimate.completion_date, date(2024, 12, 30));
        assert_eq!(estimate.total_elapsed_days, 365);
    }

    #[test]
    fn test_planned_calendar_grid() {
        let days = sample_planner().planned_calendar(date(2024, 1, 7)).unwrap();
        let dates: Vec<NaiveDate> = days.iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 1, 1), date(2024, 1, 3), date(2024, 1, 5)]
        );
        assert_eq!(days[0].weekday_label(), "Monday");
        for day in &days {
            assert!((day.duration_minutes - 60.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_planned_calendar_end_inclusive() {
        let days = sample_planner().planned_calendar(date(2024, 1, 5)).unwrap();
        assert_eq!(days.len(), 3);
        assert_eq!(days[2].date, date(2024, 1, 5));
    }

    #[test]
    fn test_planned_calendar_end_before_start() {
        let days = sample_planner()
            .planned_calendar(date(2023, 12, 25))
            .unwrap();
        assert!(days.is_empty());
    }

    #[test]
    fn test_estimate_and_distribute_may_disagree() {
        // Packing respects item boundaries; estimation ignores them.
        // The two modes may disagree on the completion date.
        let planner = sample_planner();
        let items = vec![Item::new("a", 50.0), Item::new("b", 50.0)];
        let total: f64 = items.iter().map(|i| i.duration_minutes).sum();

        let plan = planner.distribute(items).unwrap();
        let estimate = planner.estimate(total).unwrap();

        // 50+50 packs into two sessions (Jan 1, Jan 3); 100/60 ≈ 1.67
        // estimates two sessions as well here, but the pair is not
        // guaranteed to agree in general.
        assert_eq!(plan.session_count(), 2);
        assert_eq!(estimate.sessions_needed, 2);
        assert_eq!(plan.completion_date(), Some(estimate.completion_date));
    }
}
