//! Study-plan scheduling engine.
//!
//! Turns an ordered sequence of content items, a weekly availability
//! pattern (which weekdays are study days), and a daily time budget into
//! a day-by-day study calendar — or, when only an aggregate duration is
//! known, estimates a completion date from the total alone.
//!
//! # Modules
//!
//! - **`models`**: domain types — `ScheduleConfig`, `StudyWeekdays`,
//!   `Item`, `Session`, `StudyPlan`, `CompletionEstimate`, `PlannedDay`
//! - **`scheduler`**: `StudyDateWalker` (the ordered stream of eligible
//!   study dates) and `StudyPlanner` (greedy session packing plus the
//!   aggregate estimation fallback)
//! - **`error`**: `ScheduleError` and the crate `Result` alias
//!
//! # Design
//!
//! Every operation is a pure function of its explicit inputs: no ambient
//! state, no clocks, no I/O. Where the items and configuration come from
//! and where the resulting plan is stored are the caller's concern.
//! Concurrent invocations with independent inputs are trivially safe.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Coffman, Garey & Johnson (1996), "Approximation Algorithms for Bin Packing"

pub mod error;
pub mod models;
pub mod scheduler;
