//! Calendar walking and greedy session allocation.
//!
//! Provides the two cooperating components of the engine.
//!
//! # Algorithm
//!
//! `StudyDateWalker` supplies the ordered stream of eligible study
//! dates; `StudyPlanner` consumes it, packing items into per-day
//! capacity bins with a strict greedy first-fit-by-arrival-order rule,
//! or counting study dates against an aggregate session threshold when
//! no item breakdown exists.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Coffman, Garey & Johnson (1996), "Approximation Algorithms for Bin
//!   Packing: A Survey" (Next-Fit)

mod planner;
mod walker;

pub use planner::StudyPlanner;
pub use walker::{StudyDateWalker, SEARCH_HORIZON_DAYS};
