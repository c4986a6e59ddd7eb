#![forbid(unsafe_code)]
//! Derived views over planner snapshots.
//!
//! Everything here is a pure function from collection snapshots to a summary
//! struct, recomputed on every read. Nothing caches, nothing mutates; the
//! clock is always passed in so callers (and tests) control "now".

pub mod budget;
pub mod countdown;
pub mod progress;
pub mod seating;
pub mod summary;

pub use budget::{budget_summary, BudgetSummary, CategoryBreakdown};
pub use countdown::{countdown_to, Countdown};
pub use progress::{
    rsvp_summary, task_summary, vendor_summary, GuestRsvpSummary, TaskSummary, VendorSummary,
};
pub use seating::{seating_overview, SeatingOverview, TableOccupancy};
pub use summary::{planning_summary, PlanningSummary};

pub const CRATE_NAME: &str = "rosewood-stats";
