use crate::budget::{budget_summary, BudgetSummary};
use crate::countdown::{countdown_to, Countdown};
use crate::progress::{
    rsvp_summary, task_summary, vendor_summary, GuestRsvpSummary, TaskSummary, VendorSummary,
};
use chrono::{DateTime, Utc};
use rosewood_model::{BudgetItem, Guest, Task, Vendor, WeddingDetails};
use serde::Serialize;

/// Everything the dashboard shows, computed from one set of snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningSummary {
    pub wedding: WeddingDetails,
    pub countdown: Countdown,
    pub guests: GuestRsvpSummary,
    pub budget: BudgetSummary,
    pub tasks: TaskSummary,
    pub vendors: VendorSummary,
}

#[must_use]
pub fn planning_summary(
    wedding: WeddingDetails,
    guests: &[Guest],
    budget_items: &[BudgetItem],
    tasks: &[Task],
    vendors: &[Vendor],
    now: DateTime<Utc>,
) -> PlanningSummary {
    PlanningSummary {
        countdown: countdown_to(&wedding.wedding_date, now),
        guests: rsvp_summary(guests),
        budget: budget_summary(budget_items),
        tasks: task_summary(tasks),
        vendors: vendor_summary(vendors),
        wedding,
    }
}
