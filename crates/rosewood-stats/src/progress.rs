// SPDX-License-Identifier: Apache-2.0

use rosewood_model::{Guest, RsvpStatus, Task, Vendor};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestRsvpSummary {
    pub total: u64,
    pub confirmed: u64,
    pub pending: u64,
    pub declined: u64,
    pub progress_percent: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub total: u64,
    pub completed: u64,
    pub progress_percent: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorSummary {
    pub total: u64,
    pub booked: u64,
    pub progress_percent: u32,
    pub total_contracted: f64,
}

#[must_use]
pub fn rsvp_summary(guests: &[Guest]) -> GuestRsvpSummary {
    let count = |status: RsvpStatus| guests.iter().filter(|g| g.rsvp_status == status).count() as u64;
    let total = guests.len() as u64;
    let confirmed = count(RsvpStatus::Confirmed);
    GuestRsvpSummary {
        total,
        confirmed,
        pending: count(RsvpStatus::Pending),
        declined: count(RsvpStatus::Declined),
        progress_percent: percent(confirmed, total),
    }
}

#[must_use]
pub fn task_summary(tasks: &[Task]) -> TaskSummary {
    let total = tasks.len() as u64;
    let completed = tasks.iter().filter(|t| t.is_completed).count() as u64;
    TaskSummary {
        total,
        completed,
        progress_percent: percent(completed, total),
    }
}

/// Contract total counts booked vendors only; a booked vendor without a
/// signed amount contributes 0.
#[must_use]
pub fn vendor_summary(vendors: &[Vendor]) -> VendorSummary {
    let total = vendors.len() as u64;
    let booked = vendors.iter().filter(|v| v.is_booked).count() as u64;
    let total_contracted = vendors
        .iter()
        .filter(|v| v.is_booked)
        .map(|v| v.contract_amount.unwrap_or(0.0))
        .sum();
    VendorSummary {
        total,
        booked,
        progress_percent: percent(booked, total),
        total_contracted,
    }
}

/// Whole-number percentage, 0 when the denominator is 0.
pub(crate) fn percent(part: u64, total: u64) -> u32 {
    if total == 0 {
        0
    } else {
        ((part as f64 / total as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosewood_model::{NewGuest, NewTask, NewVendor, TaskPriority};

    fn guest(name: &str, status: RsvpStatus) -> Guest {
        NewGuest {
            name: name.to_string(),
            email: None,
            phone: None,
            rsvp_status: status,
            plus_one: false,
            dietary_restrictions: None,
            table_assignment: None,
            notes: None,
        }
        .into_record(1)
    }

    fn vendor(name: &str, booked: bool, contract: Option<f64>) -> Vendor {
        NewVendor {
            name: name.to_string(),
            category: "Catering".to_string(),
            contact_name: None,
            phone: None,
            email: None,
            website: None,
            address: None,
            contract_amount: contract,
            is_booked: booked,
            notes: None,
        }
        .into_record(1)
    }

    #[test]
    fn rsvp_rate_rounds_to_whole_percent() {
        let mut guests = Vec::new();
        for i in 0..4 {
            guests.push(guest(&format!("c{i}"), RsvpStatus::Confirmed));
        }
        for i in 0..3 {
            guests.push(guest(&format!("p{i}"), RsvpStatus::Pending));
        }
        for i in 0..3 {
            guests.push(guest(&format!("d{i}"), RsvpStatus::Declined));
        }
        let summary = rsvp_summary(&guests);
        assert_eq!(summary.total, 10);
        assert_eq!(summary.confirmed, 4);
        assert_eq!(summary.pending, 3);
        assert_eq!(summary.declined, 3);
        assert_eq!(summary.progress_percent, 40);
    }

    #[test]
    fn empty_collections_report_zero_percent() {
        assert_eq!(rsvp_summary(&[]).progress_percent, 0);
        assert_eq!(task_summary(&[]).progress_percent, 0);
        assert_eq!(vendor_summary(&[]).progress_percent, 0);
    }

    #[test]
    fn task_completion_counts_only_completed() {
        let mut open = NewTask {
            title: "Order cake".to_string(),
            description: None,
            is_completed: false,
            due_date: None,
            priority: TaskPriority::Medium,
            category: None,
        }
        .into_record(1);
        let tasks = vec![open.clone(), {
            open.is_completed = true;
            open.id = 2;
            open
        }];
        let summary = task_summary(&tasks);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.progress_percent, 50);
    }

    #[test]
    fn contract_total_skips_unbooked_and_defaults_missing_to_zero() {
        let vendors = vec![
            vendor("Bloom & Co", true, Some(2400.0)),
            vendor("Sound & Light", true, None),
            vendor("Sweet Crumb", false, Some(900.0)),
        ];
        let summary = vendor_summary(&vendors);
        assert_eq!(summary.booked, 2);
        assert_eq!(summary.total_contracted, 2400.0);
        assert_eq!(summary.progress_percent, 67);
    }
}
