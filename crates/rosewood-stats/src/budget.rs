// SPDX-License-Identifier: Apache-2.0

use rosewood_model::BudgetItem;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category: String,
    pub budgeted: f64,
    pub actual: f64,
    pub items: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub total_budget: f64,
    pub total_actual: f64,
    pub remaining: f64,
    pub percent_used: u32,
    pub categories: Vec<CategoryBreakdown>,
}

/// Totals plus a per-category breakdown. Categories appear in first-seen
/// order; `remaining` and `percent_used` are not clamped, so overspend shows
/// as negative remaining and a percentage over 100.
#[must_use]
pub fn budget_summary(items: &[BudgetItem]) -> BudgetSummary {
    let total_budget: f64 = items.iter().map(|i| i.budget_amount).sum();
    let total_actual: f64 = items.iter().map(|i| i.actual_amount).sum();
    let mut categories: Vec<CategoryBreakdown> = Vec::new();
    for item in items {
        match categories.iter_mut().find(|c| c.category == item.category) {
            Some(entry) => {
                entry.budgeted += item.budget_amount;
                entry.actual += item.actual_amount;
                entry.items += 1;
            }
            None => categories.push(CategoryBreakdown {
                category: item.category.clone(),
                budgeted: item.budget_amount,
                actual: item.actual_amount,
                items: 1,
            }),
        }
    }
    BudgetSummary {
        total_budget,
        total_actual,
        remaining: total_budget - total_actual,
        percent_used: spend_percent(total_actual, total_budget),
        categories,
    }
}

fn spend_percent(actual: f64, budget: f64) -> u32 {
    if budget <= 0.0 {
        0
    } else {
        ((actual / budget) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosewood_model::NewBudgetItem;

    fn item(category: &str, budget: f64, actual: f64) -> BudgetItem {
        NewBudgetItem {
            category: category.to_string(),
            description: category.to_string(),
            budget_amount: budget,
            actual_amount: actual,
            is_paid: false,
            notes: None,
        }
        .into_record(1)
    }

    #[test]
    fn totals_remaining_and_percent() {
        let summary = budget_summary(&[item("Venue", 100.0, 50.0), item("Music", 200.0, 250.0)]);
        assert_eq!(summary.total_budget, 300.0);
        assert_eq!(summary.total_actual, 300.0);
        assert_eq!(summary.remaining, 0.0);
        assert_eq!(summary.percent_used, 100);
    }

    #[test]
    fn empty_budget_reports_zero_percent() {
        let summary = budget_summary(&[]);
        assert_eq!(summary.total_budget, 0.0);
        assert_eq!(summary.percent_used, 0);
        assert!(summary.categories.is_empty());
    }

    #[test]
    fn overspend_is_not_clamped() {
        let summary = budget_summary(&[item("Venue", 200.0, 250.0)]);
        assert_eq!(summary.remaining, -50.0);
        assert_eq!(summary.percent_used, 125);
    }

    #[test]
    fn categories_group_in_first_seen_order() {
        let summary = budget_summary(&[
            item("Venue", 100.0, 10.0),
            item("Music", 50.0, 0.0),
            item("Venue", 40.0, 5.0),
        ]);
        let names: Vec<&str> = summary.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, ["Venue", "Music"]);
        assert_eq!(summary.categories[0].budgeted, 140.0);
        assert_eq!(summary.categories[0].actual, 15.0);
        assert_eq!(summary.categories[0].items, 2);
    }
}
