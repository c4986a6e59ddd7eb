use crate::RecordId;
use serde::{Deserialize, Serialize};

/// A budget line item. Amounts are plain f64 dollars; `actual_amount`
/// defaults to 0 until money is actually spent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BudgetItem {
    pub id: RecordId,
    pub category: String,
    pub description: String,
    pub budget_amount: f64,
    pub actual_amount: f64,
    pub is_paid: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBudgetItem {
    pub category: String,
    pub description: String,
    pub budget_amount: f64,
    pub actual_amount: f64,
    pub is_paid: bool,
    pub notes: Option<String>,
}

impl NewBudgetItem {
    #[must_use]
    pub fn into_record(self, id: RecordId) -> BudgetItem {
        BudgetItem {
            id,
            category: self.category,
            description: self.description,
            budget_amount: self.budget_amount,
            actual_amount: self.actual_amount,
            is_paid: self.is_paid,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetItemPatch {
    pub category: Option<String>,
    pub description: Option<String>,
    pub budget_amount: Option<f64>,
    pub actual_amount: Option<f64>,
    pub is_paid: Option<bool>,
    pub notes: Option<Option<String>>,
}

impl BudgetItemPatch {
    pub fn apply(self, item: &mut BudgetItem) {
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(budget_amount) = self.budget_amount {
            item.budget_amount = budget_amount;
        }
        if let Some(actual_amount) = self.actual_amount {
            item.actual_amount = actual_amount;
        }
        if let Some(is_paid) = self.is_paid {
            item.is_paid = is_paid;
        }
        if let Some(notes) = self.notes {
            item.notes = notes;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut item = NewBudgetItem {
            category: "Venue".to_string(),
            description: "Reception hall".to_string(),
            budget_amount: 12000.0,
            actual_amount: 0.0,
            is_paid: false,
            notes: None,
        }
        .into_record(3);
        let before = item.clone();
        BudgetItemPatch::default().apply(&mut item);
        assert_eq!(item, before);
    }
}
