// SPDX-License-Identifier: Apache-2.0

use crate::RecordId;
use serde::{Deserialize, Serialize};

/// The singleton wedding record. Exactly one instance exists from process
/// start; it is only ever updated, never created or deleted through the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WeddingDetails {
    pub id: RecordId,
    pub bride_name: String,
    pub groom_name: String,
    pub wedding_date: String,
    pub venue: String,
    pub total_budget: f64,
}

/// Partial update for the singleton. Every field is required on the stored
/// record, so none of these can clear to null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeddingDetailsPatch {
    pub bride_name: Option<String>,
    pub groom_name: Option<String>,
    pub wedding_date: Option<String>,
    pub venue: Option<String>,
    pub total_budget: Option<f64>,
}

impl WeddingDetailsPatch {
    pub fn apply(self, details: &mut WeddingDetails) {
        if let Some(bride_name) = self.bride_name {
            details.bride_name = bride_name;
        }
        if let Some(groom_name) = self.groom_name {
            details.groom_name = groom_name;
        }
        if let Some(wedding_date) = self.wedding_date {
            details.wedding_date = wedding_date;
        }
        if let Some(venue) = self.venue {
            details.venue = venue;
        }
        if let Some(total_budget) = self.total_budget {
            details.total_budget = total_budget;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_merges_over_existing_details() {
        let mut details = WeddingDetails {
            id: 1,
            bride_name: "Sarah".to_string(),
            groom_name: "Michael".to_string(),
            wedding_date: "2024-06-15".to_string(),
            venue: "Rosewood Manor".to_string(),
            total_budget: 40000.0,
        };
        WeddingDetailsPatch {
            venue: Some("Lakeside Pavilion".to_string()),
            total_budget: Some(45000.0),
            ..WeddingDetailsPatch::default()
        }
        .apply(&mut details);
        assert_eq!(details.venue, "Lakeside Pavilion");
        assert_eq!(details.total_budget, 45000.0);
        assert_eq!(details.bride_name, "Sarah");
    }
}
