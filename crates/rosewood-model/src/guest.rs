// SPDX-License-Identifier: Apache-2.0

use crate::error::ParseError;
use crate::RecordId;
use serde::{Deserialize, Serialize};

/// A guest's reply state to the invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    #[default]
    Pending,
    Confirmed,
    Declined,
}

impl RsvpStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Declined => "declined",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ParseError> {
        match value {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "declined" => Ok(Self::Declined),
            other => Err(ParseError::UnknownRsvpStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// A stored guest record.
///
/// `table_assignment` holds a seating table's `tableNumber` (not its record
/// id); `None` means unassigned. The store does not verify the number against
/// existing tables at write time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Guest {
    pub id: RecordId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub rsvp_status: RsvpStatus,
    pub plus_one: bool,
    pub dietary_restrictions: Option<String>,
    pub table_assignment: Option<i64>,
    pub notes: Option<String>,
}

/// Validated create input, defaults already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGuest {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub rsvp_status: RsvpStatus,
    pub plus_one: bool,
    pub dietary_restrictions: Option<String>,
    pub table_assignment: Option<i64>,
    pub notes: Option<String>,
}

impl NewGuest {
    #[must_use]
    pub fn into_record(self, id: RecordId) -> Guest {
        Guest {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            rsvp_status: self.rsvp_status,
            plus_one: self.plus_one,
            dietary_restrictions: self.dietary_restrictions,
            table_assignment: self.table_assignment,
            notes: self.notes,
        }
    }
}

/// Partial update. An unset outer `Option` leaves the field untouched; for
/// nullable fields `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestPatch {
    pub name: Option<String>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub rsvp_status: Option<RsvpStatus>,
    pub plus_one: Option<bool>,
    pub dietary_restrictions: Option<Option<String>>,
    pub table_assignment: Option<Option<i64>>,
    pub notes: Option<Option<String>>,
}

impl GuestPatch {
    pub fn apply(self, guest: &mut Guest) {
        if let Some(name) = self.name {
            guest.name = name;
        }
        if let Some(email) = self.email {
            guest.email = email;
        }
        if let Some(phone) = self.phone {
            guest.phone = phone;
        }
        if let Some(rsvp_status) = self.rsvp_status {
            guest.rsvp_status = rsvp_status;
        }
        if let Some(plus_one) = self.plus_one {
            guest.plus_one = plus_one;
        }
        if let Some(dietary_restrictions) = self.dietary_restrictions {
            guest.dietary_restrictions = dietary_restrictions;
        }
        if let Some(table_assignment) = self.table_assignment {
            guest.table_assignment = table_assignment;
        }
        if let Some(notes) = self.notes {
            guest.notes = notes;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Guest {
        NewGuest {
            name: "Amina Khan".to_string(),
            email: None,
            phone: None,
            rsvp_status: RsvpStatus::Confirmed,
            plus_one: false,
            dietary_restrictions: None,
            table_assignment: None,
            notes: None,
        }
        .into_record(7)
    }

    #[test]
    fn rsvp_status_parse_accepts_every_wire_name() {
        for status in [RsvpStatus::Pending, RsvpStatus::Confirmed, RsvpStatus::Declined] {
            assert_eq!(RsvpStatus::parse(status.as_str()), Ok(status));
        }
        RsvpStatus::parse("maybe").expect_err("'maybe' is not a valid status");
    }

    #[test]
    fn guest_serializes_camel_case_with_explicit_nulls() {
        let value = serde_json::to_value(sample()).expect("serialize guest");
        assert_eq!(value["rsvpStatus"], "confirmed");
        assert_eq!(value["plusOne"], false);
        assert!(value["tableAssignment"].is_null());
        assert!(value.get("rsvp_status").is_none());
    }

    #[test]
    fn patch_touches_only_set_fields() {
        let mut guest = sample();
        GuestPatch {
            table_assignment: Some(Some(3)),
            ..GuestPatch::default()
        }
        .apply(&mut guest);
        assert_eq!(guest.table_assignment, Some(3));
        assert_eq!(guest.name, "Amina Khan");
        assert_eq!(guest.rsvp_status, RsvpStatus::Confirmed);
    }

    #[test]
    fn patch_clears_nullable_field_with_inner_none() {
        let mut guest = sample();
        guest.table_assignment = Some(5);
        GuestPatch {
            table_assignment: Some(None),
            ..GuestPatch::default()
        }
        .apply(&mut guest);
        assert_eq!(guest.table_assignment, None);
    }
}
