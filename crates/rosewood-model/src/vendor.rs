use crate::RecordId;
use serde::{Deserialize, Serialize};

/// A vendor directory entry. `contract_amount` is unset until a contract is
/// signed; booking state and contract value move independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Vendor {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub contract_amount: Option<f64>,
    pub is_booked: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVendor {
    pub name: String,
    pub category: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub contract_amount: Option<f64>,
    pub is_booked: bool,
    pub notes: Option<String>,
}

impl NewVendor {
    #[must_use]
    pub fn into_record(self, id: RecordId) -> Vendor {
        Vendor {
            id,
            name: self.name,
            category: self.category,
            contact_name: self.contact_name,
            phone: self.phone,
            email: self.email,
            website: self.website,
            address: self.address,
            contract_amount: self.contract_amount,
            is_booked: self.is_booked,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub contact_name: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub contract_amount: Option<Option<f64>>,
    pub is_booked: Option<bool>,
    pub notes: Option<Option<String>>,
}

impl VendorPatch {
    pub fn apply(self, vendor: &mut Vendor) {
        if let Some(name) = self.name {
            vendor.name = name;
        }
        if let Some(category) = self.category {
            vendor.category = category;
        }
        if let Some(contact_name) = self.contact_name {
            vendor.contact_name = contact_name;
        }
        if let Some(phone) = self.phone {
            vendor.phone = phone;
        }
        if let Some(email) = self.email {
            vendor.email = email;
        }
        if let Some(website) = self.website {
            vendor.website = website;
        }
        if let Some(address) = self.address {
            vendor.address = address;
        }
        if let Some(contract_amount) = self.contract_amount {
            vendor.contract_amount = contract_amount;
        }
        if let Some(is_booked) = self.is_booked {
            vendor.is_booked = is_booked;
        }
        if let Some(notes) = self.notes {
            vendor.notes = notes;
        }
    }
}
