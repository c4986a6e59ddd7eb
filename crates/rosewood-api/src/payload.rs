// SPDX-License-Identifier: Apache-2.0

//! Body validation: untyped JSON in, typed `New*`/`*Patch` out.
//!
//! Create parsing enforces required fields and applies declared defaults;
//! patch parsing treats every field as optional and never defaults. Both
//! accumulate violations across the whole payload before failing, coerce
//! numeric strings for decimal and integer fields, and reject keys that are
//! not part of the entity.

use crate::errors::{ApiError, ApiErrorCode, FieldViolation};
use rosewood_model::{
    BudgetItemPatch, GuestPatch, NewBudgetItem, NewGuest, NewSeatingTable, NewTask,
    NewTimelineEvent, NewVendor, ParseError, RsvpStatus, SeatingTablePatch, TableShape, TaskPatch,
    TaskPriority, TimelineEventPatch, VendorPatch, WeddingDetailsPatch,
};
use serde_json::{Map, Value};

const GUEST_FIELDS: &[&str] = &[
    "name",
    "email",
    "phone",
    "rsvpStatus",
    "plusOne",
    "dietaryRestrictions",
    "tableAssignment",
    "notes",
];
const BUDGET_FIELDS: &[&str] = &[
    "category",
    "description",
    "budgetAmount",
    "actualAmount",
    "isPaid",
    "notes",
];
const TIMELINE_FIELDS: &[&str] = &[
    "title",
    "description",
    "startTime",
    "endTime",
    "location",
    "eventType",
];
const TASK_FIELDS: &[&str] = &[
    "title",
    "description",
    "isCompleted",
    "dueDate",
    "priority",
    "category",
];
const VENDOR_FIELDS: &[&str] = &[
    "name",
    "category",
    "contactName",
    "phone",
    "email",
    "website",
    "address",
    "contractAmount",
    "isBooked",
    "notes",
];
const SEATING_FIELDS: &[&str] = &[
    "tableNumber",
    "capacity",
    "positionX",
    "positionY",
    "shape",
];
const WEDDING_FIELDS: &[&str] = &[
    "brideName",
    "groomName",
    "weddingDate",
    "venue",
    "totalBudget",
];

pub fn new_guest(body: &Value) -> Result<NewGuest, ApiError> {
    let mut fields = Fields::new(object(body)?);
    let name = fields.required_string("name");
    let email = fields.optional_email("email");
    let phone = fields.optional_string("phone");
    let rsvp_status = fields.enum_or("rsvpStatus", RsvpStatus::Pending, RsvpStatus::parse);
    let plus_one = fields.bool_or("plusOne", false);
    let dietary_restrictions = fields.optional_string("dietaryRestrictions");
    let table_assignment = fields.optional_int("tableAssignment");
    let notes = fields.optional_string("notes");
    fields.finish("Invalid guest data", GUEST_FIELDS)?;
    Ok(NewGuest {
        name,
        email,
        phone,
        rsvp_status,
        plus_one,
        dietary_restrictions,
        table_assignment,
        notes,
    })
}

pub fn guest_patch(body: &Value) -> Result<GuestPatch, ApiError> {
    let mut fields = Fields::new(object(body)?);
    let patch = GuestPatch {
        name: fields.patch_string("name"),
        email: fields.patch_nullable_email("email"),
        phone: fields.patch_nullable_string("phone"),
        rsvp_status: fields.patch_enum("rsvpStatus", RsvpStatus::parse),
        plus_one: fields.patch_bool("plusOne"),
        dietary_restrictions: fields.patch_nullable_string("dietaryRestrictions"),
        table_assignment: fields.patch_nullable_int("tableAssignment"),
        notes: fields.patch_nullable_string("notes"),
    };
    fields.finish("Invalid guest data", GUEST_FIELDS)?;
    Ok(patch)
}

pub fn new_budget_item(body: &Value) -> Result<NewBudgetItem, ApiError> {
    let mut fields = Fields::new(object(body)?);
    let category = fields.required_string("category");
    let description = fields.required_string("description");
    let budget_amount = fields.required_number("budgetAmount");
    let actual_amount = fields.number_or("actualAmount", 0.0);
    let is_paid = fields.bool_or("isPaid", false);
    let notes = fields.optional_string("notes");
    fields.finish("Invalid budget data", BUDGET_FIELDS)?;
    Ok(NewBudgetItem {
        category,
        description,
        budget_amount,
        actual_amount,
        is_paid,
        notes,
    })
}

pub fn budget_item_patch(body: &Value) -> Result<BudgetItemPatch, ApiError> {
    let mut fields = Fields::new(object(body)?);
    let patch = BudgetItemPatch {
        category: fields.patch_string("category"),
        description: fields.patch_string("description"),
        budget_amount: fields.patch_number("budgetAmount"),
        actual_amount: fields.patch_number("actualAmount"),
        is_paid: fields.patch_bool("isPaid"),
        notes: fields.patch_nullable_string("notes"),
    };
    fields.finish("Invalid budget data", BUDGET_FIELDS)?;
    Ok(patch)
}

pub fn new_timeline_event(body: &Value) -> Result<NewTimelineEvent, ApiError> {
    let mut fields = Fields::new(object(body)?);
    let title = fields.required_string("title");
    let description = fields.optional_string("description");
    let start_time = fields.required_string("startTime");
    let end_time = fields.required_string("endTime");
    let location = fields.optional_string("location");
    let event_type = fields.required_string("eventType");
    fields.finish("Invalid event data", TIMELINE_FIELDS)?;
    Ok(NewTimelineEvent {
        title,
        description,
        start_time,
        end_time,
        location,
        event_type,
    })
}

pub fn timeline_event_patch(body: &Value) -> Result<TimelineEventPatch, ApiError> {
    let mut fields = Fields::new(object(body)?);
    let patch = TimelineEventPatch {
        title: fields.patch_string("title"),
        description: fields.patch_nullable_string("description"),
        start_time: fields.patch_string("startTime"),
        end_time: fields.patch_string("endTime"),
        location: fields.patch_nullable_string("location"),
        event_type: fields.patch_string("eventType"),
    };
    fields.finish("Invalid event data", TIMELINE_FIELDS)?;
    Ok(patch)
}

pub fn new_task(body: &Value) -> Result<NewTask, ApiError> {
    let mut fields = Fields::new(object(body)?);
    let title = fields.required_string("title");
    let description = fields.optional_string("description");
    let is_completed = fields.bool_or("isCompleted", false);
    let due_date = fields.optional_string("dueDate");
    let priority = fields.enum_or("priority", TaskPriority::Medium, TaskPriority::parse);
    let category = fields.optional_string("category");
    fields.finish("Invalid task data", TASK_FIELDS)?;
    Ok(NewTask {
        title,
        description,
        is_completed,
        due_date,
        priority,
        category,
    })
}

pub fn task_patch(body: &Value) -> Result<TaskPatch, ApiError> {
    let mut fields = Fields::new(object(body)?);
    let patch = TaskPatch {
        title: fields.patch_string("title"),
        description: fields.patch_nullable_string("description"),
        is_completed: fields.patch_bool("isCompleted"),
        due_date: fields.patch_nullable_string("dueDate"),
        priority: fields.patch_enum("priority", TaskPriority::parse),
        category: fields.patch_nullable_string("category"),
    };
    fields.finish("Invalid task data", TASK_FIELDS)?;
    Ok(patch)
}

pub fn new_vendor(body: &Value) -> Result<NewVendor, ApiError> {
    let mut fields = Fields::new(object(body)?);
    let name = fields.required_string("name");
    let category = fields.required_string("category");
    let contact_name = fields.optional_string("contactName");
    let phone = fields.optional_string("phone");
    let email = fields.optional_email("email");
    let website = fields.optional_url("website");
    let address = fields.optional_string("address");
    let contract_amount = fields.optional_number("contractAmount");
    let is_booked = fields.bool_or("isBooked", false);
    let notes = fields.optional_string("notes");
    fields.finish("Invalid vendor data", VENDOR_FIELDS)?;
    Ok(NewVendor {
        name,
        category,
        contact_name,
        phone,
        email,
        website,
        address,
        contract_amount,
        is_booked,
        notes,
    })
}

pub fn vendor_patch(body: &Value) -> Result<VendorPatch, ApiError> {
    let mut fields = Fields::new(object(body)?);
    let patch = VendorPatch {
        name: fields.patch_string("name"),
        category: fields.patch_string("category"),
        contact_name: fields.patch_nullable_string("contactName"),
        phone: fields.patch_nullable_string("phone"),
        email: fields.patch_nullable_email("email"),
        website: fields.patch_nullable_url("website"),
        address: fields.patch_nullable_string("address"),
        contract_amount: fields.patch_nullable_number("contractAmount"),
        is_booked: fields.patch_bool("isBooked"),
        notes: fields.patch_nullable_string("notes"),
    };
    fields.finish("Invalid vendor data", VENDOR_FIELDS)?;
    Ok(patch)
}

pub fn new_seating_table(body: &Value) -> Result<NewSeatingTable, ApiError> {
    let mut fields = Fields::new(object(body)?);
    let table_number = fields.required_int("tableNumber");
    let capacity = fields.required_int("capacity");
    let position_x = fields.int_or("positionX", 0);
    let position_y = fields.int_or("positionY", 0);
    let shape = fields.enum_or("shape", TableShape::Round, TableShape::parse);
    fields.finish("Invalid table data", SEATING_FIELDS)?;
    Ok(NewSeatingTable {
        table_number,
        capacity,
        position_x,
        position_y,
        shape,
    })
}

pub fn seating_table_patch(body: &Value) -> Result<SeatingTablePatch, ApiError> {
    let mut fields = Fields::new(object(body)?);
    let patch = SeatingTablePatch {
        table_number: fields.patch_int("tableNumber"),
        capacity: fields.patch_int("capacity"),
        position_x: fields.patch_int("positionX"),
        position_y: fields.patch_int("positionY"),
        shape: fields.patch_enum("shape", TableShape::parse),
    };
    fields.finish("Invalid table data", SEATING_FIELDS)?;
    Ok(patch)
}

pub fn wedding_details_patch(body: &Value) -> Result<WeddingDetailsPatch, ApiError> {
    let mut fields = Fields::new(object(body)?);
    let patch = WeddingDetailsPatch {
        bride_name: fields.patch_string("brideName"),
        groom_name: fields.patch_string("groomName"),
        wedding_date: fields.patch_string("weddingDate"),
        venue: fields.patch_string("venue"),
        total_budget: fields.patch_number("totalBudget"),
    };
    fields.finish("Invalid wedding details data", WEDDING_FIELDS)?;
    Ok(patch)
}

fn object(body: &Value) -> Result<&Map<String, Value>, ApiError> {
    body.as_object().ok_or_else(|| {
        ApiError::new(
            ApiErrorCode::ValidationFailed,
            "request body must be a JSON object",
        )
    })
}

/// Field reader over one payload object. Accessors record violations instead
/// of failing, so every problem in the body is reported together; on a
/// violation they return a placeholder that [`Fields::finish`] prevents from
/// ever reaching the store.
struct Fields<'a> {
    map: &'a Map<String, Value>,
    violations: Vec<FieldViolation>,
}

impl<'a> Fields<'a> {
    fn new(map: &'a Map<String, Value>) -> Self {
        Self {
            map,
            violations: Vec::new(),
        }
    }

    fn violation(&mut self, field: &str, reason: impl Into<String>) {
        let value = self.map.get(field).cloned().unwrap_or(Value::Null);
        self.violations.push(FieldViolation::new(field, reason, value));
    }

    fn finish(mut self, message: &str, known: &[&str]) -> Result<(), ApiError> {
        let map = self.map;
        for key in map.keys() {
            if !known.contains(&key.as_str()) {
                self.violations.push(FieldViolation::new(
                    key,
                    "unknown field",
                    map.get(key).cloned().unwrap_or(Value::Null),
                ));
            }
        }
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation_failed(message, self.violations))
        }
    }

    fn required_string(&mut self, field: &str) -> String {
        match self.map.get(field) {
            None | Some(Value::Null) => {
                self.violation(field, "is required");
                String::new()
            }
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                self.violation(field, "must be a string");
                String::new()
            }
        }
    }

    fn optional_string(&mut self, field: &str) -> Option<String> {
        match self.map.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.violation(field, "must be a string");
                None
            }
        }
    }

    fn optional_email(&mut self, field: &str) -> Option<String> {
        let value = self.optional_string(field)?;
        if !value.is_empty() && !is_valid_email(&value) {
            self.violation(field, "must be a valid email address");
        }
        Some(value)
    }

    fn optional_url(&mut self, field: &str) -> Option<String> {
        let value = self.optional_string(field)?;
        if !value.is_empty() && !is_valid_url(&value) {
            self.violation(field, "must be a valid url");
        }
        Some(value)
    }

    fn bool_or(&mut self, field: &str, default: bool) -> bool {
        match self.map.get(field) {
            None | Some(Value::Null) => default,
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                self.violation(field, "must be a boolean");
                default
            }
        }
    }

    fn required_number(&mut self, field: &str) -> f64 {
        match self.map.get(field) {
            None | Some(Value::Null) => {
                self.violation(field, "is required");
                0.0
            }
            Some(value) => self.number_value(field, value).unwrap_or(0.0),
        }
    }

    fn number_or(&mut self, field: &str, default: f64) -> f64 {
        match self.map.get(field) {
            None | Some(Value::Null) => default,
            Some(value) => self.number_value(field, value).unwrap_or(default),
        }
    }

    fn optional_number(&mut self, field: &str) -> Option<f64> {
        match self.map.get(field) {
            None | Some(Value::Null) => None,
            Some(value) => self.number_value(field, value),
        }
    }

    fn required_int(&mut self, field: &str) -> i64 {
        match self.map.get(field) {
            None | Some(Value::Null) => {
                self.violation(field, "is required");
                0
            }
            Some(value) => self.int_value(field, value).unwrap_or(0),
        }
    }

    fn int_or(&mut self, field: &str, default: i64) -> i64 {
        match self.map.get(field) {
            None | Some(Value::Null) => default,
            Some(value) => self.int_value(field, value).unwrap_or(default),
        }
    }

    fn optional_int(&mut self, field: &str) -> Option<i64> {
        match self.map.get(field) {
            None | Some(Value::Null) => None,
            Some(value) => self.int_value(field, value),
        }
    }

    fn enum_or<T: Copy>(
        &mut self,
        field: &str,
        default: T,
        parse: fn(&str) -> Result<T, ParseError>,
    ) -> T {
        match self.map.get(field) {
            None | Some(Value::Null) => default,
            Some(Value::String(s)) => match parse(s) {
                Ok(parsed) => parsed,
                Err(err) => {
                    self.violation(field, err.to_string());
                    default
                }
            },
            Some(_) => {
                self.violation(field, "must be a string");
                default
            }
        }
    }

    fn patch_string(&mut self, field: &str) -> Option<String> {
        match self.map.get(field) {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) => {
                self.violation(field, "cannot be cleared to null");
                None
            }
            Some(_) => {
                self.violation(field, "must be a string");
                None
            }
        }
    }

    fn patch_nullable_string(&mut self, field: &str) -> Option<Option<String>> {
        match self.map.get(field) {
            None => None,
            Some(Value::Null) => Some(None),
            Some(Value::String(s)) => Some(Some(s.clone())),
            Some(_) => {
                self.violation(field, "must be a string or null");
                None
            }
        }
    }

    fn patch_nullable_email(&mut self, field: &str) -> Option<Option<String>> {
        let patch = self.patch_nullable_string(field)?;
        if let Some(value) = &patch {
            if !value.is_empty() && !is_valid_email(value) {
                self.violation(field, "must be a valid email address");
            }
        }
        Some(patch)
    }

    fn patch_nullable_url(&mut self, field: &str) -> Option<Option<String>> {
        let patch = self.patch_nullable_string(field)?;
        if let Some(value) = &patch {
            if !value.is_empty() && !is_valid_url(value) {
                self.violation(field, "must be a valid url");
            }
        }
        Some(patch)
    }

    fn patch_bool(&mut self, field: &str) -> Option<bool> {
        match self.map.get(field) {
            None => None,
            Some(Value::Bool(b)) => Some(*b),
            Some(Value::Null) => {
                self.violation(field, "cannot be cleared to null");
                None
            }
            Some(_) => {
                self.violation(field, "must be a boolean");
                None
            }
        }
    }

    fn patch_number(&mut self, field: &str) -> Option<f64> {
        match self.map.get(field) {
            None => None,
            Some(Value::Null) => {
                self.violation(field, "cannot be cleared to null");
                None
            }
            Some(value) => self.number_value(field, value),
        }
    }

    fn patch_nullable_number(&mut self, field: &str) -> Option<Option<f64>> {
        match self.map.get(field) {
            None => None,
            Some(Value::Null) => Some(None),
            Some(value) => self.number_value(field, value).map(Some),
        }
    }

    fn patch_int(&mut self, field: &str) -> Option<i64> {
        match self.map.get(field) {
            None => None,
            Some(Value::Null) => {
                self.violation(field, "cannot be cleared to null");
                None
            }
            Some(value) => self.int_value(field, value),
        }
    }

    fn patch_nullable_int(&mut self, field: &str) -> Option<Option<i64>> {
        match self.map.get(field) {
            None => None,
            Some(Value::Null) => Some(None),
            Some(value) => self.int_value(field, value).map(Some),
        }
    }

    fn patch_enum<T: Copy>(
        &mut self,
        field: &str,
        parse: fn(&str) -> Result<T, ParseError>,
    ) -> Option<T> {
        match self.map.get(field) {
            None => None,
            Some(Value::String(s)) => match parse(s) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    self.violation(field, err.to_string());
                    None
                }
            },
            Some(Value::Null) => {
                self.violation(field, "cannot be cleared to null");
                None
            }
            Some(_) => {
                self.violation(field, "must be a string");
                None
            }
        }
    }

    fn number_value(&mut self, field: &str, value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => match s.trim().parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => Some(parsed),
                _ => {
                    self.violation(field, "must be a number or a numeric string");
                    None
                }
            },
            _ => {
                self.violation(field, "must be a number or a numeric string");
                None
            }
        }
    }

    fn int_value(&mut self, field: &str, value: &Value) -> Option<i64> {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(parsed) => Some(parsed),
                None => {
                    self.violation(field, "must be an integer");
                    None
                }
            },
            Value::String(s) => match s.trim().parse::<i64>() {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    self.violation(field, "must be an integer");
                    None
                }
            },
            _ => {
                self.violation(field, "must be an integer");
                None
            }
        }
    }
}

fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn is_valid_url(value: &str) -> bool {
    let Some((scheme, rest)) = value.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    let scheme_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    scheme_ok && !rest.is_empty() && !rest.chars().any(char::is_whitespace)
}
