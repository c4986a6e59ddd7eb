#![forbid(unsafe_code)]
//! Entity model for the Rosewood wedding planner.
//!
//! Every collection entity carries a [`RecordId`] assigned by the store and
//! serializes with camelCase field names on the wire. For each entity there
//! are three shapes: the stored record, a `New*` struct holding validated
//! create input with defaults already applied, and a `*Patch` struct holding
//! a partial update where an unset field leaves the stored value untouched.

pub mod budget;
pub mod error;
pub mod guest;
pub mod seating;
pub mod task;
pub mod timeline;
pub mod vendor;
pub mod wedding;

pub use budget::{BudgetItem, BudgetItemPatch, NewBudgetItem};
pub use error::ParseError;
pub use guest::{Guest, GuestPatch, NewGuest, RsvpStatus};
pub use seating::{NewSeatingTable, SeatingTable, SeatingTablePatch, TableShape};
pub use task::{NewTask, Task, TaskPatch, TaskPriority};
pub use timeline::{NewTimelineEvent, TimelineEvent, TimelineEventPatch};
pub use vendor::{NewVendor, Vendor, VendorPatch};
pub use wedding::{WeddingDetails, WeddingDetailsPatch};

pub const CRATE_NAME: &str = "rosewood-model";

/// Record identifier. Ids are drawn from one process-wide counter, so a
/// given id is unique across all collections, not just within one.
pub type RecordId = u64;
