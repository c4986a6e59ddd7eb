#![forbid(unsafe_code)]
//! In-memory record store.
//!
//! One [`PlannerStore`] holds every collection behind its own
//! `tokio::sync::RwLock`, so an individual operation is atomic with respect
//! to other requests but there are no cross-collection transactions. Ids come
//! from a single shared counter, which makes every id unique across the whole
//! process, not just within its collection. Snapshots come back in insertion
//! order (the maps are keyed by the monotonic id).
//!
//! Store operations never fail: absence is reported as `None`/`false`, and
//! inputs are assumed to be validated upstream.

use rosewood_model::{
    BudgetItem, BudgetItemPatch, Guest, GuestPatch, NewBudgetItem, NewGuest, NewSeatingTable,
    NewTask, NewTimelineEvent, NewVendor, RecordId, SeatingTable, SeatingTablePatch, Task,
    TaskPatch, TimelineEvent, TimelineEventPatch, Vendor, VendorPatch, WeddingDetails,
    WeddingDetailsPatch,
};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

pub const CRATE_NAME: &str = "rosewood-store";

/// One keyed collection. Values are cloned out so callers never hold a lock.
struct Collection<T> {
    rows: RwLock<BTreeMap<RecordId, T>>,
}

impl<T: Clone> Collection<T> {
    fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
        }
    }

    async fn list(&self) -> Vec<T> {
        self.rows.read().await.values().cloned().collect()
    }

    async fn get(&self, id: RecordId) -> Option<T> {
        self.rows.read().await.get(&id).cloned()
    }

    async fn insert(&self, id: RecordId, row: T) -> T {
        let mut rows = self.rows.write().await;
        rows.insert(id, row.clone());
        row
    }

    async fn update(&self, id: RecordId, apply: impl FnOnce(&mut T)) -> Option<T> {
        let mut rows = self.rows.write().await;
        let row = rows.get_mut(&id)?;
        apply(row);
        Some(row.clone())
    }

    async fn remove(&self, id: RecordId) -> bool {
        self.rows.write().await.remove(&id).is_some()
    }
}

/// Process-wide planner state: six record collections plus the wedding
/// details singleton.
pub struct PlannerStore {
    id_seed: AtomicU64,
    guests: Collection<Guest>,
    budget_items: Collection<BudgetItem>,
    timeline_events: Collection<TimelineEvent>,
    tasks: Collection<Task>,
    vendors: Collection<Vendor>,
    seating_tables: Collection<SeatingTable>,
    wedding: RwLock<WeddingDetails>,
}

impl PlannerStore {
    /// Builds an empty store and seeds the wedding details singleton, which
    /// consumes the first id from the shared counter.
    #[must_use]
    pub fn new() -> Self {
        let id_seed = AtomicU64::new(1);
        let details = WeddingDetails {
            id: id_seed.fetch_add(1, Ordering::Relaxed),
            bride_name: "Sarah".to_string(),
            groom_name: "Michael".to_string(),
            wedding_date: "2024-06-15".to_string(),
            venue: "Rosewood Manor".to_string(),
            total_budget: 40000.0,
        };
        Self {
            id_seed,
            guests: Collection::new(),
            budget_items: Collection::new(),
            timeline_events: Collection::new(),
            tasks: Collection::new(),
            vendors: Collection::new(),
            seating_tables: Collection::new(),
            wedding: RwLock::new(details),
        }
    }

    fn next_id(&self) -> RecordId {
        self.id_seed.fetch_add(1, Ordering::Relaxed)
    }

    pub async fn guests(&self) -> Vec<Guest> {
        self.guests.list().await
    }

    pub async fn guest(&self, id: RecordId) -> Option<Guest> {
        self.guests.get(id).await
    }

    pub async fn create_guest(&self, fields: NewGuest) -> Guest {
        let id = self.next_id();
        self.guests.insert(id, fields.into_record(id)).await
    }

    pub async fn update_guest(&self, id: RecordId, patch: GuestPatch) -> Option<Guest> {
        self.guests.update(id, |guest| patch.apply(guest)).await
    }

    pub async fn delete_guest(&self, id: RecordId) -> bool {
        self.guests.remove(id).await
    }

    pub async fn budget_items(&self) -> Vec<BudgetItem> {
        self.budget_items.list().await
    }

    pub async fn budget_item(&self, id: RecordId) -> Option<BudgetItem> {
        self.budget_items.get(id).await
    }

    pub async fn create_budget_item(&self, fields: NewBudgetItem) -> BudgetItem {
        let id = self.next_id();
        self.budget_items.insert(id, fields.into_record(id)).await
    }

    pub async fn update_budget_item(
        &self,
        id: RecordId,
        patch: BudgetItemPatch,
    ) -> Option<BudgetItem> {
        self.budget_items.update(id, |item| patch.apply(item)).await
    }

    pub async fn delete_budget_item(&self, id: RecordId) -> bool {
        self.budget_items.remove(id).await
    }

    pub async fn timeline_events(&self) -> Vec<TimelineEvent> {
        self.timeline_events.list().await
    }

    pub async fn timeline_event(&self, id: RecordId) -> Option<TimelineEvent> {
        self.timeline_events.get(id).await
    }

    pub async fn create_timeline_event(&self, fields: NewTimelineEvent) -> TimelineEvent {
        let id = self.next_id();
        self.timeline_events.insert(id, fields.into_record(id)).await
    }

    pub async fn update_timeline_event(
        &self,
        id: RecordId,
        patch: TimelineEventPatch,
    ) -> Option<TimelineEvent> {
        self.timeline_events.update(id, |event| patch.apply(event)).await
    }

    pub async fn delete_timeline_event(&self, id: RecordId) -> bool {
        self.timeline_events.remove(id).await
    }

    pub async fn tasks(&self) -> Vec<Task> {
        self.tasks.list().await
    }

    pub async fn task(&self, id: RecordId) -> Option<Task> {
        self.tasks.get(id).await
    }

    pub async fn create_task(&self, fields: NewTask) -> Task {
        let id = self.next_id();
        self.tasks.insert(id, fields.into_record(id)).await
    }

    pub async fn update_task(&self, id: RecordId, patch: TaskPatch) -> Option<Task> {
        self.tasks.update(id, |task| patch.apply(task)).await
    }

    pub async fn delete_task(&self, id: RecordId) -> bool {
        self.tasks.remove(id).await
    }

    pub async fn vendors(&self) -> Vec<Vendor> {
        self.vendors.list().await
    }

    pub async fn vendor(&self, id: RecordId) -> Option<Vendor> {
        self.vendors.get(id).await
    }

    pub async fn create_vendor(&self, fields: NewVendor) -> Vendor {
        let id = self.next_id();
        self.vendors.insert(id, fields.into_record(id)).await
    }

    pub async fn update_vendor(&self, id: RecordId, patch: VendorPatch) -> Option<Vendor> {
        self.vendors.update(id, |vendor| patch.apply(vendor)).await
    }

    pub async fn delete_vendor(&self, id: RecordId) -> bool {
        self.vendors.remove(id).await
    }

    pub async fn seating_tables(&self) -> Vec<SeatingTable> {
        self.seating_tables.list().await
    }

    pub async fn seating_table(&self, id: RecordId) -> Option<SeatingTable> {
        self.seating_tables.get(id).await
    }

    pub async fn create_seating_table(&self, fields: NewSeatingTable) -> SeatingTable {
        let id = self.next_id();
        self.seating_tables.insert(id, fields.into_record(id)).await
    }

    /// Renumbering or deleting a table does not touch guests that reference
    /// its old number; dangling assignments are surfaced by the seating
    /// overview instead.
    pub async fn update_seating_table(
        &self,
        id: RecordId,
        patch: SeatingTablePatch,
    ) -> Option<SeatingTable> {
        self.seating_tables.update(id, |table| patch.apply(table)).await
    }

    pub async fn delete_seating_table(&self, id: RecordId) -> bool {
        self.seating_tables.remove(id).await
    }

    pub async fn wedding_details(&self) -> WeddingDetails {
        self.wedding.read().await.clone()
    }

    pub async fn update_wedding_details(&self, patch: WeddingDetailsPatch) -> WeddingDetails {
        let mut details = self.wedding.write().await;
        patch.apply(&mut details);
        details.clone()
    }
}

impl Default for PlannerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosewood_model::RsvpStatus;

    fn new_guest(name: &str) -> NewGuest {
        NewGuest {
            name: name.to_string(),
            email: None,
            phone: None,
            rsvp_status: RsvpStatus::Pending,
            plus_one: false,
            dietary_restrictions: None,
            table_assignment: None,
            notes: None,
        }
    }

    fn new_task(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: None,
            is_completed: false,
            due_date: None,
            priority: rosewood_model::TaskPriority::Medium,
            category: None,
        }
    }

    #[tokio::test]
    async fn ids_are_unique_across_collections() {
        let store = PlannerStore::new();
        // Seeded wedding details hold id 1.
        assert_eq!(store.wedding_details().await.id, 1);
        let guest = store.create_guest(new_guest("Amina Khan")).await;
        let task = store.create_task(new_task("Send invitations")).await;
        let table = store
            .create_seating_table(NewSeatingTable {
                table_number: 1,
                capacity: 8,
                position_x: 0,
                position_y: 0,
                shape: rosewood_model::TableShape::Round,
            })
            .await;
        assert_eq!(guest.id, 2);
        assert_eq!(task.id, 3);
        assert_eq!(table.id, 4);
    }

    #[tokio::test]
    async fn create_then_get_returns_the_stored_record() {
        let store = PlannerStore::new();
        let created = store.create_guest(new_guest("Amina Khan")).await;
        let fetched = store.guest(created.id).await.expect("guest must exist");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn empty_patch_returns_the_record_unchanged() {
        let store = PlannerStore::new();
        let created = store.create_guest(new_guest("Amina Khan")).await;
        let updated = store
            .update_guest(created.id, GuestPatch::default())
            .await
            .expect("guest must exist");
        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn update_on_unknown_id_does_not_create_a_record() {
        let store = PlannerStore::new();
        let result = store.update_guest(999, GuestPatch::default()).await;
        assert!(result.is_none());
        assert!(store.guests().await.is_empty());
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record_and_is_idempotent() {
        let store = PlannerStore::new();
        let a = store.create_guest(new_guest("Amina Khan")).await;
        let _b = store.create_guest(new_guest("Noah Reyes")).await;
        assert_eq!(store.guests().await.len(), 2);
        assert!(store.delete_guest(a.id).await);
        assert_eq!(store.guests().await.len(), 1);
        assert!(!store.delete_guest(a.id).await);
        assert_eq!(store.guests().await.len(), 1);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = PlannerStore::new();
        let names = ["Amina Khan", "Noah Reyes", "Wei Chen"];
        for name in names {
            store.create_guest(new_guest(name)).await;
        }
        let listed: Vec<String> = store.guests().await.into_iter().map(|g| g.name).collect();
        assert_eq!(listed, names);
    }

    #[tokio::test]
    async fn wedding_details_are_seeded_and_merge_on_update() {
        let store = PlannerStore::new();
        let seeded = store.wedding_details().await;
        assert_eq!(seeded.bride_name, "Sarah");
        assert_eq!(seeded.venue, "Rosewood Manor");
        assert_eq!(seeded.total_budget, 40000.0);

        let updated = store
            .update_wedding_details(WeddingDetailsPatch {
                venue: Some("Lakeside Pavilion".to_string()),
                ..WeddingDetailsPatch::default()
            })
            .await;
        assert_eq!(updated.venue, "Lakeside Pavilion");
        assert_eq!(updated.bride_name, "Sarah");
        assert_eq!(updated.id, seeded.id);
    }

    #[tokio::test]
    async fn deleting_a_table_leaves_guest_assignments_in_place() {
        let store = PlannerStore::new();
        let table = store
            .create_seating_table(NewSeatingTable {
                table_number: 3,
                capacity: 8,
                position_x: 0,
                position_y: 0,
                shape: rosewood_model::TableShape::Round,
            })
            .await;
        let guest = store.create_guest(new_guest("Amina Khan")).await;
        store
            .update_guest(
                guest.id,
                GuestPatch {
                    table_assignment: Some(Some(3)),
                    ..GuestPatch::default()
                },
            )
            .await
            .expect("guest must exist");
        assert!(store.delete_seating_table(table.id).await);
        let after = store.guest(guest.id).await.expect("guest must exist");
        assert_eq!(after.table_assignment, Some(3));
    }
}
