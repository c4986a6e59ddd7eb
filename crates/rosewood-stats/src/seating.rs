// SPDX-License-Identifier: Apache-2.0

use rosewood_model::{Guest, SeatingTable};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOccupancy {
    pub table: SeatingTable,
    pub seated: u64,
    /// capacity − seated; negative when the table is over-assigned.
    pub available: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatingOverview {
    pub tables: Vec<TableOccupancy>,
    pub total_capacity: i64,
    pub seated: u64,
    pub unassigned: u64,
    /// Guests whose assignment matches no existing table number. Writes never
    /// check the reference, so this is where the gap becomes visible.
    pub dangling: u64,
}

/// Occupancy is matched by table *number*, not record id. Tables sharing a
/// number each count the same guests.
#[must_use]
pub fn seating_overview(tables: &[SeatingTable], guests: &[Guest]) -> SeatingOverview {
    let occupancies = tables
        .iter()
        .map(|table| {
            let seated = guests
                .iter()
                .filter(|g| g.table_assignment == Some(table.table_number))
                .count() as u64;
            TableOccupancy {
                table: table.clone(),
                seated,
                available: table.capacity - seated as i64,
            }
        })
        .collect();

    let numbers: BTreeSet<i64> = tables.iter().map(|t| t.table_number).collect();
    let mut seated: u64 = 0;
    let mut unassigned: u64 = 0;
    let mut dangling: u64 = 0;
    for guest in guests {
        match guest.table_assignment {
            None => unassigned += 1,
            Some(number) if numbers.contains(&number) => seated += 1,
            Some(_) => dangling += 1,
        }
    }

    SeatingOverview {
        tables: occupancies,
        total_capacity: tables.iter().map(|t| t.capacity).sum(),
        seated,
        unassigned,
        dangling,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosewood_model::{NewGuest, NewSeatingTable, RsvpStatus, TableShape};

    fn table(id: u64, number: i64, capacity: i64) -> SeatingTable {
        NewSeatingTable {
            table_number: number,
            capacity,
            position_x: 0,
            position_y: 0,
            shape: TableShape::Round,
        }
        .into_record(id)
    }

    fn guest(id: u64, assignment: Option<i64>) -> Guest {
        NewGuest {
            name: format!("guest-{id}"),
            email: None,
            phone: None,
            rsvp_status: RsvpStatus::Pending,
            plus_one: false,
            dietary_restrictions: None,
            table_assignment: assignment,
            notes: None,
        }
        .into_record(id)
    }

    #[test]
    fn available_is_capacity_minus_occupancy() {
        let tables = [table(1, 1, 8)];
        let guests = [guest(2, Some(1)), guest(3, Some(1)), guest(4, Some(1))];
        let overview = seating_overview(&tables, &guests);
        assert_eq!(overview.tables[0].seated, 3);
        assert_eq!(overview.tables[0].available, 5);
        assert_eq!(overview.total_capacity, 8);
        assert_eq!(overview.seated, 3);
    }

    #[test]
    fn over_assignment_goes_negative() {
        let tables = [table(1, 1, 2)];
        let guests = [guest(2, Some(1)), guest(3, Some(1)), guest(4, Some(1))];
        let overview = seating_overview(&tables, &guests);
        assert_eq!(overview.tables[0].available, -1);
    }

    #[test]
    fn duplicate_table_numbers_each_count_the_same_guests() {
        let tables = [table(1, 5, 8), table(2, 5, 4)];
        let guests = [guest(3, Some(5)), guest(4, Some(5))];
        let overview = seating_overview(&tables, &guests);
        assert_eq!(overview.tables[0].seated, 2);
        assert_eq!(overview.tables[1].seated, 2);
        // The guests themselves are still only two people.
        assert_eq!(overview.seated, 2);
    }

    #[test]
    fn dangling_assignments_are_counted_not_dropped() {
        let tables = [table(1, 1, 8)];
        let guests = [guest(2, Some(9)), guest(3, None)];
        let overview = seating_overview(&tables, &guests);
        assert_eq!(overview.dangling, 1);
        assert_eq!(overview.unassigned, 1);
        assert_eq!(overview.seated, 0);
    }
}
