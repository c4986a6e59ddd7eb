// SPDX-License-Identifier: Apache-2.0

use crate::error::ParseError;
use crate::RecordId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableShape {
    #[default]
    Round,
    Rectangular,
}

impl TableShape {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Round => "round",
            Self::Rectangular => "rectangular",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ParseError> {
        match value {
            "round" => Ok(Self::Round),
            "rectangular" => Ok(Self::Rectangular),
            other => Err(ParseError::UnknownTableShape {
                value: other.to_string(),
            }),
        }
    }
}

/// A reception table on the seating-chart canvas.
///
/// `table_number` is what guests are assigned to; it is caller-chosen and the
/// store does not guarantee uniqueness. `position_x`/`position_y` are pixel
/// coordinates on the layout canvas, clamped by the editor, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeatingTable {
    pub id: RecordId,
    pub table_number: i64,
    pub capacity: i64,
    pub position_x: i64,
    pub position_y: i64,
    pub shape: TableShape,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSeatingTable {
    pub table_number: i64,
    pub capacity: i64,
    pub position_x: i64,
    pub position_y: i64,
    pub shape: TableShape,
}

impl NewSeatingTable {
    #[must_use]
    pub fn into_record(self, id: RecordId) -> SeatingTable {
        SeatingTable {
            id,
            table_number: self.table_number,
            capacity: self.capacity,
            position_x: self.position_x,
            position_y: self.position_y,
            shape: self.shape,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatingTablePatch {
    pub table_number: Option<i64>,
    pub capacity: Option<i64>,
    pub position_x: Option<i64>,
    pub position_y: Option<i64>,
    pub shape: Option<TableShape>,
}

impl SeatingTablePatch {
    pub fn apply(self, table: &mut SeatingTable) {
        if let Some(table_number) = self.table_number {
            table.table_number = table_number;
        }
        if let Some(capacity) = self.capacity {
            table.capacity = capacity;
        }
        if let Some(position_x) = self.position_x {
            table.position_x = position_x;
        }
        if let Some(position_y) = self.position_y {
            table.position_y = position_y;
        }
        if let Some(shape) = self.shape {
            table.shape = shape;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_parse_rejects_unknown_names() {
        assert_eq!(TableShape::parse("round"), Ok(TableShape::Round));
        assert_eq!(TableShape::parse("rectangular"), Ok(TableShape::Rectangular));
        TableShape::parse("oval").expect_err("'oval' is not a supported shape");
    }

    #[test]
    fn position_patch_moves_the_table_without_touching_capacity() {
        let mut table = NewSeatingTable {
            table_number: 1,
            capacity: 8,
            position_x: 0,
            position_y: 0,
            shape: TableShape::Round,
        }
        .into_record(2);
        SeatingTablePatch {
            position_x: Some(220),
            position_y: Some(140),
            ..SeatingTablePatch::default()
        }
        .apply(&mut table);
        assert_eq!((table.position_x, table.position_y), (220, 140));
        assert_eq!(table.capacity, 8);
    }
}
