use serde::{Deserialize, Serialize};
use skyfare_shared::TicketClass;
use uuid::Uuid;

use crate::seatmap::SEAT_LETTERS;

/// Fixed three-cabin seating configuration of an airframe. Capacities are
/// immutable once flights reference the aircraft; a reconfigured hull does
/// not renumber seats on already-issued tickets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aircraft {
    pub id: Uuid,
    pub code: String,
    pub model: String,
    pub business_capacity: u32,
    pub premium_capacity: u32,
    pub economy_capacity: u32,
}

impl Aircraft {
    pub fn new(
        code: impl Into<String>,
        model: impl Into<String>,
        business_capacity: u32,
        premium_capacity: u32,
        economy_capacity: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.into(),
            model: model.into(),
            business_capacity,
            premium_capacity,
            economy_capacity,
        }
    }

    pub fn capacity_for(&self, class: TicketClass) -> u32 {
        match class {
            TicketClass::Business => self.business_capacity,
            TicketClass::Premium => self.premium_capacity,
            TicketClass::Economy => self.economy_capacity,
        }
    }

    pub fn total_capacity(&self) -> u32 {
        self.business_capacity + self.premium_capacity + self.economy_capacity
    }

    /// Number of seat rows a cabin spans: ceil(capacity / letters-per-row),
    /// 0 for an empty cabin.
    pub fn rows_for_class(&self, class: TicketClass) -> u32 {
        let letters = SEAT_LETTERS.len() as u32;
        (self.capacity_for(class) + letters - 1) / letters
    }

    /// Inclusive global row band of a cabin. Rows start at 1 for Business
    /// and stay contiguous through Premium and Economy. A zero-capacity
    /// cabin yields an empty band no seat can fall into.
    pub fn row_range(&self, class: TicketClass) -> (u32, u32) {
        let business = self.rows_for_class(TicketClass::Business);
        let premium = self.rows_for_class(TicketClass::Premium);

        match class {
            TicketClass::Business => (1, business),
            TicketClass::Premium => (business + 1, business + premium),
            TicketClass::Economy => (
                business + premium + 1,
                business + premium + self.rows_for_class(TicketClass::Economy),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aircraft(business: u32, premium: u32, economy: u32) -> Aircraft {
        Aircraft::new("OK-XYZ", "A320", business, premium, economy)
    }

    #[test]
    fn test_rows_for_class() {
        let a = aircraft(12, 23, 79);
        assert_eq!(a.rows_for_class(TicketClass::Business), 2);
        assert_eq!(a.rows_for_class(TicketClass::Premium), 4);
        assert_eq!(a.rows_for_class(TicketClass::Economy), 14);

        let empty = aircraft(0, 0, 0);
        assert_eq!(empty.rows_for_class(TicketClass::Business), 0);
    }

    #[test]
    fn test_row_ranges_are_contiguous() {
        let a = aircraft(12, 23, 79);
        assert_eq!(a.row_range(TicketClass::Business), (1, 2));
        assert_eq!(a.row_range(TicketClass::Premium), (3, 6));
        assert_eq!(a.row_range(TicketClass::Economy), (7, 20));

        let b = aircraft(12, 50, 90);
        assert_eq!(b.row_range(TicketClass::Premium), (3, 11));
        assert_eq!(b.row_range(TicketClass::Economy), (12, 26));
    }

    #[test]
    fn test_zero_capacity_band_is_empty() {
        let a = aircraft(0, 23, 79);
        let (start, end) = a.row_range(TicketClass::Business);
        assert!(start > end);
        // Premium still starts at row 1 when there is no business cabin.
        assert_eq!(a.row_range(TicketClass::Premium), (1, 4));
    }

    #[test]
    fn test_total_capacity() {
        assert_eq!(aircraft(12, 23, 79).total_capacity(), 114);
        assert_eq!(aircraft(0, 0, 0).total_capacity(), 0);
    }
}
