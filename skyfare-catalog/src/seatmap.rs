use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use skyfare_shared::TicketClass;

use crate::aircraft::Aircraft;

/// Seat letters within a row, in allocation order.
pub const SEAT_LETTERS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// The full set of allocatable seat identifiers for one aircraft,
/// partitioned by cabin. Derived data, never persisted. Per-cabin lists
/// keep row-major, letter-major order, which is also the auto-assignment
/// priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatMap {
    by_class: HashMap<TicketClass, Vec<String>>,
}

impl SeatMap {
    /// Walks the cabins front to back, emitting exactly `capacity`
    /// identifiers per cabin. Row numbering continues into the next cabin
    /// even when the previous cabin fills only part of its last row, so
    /// row numbers stay globally unique; the unfilled tail of a partial
    /// row is simply never allocatable.
    pub fn build(aircraft: &Aircraft) -> Self {
        let mut by_class = HashMap::new();
        let mut row = 1u32;

        for class in TicketClass::ALL {
            let capacity = aircraft.capacity_for(class) as usize;
            let mut seats = Vec::with_capacity(capacity);

            while seats.len() < capacity {
                for letter in SEAT_LETTERS {
                    if seats.len() == capacity {
                        break;
                    }
                    seats.push(format!("{row}{letter}"));
                }
                row += 1;
            }

            by_class.insert(class, seats);
        }

        SeatMap { by_class }
    }

    pub fn class(&self, class: TicketClass) -> &[String] {
        self.by_class
            .get(&class)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn total_seats(&self) -> usize {
        self.by_class.values().map(Vec::len).sum()
    }
}

/// Splits a seat identifier into row and letter. Surrounding whitespace is
/// trimmed; anything but digits followed by a single letter from the
/// allowed set is rejected. Lowercase letters do not match.
pub fn parse_seat_number(seat: &str) -> Option<(u32, char)> {
    let seat = seat.trim();
    let split = seat.find(|c: char| !c.is_ascii_digit())?;
    let (digits, rest) = seat.split_at(split);
    if digits.is_empty() {
        return None;
    }

    let mut chars = rest.chars();
    let letter = chars.next()?;
    if chars.next().is_some() || !SEAT_LETTERS.contains(&letter) {
        return None;
    }

    let row = digits.parse::<u32>().ok()?;
    Some((row, letter))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aircraft(business: u32, premium: u32, economy: u32) -> Aircraft {
        Aircraft::new("OK-XYZ", "A320", business, premium, economy)
    }

    #[test]
    fn test_every_cabin_has_exactly_capacity_seats() {
        let map = SeatMap::build(&aircraft(12, 23, 79));
        assert_eq!(map.class(TicketClass::Business).len(), 12);
        assert_eq!(map.class(TicketClass::Premium).len(), 23);
        assert_eq!(map.class(TicketClass::Economy).len(), 79);
        assert_eq!(map.total_seats(), 114);
    }

    #[test]
    fn test_cabins_are_row_contiguous_and_disjoint() {
        let map = SeatMap::build(&aircraft(12, 23, 79));

        assert_eq!(map.class(TicketClass::Business).first().unwrap(), "1A");
        assert_eq!(map.class(TicketClass::Business).last().unwrap(), "2F");

        // Premium caps out mid-row; its last seat is 6E and row 6F is a
        // dead slot that never appears anywhere.
        assert_eq!(map.class(TicketClass::Premium).first().unwrap(), "3A");
        assert_eq!(map.class(TicketClass::Premium).last().unwrap(), "6E");

        assert_eq!(map.class(TicketClass::Economy).first().unwrap(), "7A");

        let mut all: Vec<&String> = TicketClass::ALL
            .iter()
            .flat_map(|&c| map.class(c).iter())
            .collect();
        let before = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), before);
    }

    #[test]
    fn test_empty_cabin_emits_nothing() {
        let map = SeatMap::build(&aircraft(0, 6, 0));
        assert!(map.class(TicketClass::Business).is_empty());
        assert_eq!(map.class(TicketClass::Premium).first().unwrap(), "1A");
        assert!(map.class(TicketClass::Economy).is_empty());
    }

    #[test]
    fn test_parse_seat_number() {
        assert_eq!(parse_seat_number("1A"), Some((1, 'A')));
        assert_eq!(parse_seat_number("20C"), Some((20, 'C')));
        assert_eq!(parse_seat_number("  4F "), Some((4, 'F')));
        assert_eq!(parse_seat_number("0A"), Some((0, 'A')));

        assert_eq!(parse_seat_number("A1"), None);
        assert_eq!(parse_seat_number("4X"), None);
        assert_eq!(parse_seat_number("4f"), None);
        assert_eq!(parse_seat_number("12"), None);
        assert_eq!(parse_seat_number("12AA"), None);
        assert_eq!(parse_seat_number(""), None);
    }
}
