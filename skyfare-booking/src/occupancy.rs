use std::collections::{HashMap, HashSet};

use skyfare_catalog::aircraft::Aircraft;
use skyfare_catalog::seatmap::{self, SeatMap};
use skyfare_shared::TicketClass;

use crate::models::Flight;
use crate::{BookingError, BookingResult};

/// One flight's seat inventory, computed from the aircraft and the live
/// ticket set. Builds the derived seat map once so the several questions
/// a single lifecycle operation asks do not recompute it.
pub struct SeatInventory<'f> {
    flight: &'f Flight,
    aircraft: &'f Aircraft,
    map: SeatMap,
}

impl<'f> SeatInventory<'f> {
    pub fn new(flight: &'f Flight) -> BookingResult<Self> {
        let aircraft = flight.aircraft.as_ref().ok_or(BookingError::InvalidFlight)?;
        Ok(Self {
            flight,
            aircraft,
            map: SeatMap::build(aircraft),
        })
    }

    pub fn all_seats(&self, class: TicketClass) -> &[String] {
        self.map.class(class)
    }

    /// Seats taken in one cabin, bucketed by the class stored on each
    /// ticket.
    pub fn occupied_seats(&self, class: TicketClass) -> Vec<String> {
        self.flight
            .tickets
            .iter()
            .filter(|t| t.ticket_class == class)
            .filter_map(|t| t.seat_number.clone())
            .collect()
    }

    /// All minus occupied, preserving row-major order; the head of the
    /// list is the next seat auto-assignment hands out.
    pub fn available_seats(&self, class: TicketClass) -> Vec<String> {
        let occupied = self.occupied_set(class);
        self.map
            .class(class)
            .iter()
            .filter(|seat| !occupied.contains(seat.as_str()))
            .cloned()
            .collect()
    }

    pub fn first_available(&self, class: TicketClass) -> Option<String> {
        if !self.is_class_available(class) {
            return None;
        }
        let occupied = self.occupied_set(class);
        self.map
            .class(class)
            .iter()
            .find(|seat| !occupied.contains(seat.as_str()))
            .cloned()
    }

    /// Ticket-count capacity check; a sold but not yet seated ticket still
    /// consumes one place in its cabin.
    pub fn is_class_available(&self, class: TicketClass) -> bool {
        let sold = self
            .flight
            .tickets
            .iter()
            .filter(|t| t.ticket_class == class)
            .count();
        sold < self.aircraft.capacity_for(class) as usize
    }

    /// Structural validity only: the row must land inside the cabin's band
    /// and the letter must be one of the six allowed. Occupancy is a
    /// separate question.
    pub fn is_seat_number_valid(&self, class: TicketClass, seat: &str) -> bool {
        let Some((row, _)) = seatmap::parse_seat_number(seat) else {
            return false;
        };
        let (start, end) = self.aircraft.row_range(class);
        row >= start && row <= end
    }

    /// Taken by any ticket on the flight, whatever cabin that ticket
    /// claims. Deliberately global across cabins, unlike the per-cabin
    /// occupancy buckets.
    pub fn is_seat_number_occupied(&self, seat: &str) -> bool {
        let seat = seat.trim();
        self.flight
            .tickets
            .iter()
            .any(|t| t.seat_number.as_deref() == Some(seat))
    }

    fn occupied_set(&self, class: TicketClass) -> HashSet<&'f str> {
        self.flight
            .tickets
            .iter()
            .filter(|t| t.ticket_class == class)
            .filter_map(|t| t.seat_number.as_deref())
            .collect()
    }
}

/// Every allocatable seat of the flight's aircraft, per cabin.
pub fn all_seats(flight: &Flight) -> BookingResult<HashMap<TicketClass, Vec<String>>> {
    let inventory = SeatInventory::new(flight)?;
    Ok(TicketClass::ALL
        .iter()
        .map(|&class| (class, inventory.all_seats(class).to_vec()))
        .collect())
}

/// Seats currently held by tickets, per cabin. Works without an aircraft
/// since it only reads the ticket set.
pub fn occupied_seats(flight: &Flight) -> HashMap<TicketClass, Vec<String>> {
    let mut by_class: HashMap<TicketClass, Vec<String>> = TicketClass::ALL
        .iter()
        .map(|&class| (class, Vec::new()))
        .collect();

    for ticket in &flight.tickets {
        if let Some(seat) = &ticket.seat_number {
            if let Some(bucket) = by_class.get_mut(&ticket.ticket_class) {
                bucket.push(seat.clone());
            }
        }
    }

    by_class
}

pub fn available_seats(flight: &Flight) -> BookingResult<HashMap<TicketClass, Vec<String>>> {
    let inventory = SeatInventory::new(flight)?;
    Ok(TicketClass::ALL
        .iter()
        .map(|&class| (class, inventory.available_seats(class)))
        .collect())
}

/// First open seat of the cabin, or `None` when the flight has no
/// aircraft or the cabin is at capacity.
pub fn issue_seat_number(flight: &Flight, class: TicketClass) -> Option<String> {
    SeatInventory::new(flight).ok()?.first_available(class)
}

pub fn is_ticket_class_available(flight: &Flight, class: TicketClass) -> bool {
    match SeatInventory::new(flight) {
        Ok(inventory) => inventory.is_class_available(class),
        Err(_) => false,
    }
}

pub fn is_seat_number_valid(flight: &Flight, class: TicketClass, seat: &str) -> bool {
    match SeatInventory::new(flight) {
        Ok(inventory) => inventory.is_seat_number_valid(class, seat),
        Err(_) => false,
    }
}

pub fn is_seat_number_occupied(flight: &Flight, seat: &str) -> bool {
    let seat = seat.trim();
    flight
        .tickets
        .iter()
        .any(|t| t.seat_number.as_deref() == Some(seat))
}

/// Bookable flights that still have at least one seat left.
pub fn flights_with_open_capacity(flights: &[Flight]) -> Vec<&Flight> {
    flights.iter().filter(|f| f.has_open_capacity()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ticket;
    use chrono::Utc;
    use skyfare_catalog::{Airport, FareTariff};
    use uuid::Uuid;

    fn flight(business: u32, premium: u32, economy: u32) -> Flight {
        Flight::new(
            "SF001",
            Utc::now(),
            Utc::now(),
            Some(Aircraft::new("OK-XYZ", "A320", business, premium, economy)),
            Airport::new("PRG", "Prague", "CZ", "CZ-10", 50.1008, 14.26),
            Airport::new("VIE", "Vienna", "AT", "AT-9", 48.1103, 16.5697),
            FareTariff::new("STD", 5000.0, 2500.0, 1000.0).unwrap(),
        )
    }

    fn seat_ticket(flight: &Flight, class: TicketClass, seat: &str) -> Ticket {
        let mut ticket = Ticket::new(flight, Uuid::new_v4(), class, "TK", "Jane Doe", None);
        ticket.seat_number = Some(seat.to_string());
        ticket
    }

    fn fill_sequentially(fl: &mut Flight, class: TicketClass, count: usize) {
        for _ in 0..count {
            let seat = issue_seat_number(fl, class).unwrap();
            let ticket = seat_ticket(fl, class, &seat);
            fl.tickets.push(ticket);
        }
    }

    #[test]
    fn test_issue_first_seats_per_cabin() {
        let fl = flight(12, 23, 79);
        assert_eq!(issue_seat_number(&fl, TicketClass::Business).unwrap(), "1A");
        assert_eq!(issue_seat_number(&fl, TicketClass::Premium).unwrap(), "3A");
        assert_eq!(issue_seat_number(&fl, TicketClass::Economy).unwrap(), "7A");
    }

    #[test]
    fn test_issue_with_partial_occupancy() {
        let mut fl = flight(12, 50, 90);
        fill_sequentially(&mut fl, TicketClass::Business, 3);
        fill_sequentially(&mut fl, TicketClass::Premium, 6);
        fill_sequentially(&mut fl, TicketClass::Economy, 50);

        assert_eq!(issue_seat_number(&fl, TicketClass::Business).unwrap(), "1D");
        assert_eq!(issue_seat_number(&fl, TicketClass::Premium).unwrap(), "4A");
        assert_eq!(issue_seat_number(&fl, TicketClass::Economy).unwrap(), "20C");
    }

    #[test]
    fn test_issue_fails_without_aircraft_or_capacity() {
        let mut fl = flight(1, 0, 0);
        assert!(issue_seat_number(&fl, TicketClass::Premium).is_none());

        fill_sequentially(&mut fl, TicketClass::Business, 1);
        assert!(issue_seat_number(&fl, TicketClass::Business).is_none());

        fl.aircraft = None;
        assert!(issue_seat_number(&fl, TicketClass::Economy).is_none());
        assert!(matches!(
            all_seats(&fl),
            Err(BookingError::InvalidFlight)
        ));
    }

    #[test]
    fn test_available_is_all_minus_occupied() {
        let mut fl = flight(12, 23, 79);
        let before = available_seats(&fl).unwrap();
        assert_eq!(before[&TicketClass::Economy].len(), 79);

        let seat = issue_seat_number(&fl, TicketClass::Economy).unwrap();
        let ticket = seat_ticket(&fl, TicketClass::Economy, &seat);
        fl.tickets.push(ticket);

        let after = available_seats(&fl).unwrap();
        assert_eq!(after[&TicketClass::Economy].len(), 78);
        assert!(!after[&TicketClass::Economy].contains(&seat));
        // Repeating the query does not change anything.
        assert_eq!(available_seats(&fl).unwrap(), after);
    }

    #[test]
    fn test_seat_validity_boundaries() {
        let fl = flight(12, 50, 90);

        for seat in ["1A", "1D", "2F"] {
            assert!(is_seat_number_valid(&fl, TicketClass::Business, seat), "{seat}");
        }
        assert!(!is_seat_number_valid(&fl, TicketClass::Business, "3A"));

        for seat in ["3A", "4E", "6F", "11F"] {
            assert!(is_seat_number_valid(&fl, TicketClass::Premium, seat), "{seat}");
        }
        assert!(!is_seat_number_valid(&fl, TicketClass::Premium, "2F"));
        assert!(!is_seat_number_valid(&fl, TicketClass::Premium, "12A"));

        assert!(is_seat_number_valid(&fl, TicketClass::Economy, "12A"));
        assert!(is_seat_number_valid(&fl, TicketClass::Economy, "26F"));
        assert!(!is_seat_number_valid(&fl, TicketClass::Economy, "27A"));
    }

    #[test]
    fn test_seat_validity_rejects_malformed_tokens() {
        let fl = flight(12, 50, 90);
        for seat in ["A1", "0A", "4X", "4e", "", "  ", "12", "1AA"] {
            assert!(!is_seat_number_valid(&fl, TicketClass::Business, seat), "{seat}");
        }
    }

    #[test]
    fn test_occupied_is_global_across_cabins() {
        let mut fl = flight(12, 23, 79);
        // Ticket claiming Economy while sitting on a business-row seat.
        let ticket = seat_ticket(&fl, TicketClass::Economy, "1A");
        fl.tickets.push(ticket);

        assert!(is_seat_number_occupied(&fl, "1A"));
        assert!(is_seat_number_occupied(&fl, " 1A "));
        assert!(!is_seat_number_occupied(&fl, "1B"));

        // The per-cabin buckets keep the ticket's claimed class.
        let occupied = occupied_seats(&fl);
        assert_eq!(occupied[&TicketClass::Economy], vec!["1A".to_string()]);
        assert!(occupied[&TicketClass::Business].is_empty());
    }

    #[test]
    fn test_class_availability_counts_unseated_tickets() {
        let mut fl = flight(2, 0, 0);
        let first = Ticket::new(&fl, Uuid::new_v4(), TicketClass::Business, "TK", "Jane Doe", None);
        fl.tickets.push(first);
        assert!(is_ticket_class_available(&fl, TicketClass::Business));

        let second = Ticket::new(&fl, Uuid::new_v4(), TicketClass::Business, "TK", "John Doe", None);
        fl.tickets.push(second);
        assert!(!is_ticket_class_available(&fl, TicketClass::Business));
    }

    #[test]
    fn test_flights_with_open_capacity() {
        let mut full = flight(0, 0, 1);
        fill_sequentially(&mut full, TicketClass::Economy, 1);
        let open = flight(12, 23, 79);
        let unbookable = Flight {
            aircraft: None,
            ..flight(0, 0, 0)
        };

        let flights = vec![full, open, unbookable];
        let result = flights_with_open_capacity(&flights);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, flights[1].id);
    }
}
