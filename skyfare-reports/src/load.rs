use skyfare_booking::models::Flight;
use skyfare_booking::occupancy;
use skyfare_catalog::airport;

/// Ratio of passenger-kilometres flown to seat-kilometres offered over the
/// given flights, as a percentage. Only flights carrying at least one
/// ticket qualify; flights without an aircraft contribute nothing. An
/// empty denominator yields 0.
pub fn passenger_load_factor(flights: &[Flight]) -> f64 {
    let mut passenger_km = 0.0;
    let mut seat_km = 0.0;

    for flight in flights {
        if flight.tickets.is_empty() {
            continue;
        }
        let Some(aircraft) = &flight.aircraft else {
            continue;
        };

        let occupied: usize = occupancy::occupied_seats(flight)
            .values()
            .map(Vec::len)
            .sum();
        let distance = airport::distance_km(&flight.airport_departure, &flight.airport_arrival);

        passenger_km += distance * occupied as f64;
        seat_km += distance * f64::from(aircraft.total_capacity());
    }

    if seat_km == 0.0 {
        0.0
    } else {
        passenger_km / seat_km * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use skyfare_booking::models::Ticket;
    use skyfare_catalog::{Aircraft, Airport, FareTariff};
    use skyfare_shared::TicketClass;
    use uuid::Uuid;

    fn airport(code: &str, lat: f64, lon: f64) -> Airport {
        Airport::new(code, format!("{code} International"), "XX", "XX-1", lat, lon)
    }

    fn flight(total_seats: (u32, u32, u32), arrival_lat: f64) -> Flight {
        Flight::new(
            "SF001",
            Utc::now(),
            Utc::now(),
            Some(Aircraft::new("OK-XYZ", "A320", total_seats.0, total_seats.1, total_seats.2)),
            airport("AAA", 0.0, 0.0),
            airport("BBB", arrival_lat, 0.0),
            FareTariff::new("STD", 5000.0, 2500.0, 1000.0).unwrap(),
        )
    }

    fn seat(fl: &mut Flight, class: TicketClass, seat: &str) {
        let mut ticket = Ticket::new(fl, Uuid::new_v4(), class, "TK", "Jane Doe", None);
        ticket.seat_number = Some(seat.to_string());
        fl.tickets.push(ticket);
    }

    #[test]
    fn test_single_flight_ratio_ignores_distance() {
        // 2 occupied of 114 seats; with one flight the distance cancels.
        let mut fl = flight((12, 23, 79), 10.0);
        seat(&mut fl, TicketClass::Business, "1A");
        seat(&mut fl, TicketClass::Economy, "7A");

        let factor = passenger_load_factor(std::slice::from_ref(&fl));
        assert!((factor - 2.0 / 114.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_longer_legs_weigh_more() {
        // Short leg full, long leg empty-ish: the long leg dominates.
        let mut short = flight((0, 0, 2), 1.0);
        seat(&mut short, TicketClass::Economy, "1A");
        seat(&mut short, TicketClass::Economy, "1B");

        let mut long = flight((0, 0, 2), 45.0);
        seat(&mut long, TicketClass::Economy, "1A");

        let factor = passenger_load_factor(&[short, long]);
        // Exact value depends on the two distances; it must sit strictly
        // between the per-flight factors 50% and 100%, nearer to 50%.
        assert!(factor > 50.0 && factor < 60.0);
    }

    #[test]
    fn test_no_qualifying_flights_yields_zero() {
        assert_eq!(passenger_load_factor(&[]), 0.0);

        // Flights without tickets do not qualify.
        let empty = flight((12, 23, 79), 10.0);
        assert_eq!(passenger_load_factor(&[empty]), 0.0);

        // Neither do flights that lost their aircraft.
        let mut grounded = flight((12, 23, 79), 10.0);
        seat(&mut grounded, TicketClass::Economy, "7A");
        grounded.aircraft = None;
        assert_eq!(passenger_load_factor(&[grounded]), 0.0);
    }

    #[test]
    fn test_zero_distance_routes_yield_zero() {
        let mut fl = flight((12, 23, 79), 0.0);
        seat(&mut fl, TicketClass::Economy, "7A");
        assert_eq!(passenger_load_factor(&[fl]), 0.0);
    }
}
