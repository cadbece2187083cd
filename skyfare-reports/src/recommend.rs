use std::collections::HashMap;

use skyfare_booking::models::{Flight, FlightStatus, Ticket};

/// How many favourite destinations feed the recommendation list.
const FAVOURITE_DESTINATIONS: usize = 5;

/// Suggests upcoming flights from a customer's travel history. Airports
/// the customer arrived at repeatedly are taken as likely favourites;
/// scheduled flights towards them come back sorted by departure.
pub fn recommend_flights<'a>(
    customer_tickets: &[Ticket],
    flights: &'a [Flight],
) -> Vec<&'a Flight> {
    let mut arrivals: HashMap<&str, usize> = HashMap::new();
    for ticket in customer_tickets {
        if let Some(flight) = flights.iter().find(|f| f.id == ticket.flight_id) {
            *arrivals
                .entry(flight.airport_arrival.code.as_str())
                .or_default() += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = arrivals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    let favourites: Vec<&str> = ranked
        .into_iter()
        .take(FAVOURITE_DESTINATIONS)
        .map(|(code, _)| code)
        .collect();

    let mut recommended: Vec<&Flight> = flights
        .iter()
        .filter(|f| {
            f.status == FlightStatus::Scheduled
                && favourites.contains(&f.airport_arrival.code.as_str())
        })
        .collect();
    recommended.sort_by_key(|f| f.departure);
    recommended
}
