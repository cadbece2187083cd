use skyfare_shared::TicketClass;

use crate::models::Flight;

/// Extra charged when the passenger picks a specific seat instead of
/// accepting auto-assignment: 10% of the cabin's base fare.
pub const CUSTOM_SEAT_SURCHARGE_RATE: f64 = 0.10;

/// Quote for one cabin on one flight, straight from the fare tariff the
/// flight references.
pub fn base_price(flight: &Flight, class: TicketClass) -> f64 {
    flight.fare_tariff.price_for(class)
}

pub fn custom_seat_surcharge(flight: &Flight, class: TicketClass) -> f64 {
    base_price(flight, class) * CUSTOM_SEAT_SURCHARGE_RATE
}

/// Splits a price into (discount, price after discount) for a percentage
/// in (0, 100].
pub fn discounted(price: f64, percent: f64) -> (f64, f64) {
    let discount = price * (percent / 100.0);
    (discount, price - discount)
}
