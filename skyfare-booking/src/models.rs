use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skyfare_catalog::{Aircraft, Airport, FareTariff};
use skyfare_shared::{Masked, TicketClass};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightStatus {
    Scheduled,
    Delayed,
    Cancelled,
    Diverted,
}

/// A flight aggregate loaded with its tickets. Tickets are owned here; a
/// customer's ticket list is a derived index rebuilt by the store, never a
/// second mutable side of the relationship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub id: Uuid,
    pub number: String,
    pub departure: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
    pub status: FlightStatus,
    pub delay_minutes: Option<u32>,
    /// Absent aircraft makes the flight non-bookable; every seat
    /// operation fails instead of crashing.
    pub aircraft: Option<Aircraft>,
    pub airport_departure: Airport,
    pub airport_arrival: Airport,
    pub fare_tariff: FareTariff,
    pub tickets: Vec<Ticket>,
}

impl Flight {
    pub fn new(
        number: impl Into<String>,
        departure: DateTime<Utc>,
        arrival: DateTime<Utc>,
        aircraft: Option<Aircraft>,
        airport_departure: Airport,
        airport_arrival: Airport,
        fare_tariff: FareTariff,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            number: number.into(),
            departure,
            arrival,
            status: FlightStatus::Scheduled,
            delay_minutes: None,
            aircraft,
            airport_departure,
            airport_arrival,
            fare_tariff,
            tickets: Vec::new(),
        }
    }

    pub fn ticket(&self, ticket_id: Uuid) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == ticket_id)
    }

    /// True while the flight is bookable and at least one more ticket fits
    /// into the hull, whatever the cabin.
    pub fn has_open_capacity(&self) -> bool {
        match &self.aircraft {
            Some(aircraft) => self.tickets.len() < aircraft.total_capacity() as usize,
            None => false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub number: String,
    pub ticket_class: TicketClass,
    /// Unset until the lifecycle engine seats the ticket. A caller may
    /// pre-fill it with a requested seat, which assignment validates.
    pub seat_number: Option<String>,
    pub price: f64,
    pub discount: f64,
    pub price_after_discount: f64,
    pub passenger_full_name: String,
    /// Copied from the flight when the ticket is created and refreshed on
    /// transfer.
    pub departure: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
    pub flight_id: Uuid,
    pub customer_id: Uuid,
}

impl Ticket {
    /// A ticket starts unseated and unpriced; the lifecycle engine fills
    /// in seat, price and discount.
    pub fn new(
        flight: &Flight,
        customer_id: Uuid,
        ticket_class: TicketClass,
        number: impl Into<String>,
        passenger_full_name: impl Into<String>,
        requested_seat: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            number: number.into(),
            ticket_class,
            seat_number: requested_seat,
            price: 0.0,
            discount: 0.0,
            price_after_discount: 0.0,
            passenger_full_name: passenger_full_name.into(),
            departure: flight.departure,
            arrival: flight.arrival,
            flight_id: flight.id,
            customer_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Prepaid balance, non-negative. Only the credit ledger touches it.
    pub credit: f64,
    pub phone: String,
    pub email: String,
    pub password: Masked<String>,
}

impl Customer {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        credit: f64,
        phone: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            credit,
            phone: phone.into(),
            email: email.into(),
            password: Masked::new(password.into()),
        }
    }
}
