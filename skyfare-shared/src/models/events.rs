use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ledger side effect of every charging operation. Callers persist it in
/// the same transaction as the mutated aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditChargedEvent {
    pub customer_id: Uuid,
    pub amount: f64,
    pub charged_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatAssignedEvent {
    pub flight_id: Uuid,
    pub ticket_id: Uuid,
    pub seat_number: String,
    pub assigned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketTransferredEvent {
    pub ticket_id: Uuid,
    pub from_flight_id: Uuid,
    pub to_flight_id: Uuid,
    pub transferred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightCancelledEvent {
    pub flight_id: Uuid,
    pub discount_percent: Option<f64>,
    pub cancelled_at: DateTime<Utc>,
}
