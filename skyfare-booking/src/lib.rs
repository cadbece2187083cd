pub mod ledger;
pub mod lifecycle;
pub mod models;
pub mod occupancy;
pub mod pricing;
pub mod sync;

pub use lifecycle::BookingEngine;
pub use models::{Customer, Flight, FlightStatus, Ticket};

use skyfare_shared::TicketClass;
use uuid::Uuid;

/// Typed outcomes of seat and ledger operations. All of these are local,
/// recoverable decisions handed back to the caller; none is fatal.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Flight is missing or has no assigned aircraft")]
    InvalidFlight,

    #[error("Requested seat or cabin has no availability")]
    SeatUnavailable,

    #[error("Customer credit {available} does not cover the required {required}")]
    InsufficientCredit { required: f64, available: f64 },

    #[error("Cannot change ticket class from {from} to {to}")]
    InvalidClassTransition { from: TicketClass, to: TicketClass },

    #[error("Ticket transfer rejected: {0}")]
    InvalidTransfer(String),

    #[error("Ticket not found: {0}")]
    TicketNotFound(Uuid),

    #[error("Aggregate is locked by another operation, retry later")]
    Contended,
}

pub type BookingResult<T> = Result<T, BookingError>;
