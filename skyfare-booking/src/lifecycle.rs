use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use skyfare_shared::models::events::{
    CreditChargedEvent, FlightCancelledEvent, SeatAssignedEvent, TicketTransferredEvent,
};
use skyfare_shared::TicketClass;
use uuid::Uuid;

use crate::ledger;
use crate::models::{Customer, Flight, FlightStatus, Ticket};
use crate::occupancy::SeatInventory;
use crate::pricing;
use crate::sync::LockRegistry;
use crate::{BookingError, BookingResult};

/// Default bound on waiting for a contended flight or customer.
pub const DEFAULT_LOCK_WAIT: Duration = Duration::from_secs(2);

/// Orchestrates every seat- and money-affecting ticket operation.
/// Aggregates come in by reference, already loaded by the caller; the
/// engine validates, charges, mutates, and returns the effects for the
/// caller to persist in one transaction. Operations on the same flight or
/// customer serialize through the lock registry with a bounded wait, and
/// every failure leaves the aggregates exactly as they were.
pub struct BookingEngine {
    locks: LockRegistry,
    lock_wait: Duration,
}

impl BookingEngine {
    pub fn new(lock_wait: Duration) -> Self {
        Self {
            locks: LockRegistry::new(),
            lock_wait,
        }
    }

    /// Seats and prices a freshly created ticket, then charges the full
    /// amount. A requested seat must be structurally valid and free and
    /// carries the selection surcharge; without a request the first open
    /// seat of the cabin is issued. The ticket is not yet part of the
    /// flight; the caller appends it after a successful return.
    pub fn assign_seat_number(
        &self,
        flight: &Flight,
        ticket: &mut Ticket,
        customer: &mut Customer,
    ) -> BookingResult<SeatAssignment> {
        let _guard = self.guard(&[flight.id, customer.id])?;
        self.assign_locked(flight, ticket, customer)
    }

    /// Moves a seated ticket to another seat of its current cabin for the
    /// selection surcharge. The price grows additively; the cabin never
    /// changes.
    pub fn change_seat_number(
        &self,
        flight: &mut Flight,
        ticket_id: Uuid,
        customer: &mut Customer,
        new_seat: &str,
    ) -> BookingResult<SeatChange> {
        let _guard = self.guard(&[flight.id, customer.id])?;

        let index = flight
            .tickets
            .iter()
            .position(|t| t.id == ticket_id)
            .ok_or(BookingError::TicketNotFound(ticket_id))?;
        let class = flight.tickets[index].ticket_class;
        let current_price = flight.tickets[index].price;
        let previous_seat = flight.tickets[index].seat_number.clone();

        {
            let inventory = SeatInventory::new(flight)?;
            if !inventory.is_seat_number_valid(class, new_seat)
                || inventory.is_seat_number_occupied(new_seat)
            {
                return Err(BookingError::SeatUnavailable);
            }
        }

        let surcharge = pricing::custom_seat_surcharge(flight, class);
        let charge = ledger::charge(customer, surcharge)?;

        let updated_price = current_price + surcharge;
        let seat_number = new_seat.trim().to_string();
        let ticket = &mut flight.tickets[index];
        ticket.seat_number = Some(seat_number.clone());
        ticket.price = updated_price;
        ticket.price_after_discount = updated_price;

        tracing::info!(
            flight_id = %flight.id,
            ticket_id = %ticket_id,
            seat = %seat_number,
            surcharge,
            "seat changed"
        );

        Ok(SeatChange {
            previous_seat,
            seat: SeatAssignedEvent {
                flight_id: flight.id,
                ticket_id,
                seat_number,
                assigned_at: Utc::now(),
            },
            surcharge,
            charge,
        })
    }

    /// Upgrades a ticket into a strictly higher cabin: Economy to Premium
    /// or Business, Premium to Business. The seat is reissued in the new
    /// cabin and the customer pays the tariff difference.
    pub fn upgrade_ticket_class(
        &self,
        flight: &mut Flight,
        ticket_id: Uuid,
        customer: &mut Customer,
        new_class: TicketClass,
    ) -> BookingResult<ClassUpgrade> {
        let _guard = self.guard(&[flight.id, customer.id])?;

        let index = flight
            .tickets
            .iter()
            .position(|t| t.id == ticket_id)
            .ok_or(BookingError::TicketNotFound(ticket_id))?;
        let old_class = flight.tickets[index].ticket_class;
        let current_price = flight.tickets[index].price;

        if !new_class.outranks(old_class) {
            return Err(BookingError::InvalidClassTransition {
                from: old_class,
                to: new_class,
            });
        }

        let seat_number = {
            let inventory = SeatInventory::new(flight)?;
            if !inventory.is_class_available(new_class) {
                return Err(BookingError::SeatUnavailable);
            }
            inventory
                .first_available(new_class)
                .ok_or(BookingError::SeatUnavailable)?
        };

        let price_delta = pricing::base_price(flight, new_class) - current_price;
        let charge = ledger::charge(customer, price_delta)?;

        let updated_price = current_price + price_delta;
        let ticket = &mut flight.tickets[index];
        ticket.seat_number = Some(seat_number.clone());
        ticket.price = updated_price;
        ticket.price_after_discount = updated_price;
        ticket.ticket_class = new_class;

        tracing::info!(
            flight_id = %flight.id,
            ticket_id = %ticket_id,
            from = %old_class,
            to = %new_class,
            seat = %seat_number,
            price_delta,
            "ticket class upgraded"
        );

        Ok(ClassUpgrade {
            class: new_class,
            seat: SeatAssignedEvent {
                flight_id: flight.id,
                ticket_id,
                seat_number,
                assigned_at: Utc::now(),
            },
            price_delta,
            charge,
        })
    }

    /// Moves a ticket to a different flight. The seat on the source flight
    /// is given up and a fresh one is auto-issued on the target, charging
    /// the target tariff's full base price; the fare already paid is not
    /// netted against it. On failure the source flight keeps the ticket
    /// exactly as it was.
    pub fn transfer_ticket(
        &self,
        from: &mut Flight,
        to: &mut Flight,
        ticket_id: Uuid,
        customer: &mut Customer,
    ) -> BookingResult<TicketTransfer> {
        if from.id == to.id {
            return Err(BookingError::InvalidTransfer(
                "source and target flights are the same".into(),
            ));
        }

        let _guard = self.guard(&[from.id, to.id, customer.id])?;

        let index = from
            .tickets
            .iter()
            .position(|t| t.id == ticket_id)
            .ok_or_else(|| {
                BookingError::InvalidTransfer("ticket is not on the source flight".into())
            })?;
        if from.tickets[index].customer_id != customer.id {
            return Err(BookingError::InvalidTransfer(
                "ticket does not belong to the customer".into(),
            ));
        }

        let mut ticket = from.tickets.remove(index);
        let original_seat = ticket.seat_number.take();

        let assignment = match self.assign_locked(to, &mut ticket, customer) {
            Ok(assignment) => assignment,
            Err(err) => {
                ticket.seat_number = original_seat;
                from.tickets.insert(index, ticket);
                return Err(err);
            }
        };

        ticket.flight_id = to.id;
        ticket.departure = to.departure;
        ticket.arrival = to.arrival;

        let transfer = TicketTransferredEvent {
            ticket_id: ticket.id,
            from_flight_id: from.id,
            to_flight_id: to.id,
            transferred_at: Utc::now(),
        };
        to.tickets.push(ticket);

        tracing::info!(
            ticket_id = %ticket_id,
            from_flight = %from.id,
            to_flight = %to.id,
            "ticket transferred"
        );

        Ok(TicketTransfer {
            transfer,
            seat: assignment.seat,
            price: assignment.price,
            charge: assignment.charge,
        })
    }

    /// Cancels a flight and, for a percentage in (0, 100], grants every
    /// ticket a discount off its recorded price. The discount adjusts the
    /// prices only; no credit moves back to customers.
    pub fn cancel_flight(
        &self,
        flight: &mut Flight,
        discount_percent: Option<f64>,
    ) -> BookingResult<FlightCancellation> {
        let _guard = self.guard(&[flight.id])?;

        flight.status = FlightStatus::Cancelled;

        let mut tickets_discounted = 0;
        if let Some(percent) = discount_percent {
            if percent > 0.0 && percent <= 100.0 {
                for ticket in &mut flight.tickets {
                    let (discount, after) = pricing::discounted(ticket.price, percent);
                    ticket.discount = discount;
                    ticket.price_after_discount = after;
                    tickets_discounted += 1;
                }
            }
        }

        tracing::info!(
            flight_id = %flight.id,
            tickets_discounted,
            "flight cancelled"
        );

        Ok(FlightCancellation {
            event: FlightCancelledEvent {
                flight_id: flight.id,
                discount_percent,
                cancelled_at: Utc::now(),
            },
            tickets_discounted,
        })
    }

    fn guard(&self, keys: &[Uuid]) -> BookingResult<crate::sync::LockGuard> {
        self.locks.acquire(keys, self.lock_wait).map_err(|contention| {
            tracing::warn!(key = %contention.key, "aggregate lock contended");
            BookingError::Contended
        })
    }

    /// Assignment body shared with transfer, which already holds the
    /// locks. Nothing is mutated until the charge went through.
    fn assign_locked(
        &self,
        flight: &Flight,
        ticket: &mut Ticket,
        customer: &mut Customer,
    ) -> BookingResult<SeatAssignment> {
        let inventory = SeatInventory::new(flight)?;
        let class = ticket.ticket_class;
        let mut price = pricing::base_price(flight, class);

        let seat_number = match ticket.seat_number.as_deref() {
            None => inventory
                .first_available(class)
                .ok_or(BookingError::SeatUnavailable)?,
            Some(requested) => {
                if !inventory.is_seat_number_valid(class, requested)
                    || inventory.is_seat_number_occupied(requested)
                {
                    return Err(BookingError::SeatUnavailable);
                }
                price += pricing::custom_seat_surcharge(flight, class);
                requested.trim().to_string()
            }
        };

        let charge = ledger::charge(customer, price)?;

        ticket.seat_number = Some(seat_number.clone());
        ticket.price = price;
        ticket.discount = 0.0;
        ticket.price_after_discount = price;

        tracing::info!(
            flight_id = %flight.id,
            ticket_id = %ticket.id,
            seat = %seat_number,
            price,
            "seat assigned"
        );

        Ok(SeatAssignment {
            seat: SeatAssignedEvent {
                flight_id: flight.id,
                ticket_id: ticket.id,
                seat_number,
                assigned_at: Utc::now(),
            },
            price,
            charge,
        })
    }
}

impl Default for BookingEngine {
    fn default() -> Self {
        Self::new(DEFAULT_LOCK_WAIT)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatAssignment {
    pub seat: SeatAssignedEvent,
    pub price: f64,
    pub charge: CreditChargedEvent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatChange {
    pub previous_seat: Option<String>,
    pub seat: SeatAssignedEvent,
    pub surcharge: f64,
    pub charge: CreditChargedEvent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassUpgrade {
    pub class: TicketClass,
    pub seat: SeatAssignedEvent,
    pub price_delta: f64,
    pub charge: CreditChargedEvent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketTransfer {
    pub transfer: TicketTransferredEvent,
    pub seat: SeatAssignedEvent,
    pub price: f64,
    pub charge: CreditChargedEvent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightCancellation {
    pub event: FlightCancelledEvent,
    pub tickets_discounted: usize,
}
