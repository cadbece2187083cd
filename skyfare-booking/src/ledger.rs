use chrono::Utc;
use skyfare_shared::models::events::CreditChargedEvent;

use crate::models::Customer;
use crate::{BookingError, BookingResult};

pub fn has_enough_credit(customer: &Customer, amount: f64) -> bool {
    customer.credit >= amount
}

/// Guarded debit against the customer's prepaid balance. The guard keeps
/// the balance non-negative across any sequence of successful charges.
/// There is no credit-back counterpart; cancellation discounts adjust the
/// recorded ticket price only.
pub fn charge(customer: &mut Customer, amount: f64) -> BookingResult<CreditChargedEvent> {
    if !has_enough_credit(customer, amount) {
        return Err(BookingError::InsufficientCredit {
            required: amount,
            available: customer.credit,
        });
    }

    customer.credit -= amount;
    tracing::debug!(
        customer_id = %customer.id,
        amount,
        credit = customer.credit,
        "customer credit charged"
    );

    Ok(CreditChargedEvent {
        customer_id: customer.id,
        amount,
        charged_at: Utc::now(),
    })
}
