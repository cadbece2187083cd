use serde::{Deserialize, Serialize};
use std::fmt;

/// Cabin classes in descending rank order. The derived ordering makes
/// `Business < Premium < Economy`, so a strictly higher cabin compares
/// strictly less.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketClass {
    Business,
    Premium,
    Economy,
}

impl TicketClass {
    /// All cabins, front of the aircraft first. Seat rows are handed out
    /// in this order.
    pub const ALL: [TicketClass; 3] = [
        TicketClass::Business,
        TicketClass::Premium,
        TicketClass::Economy,
    ];

    /// True when `self` is a strictly higher cabin than `other`.
    pub fn outranks(self, other: TicketClass) -> bool {
        self < other
    }
}

impl fmt::Display for TicketClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TicketClass::Business => "Business",
            TicketClass::Premium => "Premium",
            TicketClass::Economy => "Economy",
        };
        write!(f, "{name}")
    }
}
