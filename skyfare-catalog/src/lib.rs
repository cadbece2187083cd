pub mod aircraft;
pub mod airport;
pub mod seatmap;
pub mod tariff;

pub use aircraft::Aircraft;
pub use airport::Airport;
pub use seatmap::{SeatMap, SEAT_LETTERS};
pub use tariff::{FareTariff, TariffError};
