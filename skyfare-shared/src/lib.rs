pub mod class;
pub mod models;
pub mod page;
pub mod pii;

pub use class::TicketClass;
pub use page::PageRequest;
pub use pii::Masked;
