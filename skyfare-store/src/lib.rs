pub mod app_config;
pub mod memory;
pub mod repository;

pub use app_config::{BusinessRules, Config};
pub use memory::MemoryStore;
pub use repository::{
    AircraftRepository, AirportRepository, CustomerRepository, FareTariffRepository,
    FlightRepository, StoreError,
};
