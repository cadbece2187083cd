use async_trait::async_trait;
use skyfare_booking::models::{Customer, Flight, Ticket};
use skyfare_catalog::{Aircraft, Airport, FareTariff};
use skyfare_shared::PageRequest;
use uuid::Uuid;

pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Persistence surface for flight aggregates. Implementations load a
/// flight together with its owned tickets; `save` is an upsert and the
/// caller invokes it after a successful lifecycle operation.
#[async_trait]
pub trait FlightRepository: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<Flight>, StoreError>;

    async fn list(&self, page: PageRequest) -> Result<Vec<Flight>, StoreError>;

    async fn list_by_fare_tariff(&self, tariff_id: Uuid) -> Result<Vec<Flight>, StoreError>;

    /// Derived index over the flight arena: every ticket a customer holds,
    /// rebuilt on demand instead of being stored as a second relationship
    /// side.
    async fn tickets_by_customer(&self, customer_id: Uuid) -> Result<Vec<Ticket>, StoreError>;

    async fn save(&self, flight: Flight) -> Result<Uuid, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<Customer>, StoreError>;

    async fn list(&self, page: PageRequest) -> Result<Vec<Customer>, StoreError>;

    async fn save(&self, customer: Customer) -> Result<Uuid, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

#[async_trait]
pub trait AircraftRepository: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<Aircraft>, StoreError>;

    async fn list(&self, page: PageRequest) -> Result<Vec<Aircraft>, StoreError>;

    async fn save(&self, aircraft: Aircraft) -> Result<Uuid, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

#[async_trait]
pub trait AirportRepository: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<Airport>, StoreError>;

    async fn list(&self, page: PageRequest) -> Result<Vec<Airport>, StoreError>;

    async fn save(&self, airport: Airport) -> Result<Uuid, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

#[async_trait]
pub trait FareTariffRepository: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<FareTariff>, StoreError>;

    async fn list(&self, page: PageRequest) -> Result<Vec<FareTariff>, StoreError>;

    async fn save(&self, tariff: FareTariff) -> Result<Uuid, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
