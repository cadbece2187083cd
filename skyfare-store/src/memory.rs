use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use skyfare_booking::models::{Customer, Flight, Ticket};
use skyfare_catalog::{Aircraft, Airport, FareTariff};
use skyfare_shared::PageRequest;
use uuid::Uuid;

use crate::repository::{
    AircraftRepository, AirportRepository, CustomerRepository, FareTariffRepository,
    FlightRepository, StoreError,
};

/// In-memory backing store. Serves the tests and doubles as the reference
/// behavior a database-backed implementation has to match.
#[derive(Default)]
pub struct MemoryStore {
    flights: RwLock<HashMap<Uuid, Flight>>,
    customers: RwLock<HashMap<Uuid, Customer>>,
    aircraft: RwLock<HashMap<Uuid, Aircraft>>,
    airports: RwLock<HashMap<Uuid, Airport>>,
    tariffs: RwLock<HashMap<Uuid, FareTariff>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    match lock.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    match lock.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Stable page over an id-keyed map: entries sort by id so the same window
/// always returns the same slice.
fn page_of<T: Clone>(map: &HashMap<Uuid, T>, page: PageRequest) -> Vec<T> {
    let mut ids: Vec<&Uuid> = map.keys().collect();
    ids.sort();
    ids.into_iter()
        .skip(page.offset())
        .take(page.size)
        .map(|id| map[id].clone())
        .collect()
}

#[async_trait]
impl FlightRepository for MemoryStore {
    async fn get(&self, id: Uuid) -> Result<Option<Flight>, StoreError> {
        Ok(read(&self.flights).get(&id).cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Flight>, StoreError> {
        Ok(page_of(&read(&self.flights), page))
    }

    async fn list_by_fare_tariff(&self, tariff_id: Uuid) -> Result<Vec<Flight>, StoreError> {
        Ok(read(&self.flights)
            .values()
            .filter(|f| f.fare_tariff.id == tariff_id)
            .cloned()
            .collect())
    }

    async fn tickets_by_customer(&self, customer_id: Uuid) -> Result<Vec<Ticket>, StoreError> {
        Ok(read(&self.flights)
            .values()
            .flat_map(|f| f.tickets.iter())
            .filter(|t| t.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn save(&self, flight: Flight) -> Result<Uuid, StoreError> {
        let id = flight.id;
        write(&self.flights).insert(id, flight);
        tracing::debug!(flight_id = %id, "flight saved");
        Ok(id)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        write(&self.flights).remove(&id);
        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for MemoryStore {
    async fn get(&self, id: Uuid) -> Result<Option<Customer>, StoreError> {
        Ok(read(&self.customers).get(&id).cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Customer>, StoreError> {
        Ok(page_of(&read(&self.customers), page))
    }

    async fn save(&self, customer: Customer) -> Result<Uuid, StoreError> {
        let id = customer.id;
        write(&self.customers).insert(id, customer);
        Ok(id)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        write(&self.customers).remove(&id);
        Ok(())
    }
}

#[async_trait]
impl AircraftRepository for MemoryStore {
    async fn get(&self, id: Uuid) -> Result<Option<Aircraft>, StoreError> {
        Ok(read(&self.aircraft).get(&id).cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Aircraft>, StoreError> {
        Ok(page_of(&read(&self.aircraft), page))
    }

    async fn save(&self, aircraft: Aircraft) -> Result<Uuid, StoreError> {
        let id = aircraft.id;
        write(&self.aircraft).insert(id, aircraft);
        Ok(id)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        write(&self.aircraft).remove(&id);
        Ok(())
    }
}

#[async_trait]
impl AirportRepository for MemoryStore {
    async fn get(&self, id: Uuid) -> Result<Option<Airport>, StoreError> {
        Ok(read(&self.airports).get(&id).cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Airport>, StoreError> {
        Ok(page_of(&read(&self.airports), page))
    }

    async fn save(&self, airport: Airport) -> Result<Uuid, StoreError> {
        let id = airport.id;
        write(&self.airports).insert(id, airport);
        Ok(id)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        write(&self.airports).remove(&id);
        Ok(())
    }
}

#[async_trait]
impl FareTariffRepository for MemoryStore {
    async fn get(&self, id: Uuid) -> Result<Option<FareTariff>, StoreError> {
        Ok(read(&self.tariffs).get(&id).cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<FareTariff>, StoreError> {
        Ok(page_of(&read(&self.tariffs), page))
    }

    async fn save(&self, tariff: FareTariff) -> Result<Uuid, StoreError> {
        let id = tariff.id;
        write(&self.tariffs).insert(id, tariff);
        Ok(id)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        write(&self.tariffs).remove(&id);
        Ok(())
    }
}
