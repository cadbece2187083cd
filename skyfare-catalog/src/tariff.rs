use serde::{Deserialize, Serialize};
use skyfare_shared::TicketClass;
use uuid::Uuid;

/// One base price per cabin. Flights reference a tariff record rather than
/// inlined prices, so editing a tariff changes quotes for future
/// operations only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareTariff {
    pub id: Uuid,
    pub code: String,
    pub business_price: f64,
    pub premium_price: f64,
    pub economy_price: f64,
}

impl FareTariff {
    /// All three prices must be positive.
    pub fn new(
        code: impl Into<String>,
        business_price: f64,
        premium_price: f64,
        economy_price: f64,
    ) -> Result<Self, TariffError> {
        for (class, price) in [
            (TicketClass::Business, business_price),
            (TicketClass::Premium, premium_price),
            (TicketClass::Economy, economy_price),
        ] {
            if price <= 0.0 {
                return Err(TariffError::NonPositivePrice { class, price });
            }
        }

        Ok(Self {
            id: Uuid::new_v4(),
            code: code.into(),
            business_price,
            premium_price,
            economy_price,
        })
    }

    pub fn price_for(&self, class: TicketClass) -> f64 {
        match class {
            TicketClass::Business => self.business_price,
            TicketClass::Premium => self.premium_price,
            TicketClass::Economy => self.economy_price,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TariffError {
    #[error("Fare for {class} must be positive, got {price}")]
    NonPositivePrice { class: TicketClass, price: f64 },
}
