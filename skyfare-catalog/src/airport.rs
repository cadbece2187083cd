use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Mean Earth radius for great-circle distances, in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airport {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub country_code: String,
    pub region_code: String,
    pub municipality: Option<String>,
    pub gps_code: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        country_code: impl Into<String>,
        region_code: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.into(),
            name: name.into(),
            country_code: country_code.into(),
            region_code: region_code.into(),
            municipality: None,
            gps_code: None,
            latitude,
            longitude,
        }
    }
}

/// Haversine great-circle distance between two airports, in kilometres.
pub fn distance_km(origin: &Airport, destination: &Airport) -> f64 {
    let lat_delta = (destination.latitude - origin.latitude).to_radians();
    let lon_delta = (destination.longitude - origin.longitude).to_radians();

    let a = (lat_delta / 2.0).sin().powi(2)
        + origin.latitude.to_radians().cos()
            * destination.latitude.to_radians().cos()
            * (lon_delta / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
