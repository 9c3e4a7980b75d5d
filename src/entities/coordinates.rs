use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinates> for geo_types::Coord<f64> {
    fn from(coordinates: Coordinates) -> Self {
        geo_types::coord! { x: coordinates.longitude, y: coordinates.latitude }
    }
}

impl From<Coordinates> for String {
    fn from(coordinates: Coordinates) -> Self {
        // the routing service wants "lon,lat"
        format!("{},{}", coordinates.longitude, coordinates.latitude)
    }
}
