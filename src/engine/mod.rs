mod helpers;
mod map_api;
mod route_api;
mod session_api;
mod upload_api;

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    api::{DynDirections, DynGeocoder, API},
    entities::Session,
    external::{nominatim::NominatimGeocoder, osrm::OsrmRouter},
};

pub struct Engine {
    sessions: Mutex<HashMap<Uuid, Session>>,
    geocoder: DynGeocoder,
    directions: DynDirections,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_services(
            Arc::new(NominatimGeocoder::new()),
            Arc::new(OsrmRouter::new()),
        )
    }

    pub fn with_services(geocoder: DynGeocoder, directions: DynDirections) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            geocoder,
            directions,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl API for Engine {}
