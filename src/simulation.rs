use async_trait::async_trait;
use geo_types::LineString;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::api::{DirectionsAPI, GeocodingAPI};
use crate::entities::{Coordinates, RouteLeg, TravelMode};
use crate::error::{address_not_found_error, route_not_found_error, Error};

// canned stand-in for both external services, so the engine can be
// exercised without network access
pub struct StaticAtlas {
    places: HashMap<String, Coordinates>,
    leg_durations: HashMap<TravelMode, f64>,
    geocode_calls: AtomicUsize,
    route_calls: AtomicUsize,
}

impl StaticAtlas {
    pub fn new() -> Self {
        Self {
            places: HashMap::new(),
            leg_durations: HashMap::new(),
            geocode_calls: AtomicUsize::new(0),
            route_calls: AtomicUsize::new(0),
        }
    }

    pub fn seoul() -> Self {
        Self::new()
            .with_place("Seoul Station", 37.5559, 126.9723)
            .with_place("Gangnam", 37.4979, 127.0276)
            .with_leg(TravelMode::Driving, 1260.0)
            .with_leg(TravelMode::Walking, 6540.0)
    }

    pub fn with_place(mut self, name: &str, latitude: f64, longitude: f64) -> Self {
        self.places
            .insert(name.into(), Coordinates::new(latitude, longitude));
        self
    }

    pub fn with_leg(mut self, mode: TravelMode, duration_seconds: f64) -> Self {
        self.leg_durations.insert(mode, duration_seconds);
        self
    }

    pub fn without_leg(mut self, mode: TravelMode) -> Self {
        self.leg_durations.remove(&mode);
        self
    }

    pub fn geocode_calls(&self) -> usize {
        self.geocode_calls.load(Ordering::SeqCst)
    }

    pub fn route_calls(&self) -> usize {
        self.route_calls.load(Ordering::SeqCst)
    }
}

impl Default for StaticAtlas {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeocodingAPI for StaticAtlas {
    async fn geocode(&self, query: &str) -> Result<Coordinates, Error> {
        self.geocode_calls.fetch_add(1, Ordering::SeqCst);

        self.places
            .get(query)
            .copied()
            .ok_or_else(|| address_not_found_error(query))
    }
}

#[async_trait]
impl DirectionsAPI for StaticAtlas {
    async fn route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        mode: TravelMode,
    ) -> Result<RouteLeg, Error> {
        self.route_calls.fetch_add(1, Ordering::SeqCst);

        let duration_seconds = self
            .leg_durations
            .get(&mode)
            .copied()
            .ok_or_else(|| route_not_found_error(mode.label()))?;

        Ok(RouteLeg {
            geometry: LineString::new(vec![origin.into(), destination.into()]),
            duration_seconds,
        })
    }
}
