use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::{Coordinates, PhotoUpload, RouteLeg, RoutePlan, RouteQuery, Session, TravelMode};
use crate::error::Error;

#[async_trait]
pub trait SessionAPI {
    async fn create_session(&self) -> Result<Session, Error>;
    async fn find_session(&self, token: Uuid) -> Result<Session, Error>;
}

#[async_trait]
pub trait UploadAPI {
    async fn select_photo(&self, token: Uuid, photo: PhotoUpload) -> Result<Session, Error>;
    async fn discard_photo(&self, token: Uuid) -> Result<Session, Error>;
}

#[async_trait]
pub trait MapAPI {
    async fn open_map(&self, token: Uuid) -> Result<Session, Error>;
    async fn close_map(&self, token: Uuid) -> Result<Session, Error>;
}

#[async_trait]
pub trait RouteAPI {
    async fn find_route(&self, token: Uuid, query: RouteQuery) -> Result<RoutePlan, Error>;
}

pub trait API: SessionAPI + UploadAPI + MapAPI + RouteAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;

#[async_trait]
pub trait GeocodingAPI {
    async fn geocode(&self, query: &str) -> Result<Coordinates, Error>;
}

#[async_trait]
pub trait DirectionsAPI {
    async fn route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        mode: TravelMode,
    ) -> Result<RouteLeg, Error>;
}

pub type DynGeocoder = Arc<dyn GeocodingAPI + Send + Sync>;
pub type DynDirections = Arc<dyn DirectionsAPI + Send + Sync>;
