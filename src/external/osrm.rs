use async_trait::async_trait;
use geo_types::{coord, Coord, LineString};
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use std::env;

use crate::{
    api::DirectionsAPI,
    entities::{Coordinates, RouteLeg, TravelMode},
    error::{invalid_input_error, route_not_found_error, upstream_error, Error},
};

const DEFAULT_API_BASE: &str = "router.project-osrm.org";
const AGENT: &str = concat!("viator/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug, Deserialize)]
struct DirectionsResponse {
    code: String,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Clone, Debug, Deserialize)]
struct DirectionsRoute {
    geometry: Geometry,
    duration: f64,
}

// geojson line string, [lon, lat] pairs
#[derive(Clone, Debug, Deserialize)]
struct Geometry {
    coordinates: Vec<[f64; 2]>,
}

#[derive(Debug)]
pub struct OsrmRouter {
    client: reqwest::Client,
}

impl OsrmRouter {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    fn api_base() -> String {
        env::var("OSRM_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.into())
    }
}

impl Default for OsrmRouter {
    fn default() -> Self {
        Self::new()
    }
}

fn into_leg(mode: TravelMode, data: DirectionsResponse) -> Result<RouteLeg, Error> {
    if data.code != "Ok" {
        return Err(route_not_found_error(mode.label()));
    }

    let route = data
        .routes
        .into_iter()
        .next()
        .ok_or_else(upstream_error)?;

    let coords: Vec<Coord<f64>> = route
        .geometry
        .coordinates
        .into_iter()
        .map(|[lon, lat]| coord! { x: lon, y: lat })
        .collect();

    Ok(RouteLeg {
        geometry: LineString::new(coords),
        duration_seconds: route.duration,
    })
}

#[async_trait]
impl DirectionsAPI for OsrmRouter {
    #[tracing::instrument(skip(self))]
    async fn route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        mode: TravelMode,
    ) -> Result<RouteLeg, Error> {
        let url = format!(
            "https://{}/route/v1/{}/{};{}",
            Self::api_base(),
            mode.profile(),
            String::from(origin),
            String::from(destination),
        );

        let res = self
            .client
            .get(url)
            .header(USER_AGENT, AGENT)
            .query(&[("geometries", "geojson"), ("overview", "full")])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: DirectionsResponse = res.json().await?;

        into_leg(mode, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_becomes_a_leg() {
        let body = r#"{
            "code": "Ok",
            "routes": [{
                "geometry": {"coordinates": [[126.9723, 37.5559], [127.0276, 37.4979]], "type": "LineString"},
                "duration": 1260.4,
                "distance": 9520.1
            }]
        }"#;
        let data: DirectionsResponse = serde_json::from_str(body).unwrap();

        let leg = into_leg(TravelMode::Driving, data).unwrap();

        assert_eq!(leg.duration_seconds, 1260.4);
        assert_eq!(leg.geometry.coords().count(), 2);
        // wire order is [lon, lat]
        assert_eq!(leg.geometry.coords().next().unwrap().x, 126.9723);
        assert_eq!(leg.geometry.coords().next().unwrap().y, 37.5559);
    }

    #[test]
    fn non_ok_code_is_route_not_found() {
        let body = r#"{"code": "NoRoute", "message": "Impossible route between points"}"#;
        let data: DirectionsResponse = serde_json::from_str(body).unwrap();

        let err = into_leg(TravelMode::Walking, data).unwrap_err();

        assert_eq!(err.code, 104);
        assert!(err.message.contains("walking"));
    }

    #[test]
    fn ok_code_without_routes_is_an_upstream_error() {
        let data: DirectionsResponse =
            serde_json::from_str(r#"{"code": "Ok", "routes": []}"#).unwrap();

        assert_eq!(into_leg(TravelMode::Driving, data).unwrap_err().code, 4);
    }
}
