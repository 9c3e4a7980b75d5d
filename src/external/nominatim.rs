use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use std::env;

use crate::{
    api::GeocodingAPI,
    entities::Coordinates,
    error::{address_not_found_error, invalid_input_error, upstream_error, Error},
};

const DEFAULT_API_BASE: &str = "nominatim.openstreetmap.org";
const AGENT: &str = concat!("viator/", env!("CARGO_PKG_VERSION"));

// the search endpoint returns lat/lon as strings
#[derive(Clone, Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

#[derive(Debug)]
pub struct NominatimGeocoder {
    client: reqwest::Client,
}

impl NominatimGeocoder {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    fn api_base() -> String {
        env::var("NOMINATIM_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.into())
    }
}

impl Default for NominatimGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

fn first_result(query: &str, results: Vec<SearchResult>) -> Result<Coordinates, Error> {
    let first = results
        .into_iter()
        .next()
        .ok_or_else(|| address_not_found_error(query))?;

    let latitude = first.lat.parse().map_err(|_| upstream_error())?;
    let longitude = first.lon.parse().map_err(|_| upstream_error())?;

    Ok(Coordinates::new(latitude, longitude))
}

#[async_trait]
impl GeocodingAPI for NominatimGeocoder {
    #[tracing::instrument(skip(self))]
    async fn geocode(&self, query: &str) -> Result<Coordinates, Error> {
        let url = format!("https://{}/search", Self::api_base());

        let res = self
            .client
            .get(url)
            .header(USER_AGENT, AGENT)
            .query(&[("format", "json"), ("q", query)])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let results: Vec<SearchResult> = res.json().await?;

        first_result(query, results)
    }
}
