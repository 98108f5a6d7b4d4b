use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::data::http_client;

pub const GEOIP_URL: &str = "https://ipapi.co/json/";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Best-effort position of this machine, looked up by public IP.
#[derive(Debug, Clone)]
pub struct GeoIpClient {
    client: Client,
    url: String,
}

impl Default for GeoIpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoIpClient {
    pub fn new() -> Self {
        Self::with_url(GEOIP_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: http_client(Duration::from_secs(5)),
            url: url.into(),
        }
    }

    pub async fn detect(&self) -> Option<Coordinates> {
        let response: IpApiResponse = self
            .client
            .get(&self.url)
            .send()
            .await
            .ok()?
            .error_for_status()
            .ok()?
            .json()
            .await
            .ok()?;
        Some(Coordinates {
            lat: response.latitude?,
            lon: response.longitude?,
        })
    }
}
