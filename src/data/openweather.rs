use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;

use crate::data::{http_client, join_url};

pub const OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5";

/// What to look current weather up by.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    City(String),
    Coordinates { lat: f64, lon: f64 },
}

impl WeatherQuery {
    /// A non-blank city wins; otherwise both coordinates must parse.
    pub fn from_params(city: Option<&str>, lat: Option<&str>, lon: Option<&str>) -> Option<Self> {
        if let Some(city) = city.map(str::trim).filter(|c| !c.is_empty()) {
            return Some(Self::City(city.to_string()));
        }
        let lat = lat?.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        let lon = lon?.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        Some(Self::Coordinates { lat, lon })
    }
}

/// Pass-through client for the OpenWeather current and forecast endpoints.
/// Payloads are returned untouched so the gateway can forward them.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(OPENWEATHER_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: http_client(Duration::from_secs(10)),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub async fn current(&self, query: &WeatherQuery) -> Result<Value> {
        let request = self.client.get(join_url(&self.base_url, "weather"));
        let request = match query {
            WeatherQuery::City(city) => request.query(&[("q", city.as_str())]),
            WeatherQuery::Coordinates { lat, lon } => {
                request.query(&[("lat", lat.to_string()), ("lon", lon.to_string())])
            }
        };

        request
            .query(&[("units", "metric"), ("appid", self.api_key.as_str())])
            .send()
            .await
            .context("weather request failed")?
            .error_for_status()
            .context("weather request returned non-success status")?
            .json()
            .await
            .context("failed to decode weather payload")
    }

    pub async fn forecast(&self, city: &str) -> Result<Value> {
        self.client
            .get(join_url(&self.base_url, "forecast"))
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .context("forecast request failed")?
            .error_for_status()
            .context("forecast request returned non-success status")?
            .json()
            .await
            .context("failed to decode forecast payload")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_takes_precedence_over_coordinates() {
        let query = WeatherQuery::from_params(Some("Paris"), Some("1.0"), Some("2.0"));
        assert_eq!(query, Some(WeatherQuery::City("Paris".to_string())));
    }

    #[test]
    fn blank_city_falls_through_to_coordinates() {
        let query = WeatherQuery::from_params(Some("  "), Some("48.85"), Some("2.35"));
        assert_eq!(
            query,
            Some(WeatherQuery::Coordinates {
                lat: 48.85,
                lon: 2.35
            })
        );
    }

    #[test]
    fn partial_or_bad_coordinates_are_rejected() {
        assert!(WeatherQuery::from_params(None, Some("48.85"), None).is_none());
        assert!(WeatherQuery::from_params(None, Some("north"), Some("2.0")).is_none());
        assert!(WeatherQuery::from_params(None, Some("NaN"), Some("2.0")).is_none());
        assert!(WeatherQuery::from_params(None, None, None).is_none());
    }
}
