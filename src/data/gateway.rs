use std::time::Duration;

use chrono::DateTime;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    data::{http_client, join_url},
    domain::weather::{CityMatch, ForecastEntry, WeatherSnapshot, parse_forecast_timestamp},
    error::LookupError,
};

pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:3000";

/// Client for the gateway's `/api/*` endpoints. Raw provider payloads are
/// parsed into domain types here.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl Default for GatewayClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GatewayClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_GATEWAY_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: http_client(Duration::from_secs(12)),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn weather_by_city(&self, city: &str) -> Result<WeatherSnapshot, LookupError> {
        tracing::debug!(city, "fetching weather");
        let request = self
            .client
            .get(join_url(&self.base_url, "api/weather"))
            .query(&[("city", city)]);
        let payload = send_json(request).await?;
        parse_weather(payload, city)
    }

    pub async fn weather_by_coords(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<WeatherSnapshot, LookupError> {
        tracing::debug!(lat, lon, "fetching weather by coordinates");
        let request = self
            .client
            .get(join_url(&self.base_url, "api/weather"))
            .query(&[("lat", lat.to_string()), ("lon", lon.to_string())]);
        let payload = send_json(request).await?;
        parse_weather(payload, &format!("{lat:.4}, {lon:.4}"))
    }

    pub async fn forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, LookupError> {
        tracing::debug!(city, "fetching forecast");
        let request = self
            .client
            .get(join_url(&self.base_url, "api/forecast"))
            .query(&[("city", city)]);
        let payload = send_json(request).await?;
        parse_forecast(payload, city)
    }

    pub async fn city_search(&self, query: &str) -> Result<Vec<CityMatch>, LookupError> {
        let request = self
            .client
            .get(join_url(&self.base_url, "api/citysearch"))
            .query(&[("q", query)]);
        let payload = send_json(request).await?;
        serde_json::from_value(payload)
            .map_err(|err| LookupError::UpstreamUnavailable(format!("bad suggestions: {err}")))
    }
}

async fn send_json(request: RequestBuilder) -> Result<Value, LookupError> {
    let response = request.send().await?;
    let status = response.status();
    if status == StatusCode::BAD_REQUEST {
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| "bad request".to_string());
        return Err(LookupError::InvalidInput(message));
    }
    if !status.is_success() {
        return Err(LookupError::UpstreamUnavailable(format!(
            "gateway returned {status}"
        )));
    }
    Ok(response.json().await?)
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// OpenWeather sends `cod` as a number for current weather and as a
/// string for forecasts.
fn is_ok_code(cod: Option<&Value>) -> bool {
    match cod {
        Some(Value::Number(n)) => n.as_i64() == Some(200),
        Some(Value::String(s)) => s == "200",
        _ => false,
    }
}

pub(crate) fn parse_weather(payload: Value, query: &str) -> Result<WeatherSnapshot, LookupError> {
    if !is_ok_code(payload.get("cod")) {
        return Err(LookupError::NotFound(query.to_string()));
    }
    let current: CurrentPayload = serde_json::from_value(payload).map_err(|err| {
        LookupError::UpstreamUnavailable(format!("malformed weather payload: {err}"))
    })?;
    let condition = current.weather.into_iter().next().unwrap_or_default();

    Ok(WeatherSnapshot {
        city_name: current.name,
        country_code: current.sys.country.unwrap_or_default(),
        condition_main: condition.main,
        condition_description: condition.description,
        temperature_c: current.main.temp,
        humidity_pct: current.main.humidity,
        wind_speed_ms: current.wind.speed,
        sunrise_epoch: current.sys.sunrise,
        sunset_epoch: current.sys.sunset,
        observation_epoch: current.dt,
        timezone_offset_sec: current.timezone,
    })
}

pub(crate) fn parse_forecast(payload: Value, city: &str) -> Result<Vec<ForecastEntry>, LookupError> {
    let Some(list) = payload.get("list").cloned() else {
        return Err(LookupError::NotFound(city.to_string()));
    };
    let slots: Vec<ForecastSlot> = serde_json::from_value(list).map_err(|err| {
        LookupError::UpstreamUnavailable(format!("malformed forecast payload: {err}"))
    })?;

    Ok(slots.into_iter().filter_map(ForecastSlot::into_entry).collect())
}

#[derive(Debug, Deserialize)]
struct CurrentPayload {
    name: String,
    sys: SysBlock,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    main: MainBlock,
    wind: WindBlock,
    dt: i64,
    timezone: i64,
}

#[derive(Debug, Deserialize)]
struct SysBlock {
    country: Option<String>,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Default, Deserialize)]
struct ConditionBlock {
    #[serde(default)]
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastSlot {
    dt: Option<i64>,
    dt_txt: Option<String>,
    main: ForecastMain,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
struct ForecastMain {
    temp: f64,
}

impl ForecastSlot {
    fn into_entry(self) -> Option<ForecastEntry> {
        let timestamp = self
            .dt_txt
            .as_deref()
            .and_then(parse_forecast_timestamp)
            .or_else(|| DateTime::from_timestamp(self.dt?, 0).map(|ts| ts.naive_utc()))?;
        let condition = self.weather.into_iter().next()?;
        Some(ForecastEntry {
            timestamp,
            temperature_c: self.main.temp,
            condition_main: condition.main,
            condition_description: condition.description,
        })
    }
}
