use futures::future::try_join;

use crate::{
    app::favorites::{FavoritesRepository, FavoritesStore},
    data::{
        gateway::GatewayClient,
        geoip::{Coordinates, GeoIpClient},
    },
    domain::{
        forecast::aggregate_by_day,
        weather::{CityMatch, DaySummary, WeatherSnapshot},
    },
    error::LookupError,
};

pub const MIN_SUGGESTION_CHARS: usize = 2;

/// Current conditions plus the daily forecast, when the forecast call worked.
#[derive(Debug, Clone, PartialEq)]
pub struct CityReport {
    pub weather: WeatherSnapshot,
    pub forecast: Option<Vec<DaySummary>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub first: WeatherSnapshot,
    pub second: WeatherSnapshot,
}

/// Drives the user-facing flows: search, locate, compare, suggest and the
/// favorites list.
#[derive(Debug)]
pub struct Dashboard<R> {
    gateway: GatewayClient,
    geoip: GeoIpClient,
    favorites: FavoritesStore<R>,
}

impl<R: FavoritesRepository> Dashboard<R> {
    pub fn new(gateway: GatewayClient, geoip: GeoIpClient, favorites: FavoritesStore<R>) -> Self {
        Self {
            gateway,
            geoip,
            favorites,
        }
    }

    pub fn gateway(&self) -> &GatewayClient {
        &self.gateway
    }

    pub async fn search(&self, input: &str) -> Result<CityReport, LookupError> {
        let city = input.trim();
        if city.is_empty() {
            return Err(LookupError::InvalidInput(
                "Please enter a city name.".to_string(),
            ));
        }

        let weather = self.gateway.weather_by_city(city).await?;
        let forecast = self.daily_forecast(city).await;
        Ok(CityReport { weather, forecast })
    }

    /// Weather at `coords`, or at the position detected from this machine's
    /// IP when none are given. The forecast follows the returned city name.
    pub async fn locate(&self, coords: Option<Coordinates>) -> Result<CityReport, LookupError> {
        let coords = match coords {
            Some(coords) => coords,
            None => self
                .geoip
                .detect()
                .await
                .ok_or_else(|| LookupError::InvalidInput("Location unavailable.".to_string()))?,
        };

        let weather = self
            .gateway
            .weather_by_coords(coords.lat, coords.lon)
            .await?;
        let forecast = self.daily_forecast(&weather.city_name).await;
        Ok(CityReport { weather, forecast })
    }

    /// Both lookups run concurrently; if either fails the comparison fails.
    pub async fn compare(&self, first: &str, second: &str) -> Result<Comparison, LookupError> {
        let (first, second) = (first.trim(), second.trim());
        if first.is_empty() || second.is_empty() {
            return Err(LookupError::InvalidInput(
                "Please enter two cities.".to_string(),
            ));
        }

        let (first, second) = try_join(
            self.gateway.weather_by_city(first),
            self.gateway.weather_by_city(second),
        )
        .await?;
        Ok(Comparison { first, second })
    }

    /// Suggestions for partially typed input. Short input skips the request
    /// and failures just mean no suggestions.
    pub async fn suggest(&self, input: &str) -> Vec<CityMatch> {
        let query = input.trim();
        if query.chars().count() < MIN_SUGGESTION_CHARS {
            return Vec::new();
        }

        match self.gateway.city_search(query).await {
            Ok(matches) => matches,
            Err(err) => {
                tracing::debug!(error = %err, query, "city search failed");
                Vec::new()
            }
        }
    }

    pub fn favorites(&self) -> &[String] {
        self.favorites.list()
    }

    /// Favorite names are stored trimmed; the same trimming applies when
    /// removing or opening one.
    pub fn add_favorite(&mut self, city: &str) -> anyhow::Result<bool> {
        let city = city.trim();
        if city.is_empty() {
            anyhow::bail!("Please enter a city name.");
        }
        self.favorites.add(city)
    }

    pub fn remove_favorite(&mut self, city: &str) -> anyhow::Result<bool> {
        self.favorites.remove(city.trim())
    }

    pub async fn open_favorite(&self, city: &str) -> Result<CityReport, LookupError> {
        let city = city.trim();
        if !self.favorites.contains(city) {
            return Err(LookupError::InvalidInput(format!(
                "{city} is not in favorites."
            )));
        }
        self.search(city).await
    }

    async fn daily_forecast(&self, city: &str) -> Option<Vec<DaySummary>> {
        match self.gateway.forecast(city).await {
            Ok(entries) => Some(aggregate_by_day(&entries)),
            Err(err) => {
                tracing::debug!(error = %err, city, "forecast unavailable");
                None
            }
        }
    }
}
