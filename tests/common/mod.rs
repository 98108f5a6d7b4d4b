#![allow(dead_code)]

use serde_json::{Value, json};
use weather_lookup::{
    app::{
        dashboard::Dashboard,
        favorites::{FavoritesStore, MemoryRepository},
    },
    data::{gateway::GatewayClient, geoip::GeoIpClient},
};
use wiremock::MockServer;

pub const API_KEY: &str = "test-key";

pub fn current_weather(city: &str, country: &str, main: &str, description: &str) -> Value {
    json!({
        "coord": { "lon": 2.35, "lat": 48.85 },
        "weather": [{ "id": 802, "main": main, "description": description, "icon": "03d" }],
        "main": { "temp": 7.2, "feels_like": 5.1, "humidity": 73 },
        "wind": { "speed": 4.1, "deg": 240 },
        "dt": 1_770_901_445,
        "sys": { "country": country, "sunrise": 1_770_879_780, "sunset": 1_770_916_020 },
        "timezone": 3600,
        "name": city,
        "cod": 200
    })
}

pub fn forecast_payload() -> Value {
    json!({
        "cod": "200",
        "cnt": 4,
        "list": [
            {
                "dt": 1_770_919_200,
                "main": { "temp": 4.0 },
                "weather": [{ "main": "Clouds", "description": "broken clouds" }],
                "dt_txt": "2026-02-12 18:00:00"
            },
            {
                "dt": 1_770_930_000,
                "main": { "temp": 2.0 },
                "weather": [{ "main": "Clouds", "description": "broken clouds" }],
                "dt_txt": "2026-02-12 21:00:00"
            },
            {
                "dt": 1_770_940_800,
                "main": { "temp": 1.0 },
                "weather": [{ "main": "Rain", "description": "light rain" }],
                "dt_txt": "2026-02-13 00:00:00"
            },
            {
                "dt": 1_771_027_200,
                "main": { "temp": -1.5 },
                "weather": [{ "main": "Snow", "description": "light snow" }],
                "dt_txt": "2026-02-14 00:00:00"
            }
        ]
    })
}

pub fn geodb_payload() -> Value {
    json!({
        "data": [
            { "id": 1, "city": "Paris", "name": "Paris", "country": "France", "countryCode": "FR", "population": 2_138_551 },
            { "id": 2, "city": "Paris", "name": "Paris", "country": "United States of America", "countryCode": "US", "population": 24_171 }
        ],
        "metadata": { "currentOffset": 0, "totalCount": 2 }
    })
}

pub fn dashboard(gateway: &MockServer) -> Dashboard<MemoryRepository> {
    dashboard_with_geoip(gateway, format!("{}/json/", gateway.uri()))
}

pub fn dashboard_with_geoip(
    gateway: &MockServer,
    geoip_url: String,
) -> Dashboard<MemoryRepository> {
    Dashboard::new(
        GatewayClient::with_base_url(gateway.uri()),
        GeoIpClient::with_url(geoip_url),
        FavoritesStore::open(MemoryRepository::default()),
    )
}
