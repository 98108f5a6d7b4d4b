use serde_json::{Value, json};

use crate::domain::weather::{ForecastEntry, WeatherSnapshot, parse_forecast_timestamp};

pub(crate) const PARIS_OBSERVED: i64 = 1_770_901_445;
pub(crate) const PARIS_SUNRISE: i64 = 1_770_879_780;
pub(crate) const PARIS_SUNSET: i64 = 1_770_916_020;

pub(crate) fn paris_weather_json() -> Value {
    json!({
        "coord": {"lon": 2.3488, "lat": 48.8534},
        "weather": [{"id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d"}],
        "main": {"temp": 7.2, "feels_like": 5.8, "pressure": 1008, "humidity": 73},
        "wind": {"speed": 4.1, "deg": 220},
        "dt": PARIS_OBSERVED,
        "sys": {"country": "FR", "sunrise": PARIS_SUNRISE, "sunset": PARIS_SUNSET},
        "timezone": 3600,
        "id": 2_988_507,
        "name": "Paris",
        "cod": 200
    })
}

pub(crate) fn paris_snapshot() -> WeatherSnapshot {
    WeatherSnapshot {
        city_name: "Paris".to_string(),
        country_code: "FR".to_string(),
        condition_main: "Clouds".to_string(),
        condition_description: "scattered clouds".to_string(),
        temperature_c: 7.2,
        humidity_pct: 73.0,
        wind_speed_ms: 4.1,
        sunrise_epoch: PARIS_SUNRISE,
        sunset_epoch: PARIS_SUNSET,
        observation_epoch: PARIS_OBSERVED,
        timezone_offset_sec: 3600,
    }
}

pub(crate) fn forecast_entry(ts: &str, temp: f64, main: &str, description: &str) -> ForecastEntry {
    ForecastEntry {
        timestamp: parse_forecast_timestamp(ts).expect("valid fixture timestamp"),
        temperature_c: temp,
        condition_main: main.to_string(),
        condition_description: description.to_string(),
    }
}
