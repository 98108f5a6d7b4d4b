mod conditions;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub use conditions::{
    Background, Condition, Illustration, Rgb, background_for, emoji_for, illustration_for,
    is_daytime,
};

/// Current conditions for one city, as reported in a single provider response.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub city_name: String,
    pub country_code: String,
    pub condition_main: String,
    pub condition_description: String,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_ms: f64,
    pub sunrise_epoch: i64,
    pub sunset_epoch: i64,
    pub observation_epoch: i64,
    pub timezone_offset_sec: i64,
}

impl WeatherSnapshot {
    pub fn condition(&self) -> Condition {
        Condition::parse(&self.condition_main)
    }

    pub fn emoji(&self) -> &'static str {
        self.condition().emoji()
    }

    pub fn background(&self) -> Background {
        self.condition().background()
    }

    pub fn is_daytime_at(&self, now_epoch: i64) -> bool {
        is_daytime(
            now_epoch,
            self.timezone_offset_sec,
            self.sunrise_epoch,
            self.sunset_epoch,
        )
    }

    pub fn illustration_at(&self, now_epoch: i64) -> Illustration {
        illustration_for(&self.condition_description, self.is_daytime_at(now_epoch))
    }

    pub fn local_time_at(&self, now_epoch: i64) -> String {
        format_local_time(now_epoch, self.timezone_offset_sec)
    }

    pub fn display_name(&self) -> String {
        if self.country_code.is_empty() {
            self.city_name.clone()
        } else {
            format!("{}, {}", self.city_name, self.country_code)
        }
    }
}

/// One three-hourly forecast slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    pub timestamp: NaiveDateTime,
    pub temperature_c: f64,
    pub condition_main: String,
    pub condition_description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub label: String,
    pub mean_temp_c: f64,
    pub condition_main: String,
    pub condition_description: String,
    pub emoji: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityMatch {
    pub name: String,
    pub country: String,
}

impl CityMatch {
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

const CLOCK_FORMAT: &str = "%I:%M:%S %p";
const CLOCK_PLACEHOLDER: &str = "--:--:-- --";

/// Wall-clock time at a location, `hh:mm:ss AM/PM`.
#[must_use]
pub fn format_local_time(now_epoch: i64, timezone_offset_sec: i64) -> String {
    DateTime::from_timestamp(now_epoch.saturating_add(timezone_offset_sec), 0)
        .map(|local| local.naive_utc().format(CLOCK_FORMAT).to_string())
        .unwrap_or_else(|| CLOCK_PLACEHOLDER.to_string())
}

/// Provider forecast timestamps, e.g. `2026-02-12 09:00:00`.
pub fn parse_forecast_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").ok()
}

pub fn day_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

#[cfg(test)]
mod tests;
