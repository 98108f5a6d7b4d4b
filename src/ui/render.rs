use std::fmt::Write as _;

use crate::{
    app::dashboard::{CityReport, Comparison},
    data::join_url,
    domain::weather::{CityMatch, DaySummary, WeatherSnapshot},
    error::LookupError,
    ui::{RenderOptions, paint},
};

pub const COMPARE_FAILURE: &str = "Error fetching one or both cities.";
pub const LOCATE_FAILURE: &str = "Location error.";

pub fn render_report(report: &CityReport, now_epoch: i64, options: &RenderOptions) -> String {
    let mut out = render_weather(&report.weather, now_epoch, options);
    if let Some(days) = report.forecast.as_deref() {
        out.push('\n');
        out.push_str(&render_forecast(days));
    }
    out
}

pub fn render_weather(weather: &WeatherSnapshot, now_epoch: i64, options: &RenderOptions) -> String {
    let background = weather.background();
    let title = format!("{} {}", weather.display_name(), weather.emoji());
    let illustration = join_url(&options.asset_base, weather.illustration_at(now_epoch).path());

    let mut out = String::new();
    let _ = writeln!(out, "{}", paint(&title, background, options.color));
    let _ = writeln!(out, "  Local time:   {}", weather.local_time_at(now_epoch));
    let _ = writeln!(out, "  Temperature:  {}°C", weather.temperature_c);
    let _ = writeln!(out, "  Condition:    {}", weather.condition_description);
    let _ = writeln!(out, "  Humidity:     {}%", weather.humidity_pct);
    let _ = writeln!(out, "  Wind:         {} m/s", weather.wind_speed_ms);
    let _ = writeln!(out, "  Illustration: {illustration}");
    let _ = writeln!(out, "  Backdrop:     {} ({})", background.name(), background.css());
    out
}

pub fn render_forecast(days: &[DaySummary]) -> String {
    let mut out = String::from("Forecast\n");
    if days.is_empty() {
        out.push_str("  No forecast data.\n");
        return out;
    }
    for day in days {
        let _ = writeln!(
            out,
            "  {:<12} {}  {:>6}  {}",
            day.label,
            day.emoji,
            format!("{:.1}°C", day.mean_temp_c),
            day.condition_description
        );
    }
    out
}

pub fn render_comparison(comparison: &Comparison, options: &RenderOptions) -> String {
    let mut out = String::new();
    for (idx, weather) in [&comparison.first, &comparison.second].into_iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let title = format!("{} {}", weather.city_name, weather.emoji());
        let _ = writeln!(out, "{}", paint(&title, weather.background(), options.color));
        let _ = writeln!(out, "  Temp: {}°C", weather.temperature_c);
        let _ = writeln!(out, "  {}", weather.condition_description);
    }
    out
}

pub fn render_suggestions(matches: &[CityMatch]) -> String {
    if matches.is_empty() {
        return "No suggestions.\n".to_string();
    }
    matches
        .iter()
        .map(|city| format!("{}\n", city.display_name()))
        .collect()
}

pub fn render_favorites(favorites: &[String]) -> String {
    if favorites.is_empty() {
        return "No favorites yet.\n".to_string();
    }
    favorites
        .iter()
        .enumerate()
        .map(|(idx, city)| format!("{:>2}. {city}\n", idx + 1))
        .collect()
}

/// Notice for a failed comparison. Input problems keep their own message,
/// any lookup failure collapses into one line.
pub fn compare_notice(err: &LookupError) -> String {
    match err {
        LookupError::InvalidInput(message) => message.clone(),
        LookupError::NotFound(_) | LookupError::UpstreamUnavailable(_) => {
            COMPARE_FAILURE.to_string()
        }
    }
}

/// Notice for a failed lookup at the user's position.
pub fn locate_notice(err: &LookupError) -> String {
    match err {
        LookupError::InvalidInput(message) => message.clone(),
        LookupError::NotFound(_) | LookupError::UpstreamUnavailable(_) => {
            LOCATE_FAILURE.to_string()
        }
    }
}
