use chrono::NaiveDate;

use crate::domain::weather::{DaySummary, ForecastEntry, day_label, emoji_for};

pub const MAX_FORECAST_DAYS: usize = 5;

/// Collapses three-hourly entries into one summary per calendar date.
///
/// Dates come straight from the provider's timestamp text, without any
/// timezone shift. Groups keep first-seen order and only the first
/// [`MAX_FORECAST_DAYS`] dates survive. Each summary carries the mean
/// temperature (one decimal) and the condition of the group's first entry.
#[must_use]
pub fn aggregate_by_day(entries: &[ForecastEntry]) -> Vec<DaySummary> {
    let mut groups: Vec<(NaiveDate, Vec<&ForecastEntry>)> = Vec::new();
    for entry in entries {
        let date = entry.timestamp.date();
        if let Some((_, group)) = groups.iter_mut().find(|(key, _)| *key == date) {
            group.push(entry);
        } else {
            groups.push((date, vec![entry]));
        }
    }

    groups
        .into_iter()
        .take(MAX_FORECAST_DAYS)
        .filter_map(|(date, group)| summarize(date, &group))
        .collect()
}

fn summarize(date: NaiveDate, group: &[&ForecastEntry]) -> Option<DaySummary> {
    let first = group.first()?;
    let total: f64 = group.iter().map(|entry| entry.temperature_c).sum();
    let mean = total / group.len() as f64;

    Some(DaySummary {
        date,
        label: day_label(date),
        mean_temp_c: round_one_decimal(mean),
        condition_main: first.condition_main.clone(),
        condition_description: first.condition_description.clone(),
        emoji: emoji_for(&first.condition_main),
    })
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
