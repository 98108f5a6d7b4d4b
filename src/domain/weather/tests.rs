use super::*;

#[test]
fn emoji_matching_ignores_case() {
    assert_eq!(emoji_for("Clouds"), "☁️");
    assert_eq!(emoji_for("RAIN"), "🌧️");
    assert_eq!(emoji_for("clear"), "☀️");
    assert_eq!(emoji_for("sNoW"), "❄️");
    assert_eq!(emoji_for("Thunderstorm"), "⛈️");
    assert_eq!(emoji_for("Drizzle"), "🌦️");
}

#[test]
fn haze_fog_and_mist_share_an_emoji() {
    assert_eq!(emoji_for("Haze"), "🌫️");
    assert_eq!(emoji_for("Fog"), "🌫️");
    assert_eq!(emoji_for("Mist"), "🌫️");
}

#[test]
fn unknown_conditions_fall_back_to_globe() {
    assert_eq!(emoji_for("Tornado"), "🌍");
    assert_eq!(emoji_for(""), "🌍");
    assert_eq!(Condition::parse("Smoke"), Condition::Unknown);
}

#[test]
fn backgrounds_follow_condition_groups() {
    assert_eq!(background_for("Clear"), Background::Sky);
    assert_eq!(background_for("clouds"), Background::Overcast);
    assert_eq!(background_for("Rain"), Background::Rain);
    assert_eq!(background_for("Drizzle"), Background::Rain);
    assert_eq!(background_for("SNOW"), Background::Snow);
    assert_eq!(background_for("Thunderstorm"), Background::Storm);
    assert_eq!(background_for("Haze"), Background::Haze);
    assert_eq!(background_for("Mist"), Background::Haze);
}

#[test]
fn fog_uses_the_default_background() {
    assert_eq!(background_for("Fog"), Background::Default);
    assert_eq!(background_for("Squall"), Background::Default);
}

#[test]
fn background_css_is_a_bottom_up_gradient() {
    assert_eq!(
        Background::Sky.css(),
        "linear-gradient(to top, #56ccf2, #2f80ed)"
    );
    assert_eq!(
        Background::Default.css(),
        "linear-gradient(to top, #2c3e50, #4ca1af)"
    );
}

#[test]
fn snow_outranks_wind_in_illustrations() {
    assert_eq!(
        illustration_for("light snow and windy", true),
        Illustration::Snow
    );
    assert_eq!(illustration_for("rain and snow", false), Illustration::Snow);
    assert_eq!(illustration_for("windy rain", true), Illustration::Rain);
}

#[test]
fn cloud_illustrations_split_on_mostly() {
    assert_eq!(
        illustration_for("Mostly Cloudy", true),
        Illustration::MostlyCloudy
    );
    assert_eq!(
        illustration_for("broken clouds", true),
        Illustration::PartlyCloudy
    );
}

#[test]
fn clear_and_default_illustrations_depend_on_daylight() {
    assert_eq!(illustration_for("clear sky", true), Illustration::ClearDay);
    assert_eq!(
        illustration_for("clear sky", false),
        Illustration::ClearNight
    );
    assert_eq!(
        illustration_for("volcanic ash", true),
        Illustration::ClearDay
    );
    assert_eq!(
        illustration_for("volcanic ash", false),
        Illustration::ClearNight
    );
}

#[test]
fn remaining_keywords_keep_their_order() {
    assert_eq!(illustration_for("sunny spells", true), Illustration::SunnyDay);
    assert_eq!(illustration_for("mist", true), Illustration::Mist);
    assert_eq!(illustration_for("fog", true), Illustration::Fog);
    assert_eq!(illustration_for("haze", true), Illustration::Mist);
    assert_eq!(illustration_for("mist and fog", true), Illustration::Mist);
}

#[test]
fn illustration_paths_live_under_images() {
    assert_eq!(Illustration::Windy.path(), "images/windy.jpg");
    assert_eq!(Illustration::ClearNight.path(), "images/clear-night.jpg");
}

#[test]
fn daytime_window_is_inclusive() {
    assert!(is_daytime(1000, 0, 900, 1100));
    assert!(!is_daytime(800, 0, 900, 1100));
    assert!(is_daytime(900, 0, 900, 1100));
    assert!(is_daytime(1100, 0, 900, 1100));
    assert!(!is_daytime(1101, 0, 900, 1100));
}

#[test]
fn daytime_applies_the_location_offset() {
    assert!(is_daytime(700, 200, 900, 1100));
    assert!(!is_daytime(1000, 3600, 900, 1100));
}

#[test]
fn daytime_saturates_extreme_offsets() {
    assert!(!is_daytime(i64::MAX, 3600, 0, 10));
    assert!(!is_daytime(i64::MIN, -3600, 0, 10));
    assert!(is_daytime(i64::MAX, 1, 0, i64::MAX));
}

#[test]
fn hex_stops_match_rgb_stops() {
    assert_eq!(
        Background::Snow.stops(),
        ("#e6dada".to_string(), "#274046".to_string())
    );
    assert_eq!(
        Background::Snow.rgb_stops(),
        ((230, 218, 218), (39, 64, 70))
    );
}

#[test]
fn local_time_uses_twelve_hour_clock_with_seconds() {
    // 2026-02-12T13:04:05Z
    let epoch = 1_770_901_445;
    assert_eq!(format_local_time(epoch, 0), "01:04:05 PM");
    assert_eq!(format_local_time(epoch, 3600), "02:04:05 PM");
    assert_eq!(format_local_time(epoch, -14 * 3600), "11:04:05 PM");
}

#[test]
fn local_time_out_of_range_renders_placeholder() {
    assert_eq!(format_local_time(i64::MAX, 0), "--:--:-- --");
}

#[test]
fn snapshot_helpers_delegate_to_policy() {
    let snapshot = crate::test_support::paris_snapshot();
    assert_eq!(snapshot.emoji(), "☁️");
    assert_eq!(snapshot.background(), Background::Overcast);
    assert_eq!(snapshot.display_name(), "Paris, FR");
    assert!(snapshot.is_daytime_at(snapshot.sunrise_epoch));
    assert_eq!(
        snapshot.illustration_at(snapshot.sunrise_epoch),
        Illustration::PartlyCloudy
    );
}

#[test]
fn forecast_timestamps_and_labels() {
    let ts = parse_forecast_timestamp("2026-02-12 09:00:00").expect("valid timestamp");
    assert_eq!(day_label(ts.date()), "Thu, Feb 12");
    assert!(parse_forecast_timestamp("2026-02-12T09:00").is_none());
}
