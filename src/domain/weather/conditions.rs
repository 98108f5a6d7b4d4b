#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Snow,
    Thunderstorm,
    Haze,
    Fog,
    Mist,
    Unknown,
}

const CONDITION_NAMES: &[(&str, Condition)] = &[
    ("clear", Condition::Clear),
    ("clouds", Condition::Clouds),
    ("rain", Condition::Rain),
    ("drizzle", Condition::Drizzle),
    ("snow", Condition::Snow),
    ("thunderstorm", Condition::Thunderstorm),
    ("haze", Condition::Haze),
    ("fog", Condition::Fog),
    ("mist", Condition::Mist),
];

impl Condition {
    /// Case-insensitive lookup of a provider `weather[].main` value.
    /// Anything outside the known set maps to [`Condition::Unknown`].
    #[must_use]
    pub fn parse(main: &str) -> Self {
        let lowered = main.to_lowercase();
        CONDITION_NAMES
            .iter()
            .find_map(|(name, condition)| (*name == lowered).then_some(*condition))
            .unwrap_or(Self::Unknown)
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Clouds => "☁️",
            Self::Rain => "🌧️",
            Self::Clear => "☀️",
            Self::Snow => "❄️",
            Self::Thunderstorm => "⛈️",
            Self::Drizzle => "🌦️",
            Self::Haze | Self::Fog | Self::Mist => "🌫️",
            Self::Unknown => "🌍",
        }
    }

    #[must_use]
    pub fn background(self) -> Background {
        match self {
            Self::Clear => Background::Sky,
            Self::Clouds => Background::Overcast,
            Self::Rain | Self::Drizzle => Background::Rain,
            Self::Snow => Background::Snow,
            Self::Thunderstorm => Background::Storm,
            Self::Haze | Self::Mist => Background::Haze,
            Self::Fog | Self::Unknown => Background::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Background {
    Sky,
    Overcast,
    Rain,
    Snow,
    Storm,
    Haze,
    Default,
}

impl Background {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sky => "sky",
            Self::Overcast => "overcast",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Storm => "storm",
            Self::Haze => "haze",
            Self::Default => "default",
        }
    }

    /// Bottom and top colour stops, in that order.
    #[must_use]
    pub fn rgb_stops(self) -> (Rgb, Rgb) {
        match self {
            Self::Sky => ((0x56, 0xcc, 0xf2), (0x2f, 0x80, 0xed)),
            Self::Overcast => ((0xbd, 0xc3, 0xc7), (0x2c, 0x3e, 0x50)),
            Self::Rain => ((0x37, 0x3b, 0x44), (0x42, 0x86, 0xf4)),
            Self::Snow => ((0xe6, 0xda, 0xda), (0x27, 0x40, 0x46)),
            Self::Storm => ((0x14, 0x1e, 0x30), (0x24, 0x3b, 0x55)),
            Self::Haze => ((0x75, 0x7f, 0x9a), (0xd7, 0xdd, 0xe8)),
            Self::Default => ((0x2c, 0x3e, 0x50), (0x4c, 0xa1, 0xaf)),
        }
    }

    /// The same stops as `#rrggbb` strings.
    #[must_use]
    pub fn stops(self) -> (String, String) {
        let (bottom, top) = self.rgb_stops();
        (hex(bottom), hex(top))
    }

    #[must_use]
    pub fn css(self) -> String {
        let (bottom, top) = self.stops();
        format!("linear-gradient(to top, {bottom}, {top})")
    }
}

pub type Rgb = (u8, u8, u8);

fn hex((r, g, b): Rgb) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Illustration {
    Snow,
    Rain,
    Windy,
    MostlyCloudy,
    PartlyCloudy,
    ClearDay,
    ClearNight,
    SunnyDay,
    Mist,
    Fog,
}

impl Illustration {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Snow => "images/snow.jpg",
            Self::Rain => "images/rain.jpg",
            Self::Windy => "images/windy.jpg",
            Self::MostlyCloudy => "images/mostly-cloudy.jpg",
            Self::PartlyCloudy => "images/partly-cloudy.jpg",
            Self::ClearDay => "images/clear-day.jpg",
            Self::ClearNight => "images/clear-night.jpg",
            Self::SunnyDay => "images/sunny-day.jpg",
            Self::Mist => "images/mist.jpg",
            Self::Fog => "images/fog.jpg",
        }
    }

    fn clear(is_day: bool) -> Self {
        if is_day {
            Self::ClearDay
        } else {
            Self::ClearNight
        }
    }
}

#[must_use]
pub fn emoji_for(condition_main: &str) -> &'static str {
    Condition::parse(condition_main).emoji()
}

#[must_use]
pub fn background_for(condition_main: &str) -> Background {
    Condition::parse(condition_main).background()
}

/// Picks the illustration for a free-text description. Keywords are tested
/// in a fixed order and the first hit wins, so "light snow and wind" is snow.
#[must_use]
pub fn illustration_for(description: &str, is_day: bool) -> Illustration {
    let text = description.to_lowercase();
    if text.contains("snow") {
        Illustration::Snow
    } else if text.contains("rain") {
        Illustration::Rain
    } else if text.contains("wind") {
        Illustration::Windy
    } else if text.contains("cloud") {
        if text.contains("mostly") {
            Illustration::MostlyCloudy
        } else {
            Illustration::PartlyCloudy
        }
    } else if text.contains("clear") {
        Illustration::clear(is_day)
    } else if text.contains("sun") {
        Illustration::SunnyDay
    } else if text.contains("mist") {
        Illustration::Mist
    } else if text.contains("fog") {
        Illustration::Fog
    } else if text.contains("haze") {
        Illustration::Mist
    } else {
        Illustration::clear(is_day)
    }
}

/// Shifts `now` into the location's offset and checks it against the
/// provider's sunrise/sunset, both ends inclusive. Sunrise and sunset are
/// taken as-is, so they must follow the same offset convention.
#[must_use]
pub fn is_daytime(now_epoch: i64, timezone_offset_sec: i64, sunrise: i64, sunset: i64) -> bool {
    let local_now = now_epoch.saturating_add(timezone_offset_sec);
    (sunrise..=sunset).contains(&local_now)
}
