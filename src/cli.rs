#![allow(clippy::missing_errors_doc)]

use std::{io::IsTerminal, net::IpAddr, path::PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::{
    data::{
        citysearch::CITYSEARCH_URL, gateway::DEFAULT_GATEWAY_URL, geoip::Coordinates,
        openweather::OPENWEATHER_URL,
    },
    server::GatewayConfig,
    ui::theme::{ColorCapability, detect_color_capability},
};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-lookup",
    version,
    about = "City weather lookup gateway and terminal client"
)]
pub struct Cli {
    /// Gateway base URL used by client commands
    #[arg(
        long,
        global = true,
        env = "WEATHER_LOOKUP_GATEWAY",
        default_value = DEFAULT_GATEWAY_URL
    )]
    pub gateway_url: String,

    /// Favorites file (default: config dir)
    #[arg(long, global = true)]
    pub favorites_file: Option<PathBuf>,

    /// Color output policy
    #[arg(long, global = true, value_enum, default_value_t = ColorArg::Auto, conflicts_with = "no_color")]
    pub color: ColorArg,

    /// Alias for --color never
    #[arg(long, global = true, conflicts_with = "color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run the API gateway
    Serve(ServeArgs),
    /// Current weather and 5-day forecast for a city
    Weather {
        /// City name
        city: String,

        /// Keep a live local-time line running until Ctrl-C
        #[arg(long)]
        live: bool,

        /// Add the city to favorites after a successful lookup
        #[arg(long)]
        save: bool,
    },
    /// Weather at coordinates, or at this machine's IP location
    Locate {
        /// Latitude (requires --lon)
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude (requires --lat)
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,

        /// Keep a live local-time line running until Ctrl-C
        #[arg(long)]
        live: bool,
    },
    /// Compare current weather in two cities
    Compare { first: String, second: String },
    /// City name suggestions for partial input
    Suggest { query: String },
    /// Manage favorite cities
    #[command(subcommand)]
    Favorites(FavoritesCommand),
}

#[derive(Debug, Subcommand, Clone)]
pub enum FavoritesCommand {
    /// List favorite cities
    List,
    /// Add a city
    Add { city: String },
    /// Remove a city
    Remove { city: String },
    /// Show weather for a favorite city
    Show { city: String },
}

#[derive(Debug, Args, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long, default_value_t = 3000)]
    pub port: u16,

    /// Listen address
    #[arg(long, default_value = "127.0.0.1")]
    pub bind: IpAddr,

    /// OpenWeather API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// OpenWeather API base URL
    #[arg(long, default_value = OPENWEATHER_URL)]
    pub weather_url: String,

    /// City search API base URL
    #[arg(long, default_value = CITYSEARCH_URL)]
    pub citysearch_url: String,

    /// Directory served at / (index page, images)
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

impl From<ServeArgs> for GatewayConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            bind: args.bind,
            port: args.port,
            api_key: args.api_key,
            weather_url: args.weather_url,
            citysearch_url: args.citysearch_url,
            static_dir: args.static_dir,
        }
    }
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Command::Locate { lat, lon, .. } = &self.command {
            match (lat, lon) {
                (Some(_), None) | (None, Some(_)) => {
                    anyhow::bail!("--lat and --lon must be provided together")
                }
                _ => {}
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn effective_color_mode(&self) -> ColorArg {
        if self.no_color {
            ColorArg::Never
        } else {
            self.color
        }
    }

    pub fn color_capability(&self) -> Option<ColorCapability> {
        detect_color_capability(self.effective_color_mode(), std::io::stdout().is_terminal())
    }

    pub fn is_serve(&self) -> bool {
        matches!(self.command, Command::Serve(_))
    }
}

/// Coordinates given on the command line, when both halves are present.
pub fn coordinates(lat: Option<f64>, lon: Option<f64>) -> Option<Coordinates> {
    Some(Coordinates {
        lat: lat?,
        lon: lon?,
    })
}
