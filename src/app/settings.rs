use std::{ffi::OsString, path::PathBuf};

pub const CONFIG_DIR_ENV: &str = "WEATHER_LOOKUP_CONFIG_DIR";
const FAVORITES_FILE: &str = "favorites.json";

/// Where the favorites slot lives unless `--favorites-file` overrides it.
pub fn favorites_path() -> Option<PathBuf> {
    favorites_path_from(std::env::var_os(CONFIG_DIR_ENV), std::env::var_os("HOME"))
}

fn favorites_path_from(config_dir: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    if let Some(base) = config_dir {
        return Some(PathBuf::from(base).join(FAVORITES_FILE));
    }

    let home = home?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("weather-lookup")
            .join(FAVORITES_FILE),
    )
}
