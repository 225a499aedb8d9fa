use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, ErrorKind};

const CONFIG_PATH_ENV_VAR: &str = "ALMANAC_CONFIG_FILE";

pub const DEFAULT_CELL_CAPACITY: u32 = 2;
pub const DEFAULT_EVENT_COLOR: &str = "#1A73E8";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How many events a grid cell shows before the rest collapses into an
    /// overflow count.
    pub cell_capacity: u32,
    /// Hex color applied to events that carry none of their own.
    pub default_event_color: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            cell_capacity: DEFAULT_CELL_CAPACITY,
            default_event_color: DEFAULT_EVENT_COLOR.to_owned(),
        }
    }
}

impl Config {
    /// A capacity of zero would hide every event, so it is rejected here at
    /// load time and clamped back to the default rather than per call.
    pub fn sanitize(mut self) -> Self {
        if self.cell_capacity == 0 {
            log::warn!(
                "cell_capacity must be positive, falling back to {}",
                DEFAULT_CELL_CAPACITY
            );
            self.cell_capacity = DEFAULT_CELL_CAPACITY;
        }
        self
    }
}

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("almanac").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".almanac.toml"));
    }

    locations
}

/// Loads the explicitly given config file, or the first one found in the
/// usual locations, or the defaults if there is none.
pub fn load_suitable_config(explicit: Option<&Path>) -> Result<Config, Error> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_configfile_locations()
            .into_iter()
            .find(|path| path.exists()),
    };

    let config = match path {
        Some(path) => {
            let raw = fs::read_to_string(&path)?;
            toml::from_str(&raw).map_err(|err| {
                Error::new(
                    ErrorKind::ConfigParse,
                    &format!("{}: {}", path.display(), err),
                )
            })?
        }
        None => Config::default(),
    };

    Ok(config.sanitize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.cell_capacity, 2);
        assert_eq!(config.default_event_color, "#1A73E8");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str("cell_capacity = 3").unwrap();
        assert_eq!(config.cell_capacity, 3);
        assert_eq!(config.default_event_color, DEFAULT_EVENT_COLOR);
    }

    #[test]
    fn zero_capacity_is_clamped_to_default() {
        let config: Config = toml::from_str("cell_capacity = 0").unwrap();
        assert_eq!(config.sanitize().cell_capacity, DEFAULT_CELL_CAPACITY);
    }
}
