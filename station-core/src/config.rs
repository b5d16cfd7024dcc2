use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Upstream endpoint URLs, overridable for self-hosted Open-Meteo
/// instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoints {
    pub geocoding: String,
    pub forecast: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geocoding: "https://geocoding-api.open-meteo.com/v1/search".to_string(),
            forecast: "https://api.open-meteo.com/v1/forecast".to_string(),
        }
    }
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// City used when `show` gets no argument.
    pub default_city: Option<String>,

    /// Example TOML:
    /// [endpoints]
    /// forecast = "https://api.open-meteo.com/v1/forecast"
    #[serde(default)]
    pub endpoints: Endpoints,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-station", "station-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Set or clear the default city; empty input clears it.
    pub fn set_default_city(&mut self, city: &str) {
        let trimmed = city.trim();
        self.default_city =
            if trimmed.is_empty() { None } else { Some(trimmed.to_string()) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_default_to_public_open_meteo() {
        let endpoints = Endpoints::default();

        assert!(endpoints.geocoding.starts_with("https://geocoding-api.open-meteo.com"));
        assert!(endpoints.forecast.starts_with("https://api.open-meteo.com"));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_default_city("London");

        let serialized = toml::to_string_pretty(&cfg).expect("config must serialize");
        let parsed: Config = toml::from_str(&serialized).expect("config must parse back");

        assert_eq!(parsed, cfg);
    }

    #[test]
    fn missing_endpoints_section_falls_back_to_defaults() {
        let parsed: Config = toml::from_str("default_city = \"Kyiv\"").unwrap();

        assert_eq!(parsed.default_city.as_deref(), Some("Kyiv"));
        assert_eq!(parsed.endpoints, Endpoints::default());
    }

    #[test]
    fn set_default_city_trims_and_clears() {
        let mut cfg = Config::default();

        cfg.set_default_city("  Lviv  ");
        assert_eq!(cfg.default_city.as_deref(), Some("Lviv"));

        cfg.set_default_city("   ");
        assert_eq!(cfg.default_city, None);
    }
}
