//! Core library for the `weather-station` CLI.
//!
//! This crate defines:
//! - Configuration handling
//! - The Open-Meteo weather source (geocoding + current conditions)
//! - Normalization of raw payloads into the canonical reading
//! - The display fan-out (station + display handlers)
//!
//! It is used by `station-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod display;
pub mod error;
pub mod model;
pub mod normalize;
pub mod source;
pub mod station;

pub use config::{Config, Endpoints};
pub use display::{ConsoleDisplay, DisplayHandler, EmojiDisplay};
pub use error::StationError;
pub use model::WeatherReading;
pub use normalize::{CurrentWeather, ForecastPayload, normalize};
pub use source::{WeatherSource, source_from_config};
pub use station::WeatherStation;
