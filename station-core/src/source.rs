use std::fmt::Debug;

use async_trait::async_trait;

use crate::{Config, error::StationError, normalize::ForecastPayload};

pub mod open_meteo;

/// One round trip to the outside world: city name in, raw payload out.
///
/// Implementations resolve the name to coordinates first, then fetch the
/// current conditions for those coordinates. No retry, no caching.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_current(&self, city: &str) -> Result<ForecastPayload, StationError>;
}

/// Construct the Open-Meteo backed source from config.
pub fn source_from_config(config: &Config) -> Box<dyn WeatherSource> {
    Box::new(open_meteo::OpenMeteoSource::new(config.endpoints.clone()))
}
