use serde::Deserialize;

use crate::{error::StationError, model::WeatherReading};

/// Raw Open-Meteo forecast payload, reduced to the fields we consume.
///
/// Everything else the endpoint returns is ignored at deserialization time.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    pub current_weather: Option<CurrentWeather>,
}

/// The nested `current_weather` block of the forecast payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,

    /// Upstream observation time, ISO 8601 without offset. Only logged.
    #[serde(default)]
    pub time: Option<String>,
}

/// Flatten one upstream payload into the canonical [`WeatherReading`].
///
/// `requested_city` is echoed back verbatim; the forecast payload carries
/// no usable place name of its own. Values are copied with no unit
/// conversion or rounding.
pub fn normalize(
    payload: &ForecastPayload,
    requested_city: &str,
) -> Result<WeatherReading, StationError> {
    let current = payload
        .current_weather
        .as_ref()
        .ok_or_else(|| StationError::Schema {
            endpoint: "forecast",
            detail: "missing 'current_weather' block".to_string(),
        })?;

    Ok(WeatherReading {
        city: requested_city.to_owned(),
        temperature_c: current.temperature,
        wind_speed_mps: current.windspeed,
    })
}
