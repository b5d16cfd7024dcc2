use serde::{Deserialize, Serialize};

/// Canonical current-weather record every display consumes.
///
/// `city` echoes whatever the user asked for, not the name the upstream
/// geocoder canonicalized it to. Temperature is degrees Celsius, wind speed
/// meters per second, both copied from upstream without rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub city: String,
    pub temperature_c: f64,
    pub wind_speed_mps: f64,
}
