use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between a city name and a broadcast.
#[derive(Debug, Error)]
pub enum StationError {
    /// Geocoding returned zero candidates for the requested name.
    #[error("no location found for '{0}'")]
    CityNotFound(String),

    /// Upstream JSON did not have the shape we rely on.
    #[error("unexpected {endpoint} payload: {detail}")]
    Schema {
        endpoint: &'static str,
        detail: String,
    },

    /// Transport-level failure before we got a response body.
    #[error("request to the {endpoint} endpoint failed")]
    Network {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status.
    #[error("{endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },
}
