use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::{config::Endpoints, error::StationError, normalize::ForecastPayload};

use super::WeatherSource;

/// Open-Meteo needs no API key: a geocoding lookup resolves the city name
/// to coordinates, then the forecast endpoint serves current conditions.
#[derive(Debug, Clone)]
pub struct OpenMeteoSource {
    endpoints: Endpoints,
    http: Client,
}

impl OpenMeteoSource {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
            http: Client::new(),
        }
    }

    async fn geocode(&self, city: &str) -> Result<GeocodeCandidate, StationError> {
        let res = self
            .http
            .get(&self.endpoints.geocoding)
            .query(&[
                ("name", city),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|source| StationError::Network { endpoint: "geocoding", source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| StationError::Network { endpoint: "geocoding", source })?;

        if !status.is_success() {
            return Err(StationError::Status {
                endpoint: "geocoding",
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: GeocodeResponse =
            serde_json::from_str(&body).map_err(|err| StationError::Schema {
                endpoint: "geocoding",
                detail: err.to_string(),
            })?;

        let candidate = first_candidate(parsed, city)?;

        info!(
            "resolved '{}' to {} ({:.4}, {:.4})",
            city,
            candidate.describe(),
            candidate.latitude,
            candidate.longitude,
        );

        Ok(candidate)
    }

    async fn fetch_forecast(
        &self,
        candidate: &GeocodeCandidate,
    ) -> Result<ForecastPayload, StationError> {
        let res = self
            .http
            .get(&self.endpoints.forecast)
            .query(&[
                ("latitude", candidate.latitude.to_string().as_str()),
                ("longitude", candidate.longitude.to_string().as_str()),
                ("current_weather", "true"),
            ])
            .send()
            .await
            .map_err(|source| StationError::Network { endpoint: "forecast", source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| StationError::Network { endpoint: "forecast", source })?;

        if !status.is_success() {
            return Err(StationError::Status {
                endpoint: "forecast",
                status,
                body: truncate_body(&body),
            });
        }

        let payload: ForecastPayload =
            serde_json::from_str(&body).map_err(|err| StationError::Schema {
                endpoint: "forecast",
                detail: err.to_string(),
            })?;

        if let Some(time) = payload.current_weather.as_ref().and_then(|c| c.time.as_deref()) {
            debug!("forecast observation time: {time}");
        }

        Ok(payload)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    /// Absent entirely when the name matches nothing.
    #[serde(default)]
    results: Vec<GeocodeCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeCandidate {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
}

impl GeocodeCandidate {
    fn describe(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }
}

/// Pick the candidate the rest of the pipeline uses.
///
/// The request asks for a single result, but the guard also covers servers
/// that return more.
fn first_candidate(
    response: GeocodeResponse,
    city: &str,
) -> Result<GeocodeCandidate, StationError> {
    response
        .results
        .into_iter()
        .next()
        .ok_or_else(|| StationError::CityNotFound(city.to_string()))
}

#[async_trait]
impl WeatherSource for OpenMeteoSource {
    async fn fetch_current(&self, city: &str) -> Result<ForecastPayload, StationError> {
        let candidate = self.geocode(city).await?;
        self.fetch_forecast(&candidate).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> GeocodeResponse {
        serde_json::from_value(value).expect("test response must deserialize")
    }

    #[test]
    fn empty_results_mean_city_not_found() {
        let parsed = response(json!({"results": []}));

        let err = first_candidate(parsed, "Nowhereville").unwrap_err();
        match err {
            StationError::CityNotFound(city) => assert_eq!(city, "Nowhereville"),
            other => panic!("expected CityNotFound, got {other:?}"),
        }
    }

    #[test]
    fn missing_results_key_parses_as_empty() {
        // Open-Meteo omits the key entirely on no match.
        let parsed = response(json!({"generationtime_ms": 0.5}));

        assert!(first_candidate(parsed, "Nowhereville").is_err());
    }

    #[test]
    fn first_of_several_candidates_wins() {
        let parsed = response(json!({
            "results": [
                {"name": "London", "latitude": 51.5, "longitude": -0.12, "country": "United Kingdom"},
                {"name": "London", "latitude": 42.98, "longitude": -81.24, "country": "Canada"}
            ]
        }));

        let candidate = first_candidate(parsed, "London").unwrap();
        assert_eq!(candidate.latitude, 51.5);
        assert_eq!(candidate.describe(), "London, United Kingdom");
    }

    #[test]
    fn candidate_without_country_still_parses() {
        let parsed = response(json!({
            "results": [{"name": "Springfield", "latitude": 39.8, "longitude": -89.6}]
        }));

        let candidate = first_candidate(parsed, "Springfield").unwrap();
        assert_eq!(candidate.describe(), "Springfield");
    }
}
