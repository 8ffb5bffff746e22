//! Current-temperature sources.
//!
//! The live source calls the Weatherbit "current" endpoint through RapidAPI in
//! imperial units. The offline source returns a fixed reading for local runs.

use std::time::Duration;

use log::{debug, warn};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::demand::Temperature;

pub const WEATHERBIT_URL: &str = "https://weatherbit-v1-mashape.p.rapidapi.com/current";
pub const RAPIDAPI_HOST: &str = "weatherbit-v1-mashape.p.rapidapi.com";
/// Reading used when no API key is configured.
pub const OFFLINE_TEMPERATURE_F: f64 = 75.0;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error fetching weather data: {0}")]
    Status(StatusCode),

    #[error("malformed weather response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("weather response contained no observations")]
    MissingReading,

    #[error("weather response contained a non-finite temperature: {0}")]
    InvalidReading(f64),
}

/// Anything that can report the current temperature.
pub trait TemperatureSource {
    fn current_temperature(&self) -> Result<Temperature, WeatherError>;

    /// Short description for logs.
    fn name(&self) -> String;
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    data: Vec<Observation>,
}

#[derive(Debug, Deserialize)]
struct Observation {
    temp: Option<f64>,
}

impl CurrentWeather {
    fn temperature(&self) -> Result<Temperature, WeatherError> {
        let degrees = self
            .data
            .first()
            .and_then(|obs| obs.temp)
            .ok_or(WeatherError::MissingReading)?;
        if !degrees.is_finite() {
            return Err(WeatherError::InvalidReading(degrees));
        }
        Ok(Temperature::fahrenheit(degrees))
    }
}

/// Extracts `data[0].temp` from a Weatherbit "current" response body.
pub fn parse_current_weather(body: &str) -> Result<Temperature, WeatherError> {
    let current: CurrentWeather = serde_json::from_str(body)?;
    current.temperature()
}

/// Live temperature from Weatherbit via RapidAPI.
pub struct WeatherbitClient {
    client: Client,
    base_url: String,
    api_key: String,
    latitude: f64,
    longitude: f64,
}

impl std::fmt::Debug for WeatherbitClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherbitClient")
            .field("base_url", &self.base_url)
            .field("latitude", &self.latitude)
            .field("longitude", &self.longitude)
            .finish()
    }
}

impl WeatherbitClient {
    pub fn new(api_key: impl Into<String>, latitude: f64, longitude: f64) -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: WEATHERBIT_URL.to_string(),
            api_key: api_key.into(),
            latitude,
            longitude,
        })
    }

    /// Points the client at another endpoint with the same API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl TemperatureSource for WeatherbitClient {
    fn current_temperature(&self) -> Result<Temperature, WeatherError> {
        debug!(
            "requesting current weather for ({}, {})",
            self.latitude, self.longitude
        );
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("lat", self.latitude.to_string()),
                ("lon", self.longitude.to_string()),
                ("units", "imperial".to_string()),
                ("lang", "en".to_string()),
            ])
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", RAPIDAPI_HOST)
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(WeatherError::Status(status));
        }
        let body = response.text()?;
        parse_current_weather(&body)
    }

    fn name(&self) -> String {
        format!("weatherbit ({}, {})", self.latitude, self.longitude)
    }
}

/// A constant reading, used for local runs without an API key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTemperature(pub Temperature);

impl Default for FixedTemperature {
    fn default() -> Self {
        Self(Temperature::fahrenheit(OFFLINE_TEMPERATURE_F))
    }
}

impl TemperatureSource for FixedTemperature {
    fn current_temperature(&self) -> Result<Temperature, WeatherError> {
        Ok(self.0)
    }

    fn name(&self) -> String {
        format!("fixed {}", self.0)
    }
}

/// Asks `source` for a reading; failures become the no-data signal.
pub fn fetch_temperature(source: &dyn TemperatureSource) -> Option<Temperature> {
    match source.current_temperature() {
        Ok(temperature) => {
            debug!("{} reported {temperature}", source.name());
            Some(temperature)
        }
        Err(e) => {
            warn!("{}: {e}", source.name());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unavailable;

    impl TemperatureSource for Unavailable {
        fn current_temperature(&self) -> Result<Temperature, WeatherError> {
            Err(WeatherError::Status(StatusCode::TOO_MANY_REQUESTS))
        }

        fn name(&self) -> String {
            "unavailable".to_string()
        }
    }

    #[test]
    fn test_parse_current_weather() {
        let body = r#"{"count":1,"data":[{"temp":68.4,"city_name":"Raleigh"}]}"#;
        assert_eq!(
            parse_current_weather(body).unwrap(),
            Temperature::fahrenheit(68.4)
        );
    }

    #[test]
    fn test_parse_uses_first_observation() {
        let body = r#"{"data":[{"temp":40},{"temp":90}]}"#;
        assert_eq!(
            parse_current_weather(body).unwrap(),
            Temperature::fahrenheit(40.0)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_current_weather(r#"{"data":[]}"#),
            Err(WeatherError::MissingReading)
        ));
        assert!(matches!(
            parse_current_weather(r#"{"data":[{"temp":null}]}"#),
            Err(WeatherError::MissingReading)
        ));
        assert!(matches!(
            parse_current_weather("not json"),
            Err(WeatherError::Parse(_))
        ));
    }

    #[test]
    fn test_fixed_source() {
        let source = FixedTemperature::default();
        assert_eq!(
            fetch_temperature(&source),
            Some(Temperature::fahrenheit(OFFLINE_TEMPERATURE_F))
        );
    }

    #[test]
    fn test_failures_become_no_data() {
        assert_eq!(fetch_temperature(&Unavailable), None);
    }

    #[test]
    fn test_status_error_message() {
        let err = WeatherError::Status(StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.to_string(), "Error fetching weather data: 429 Too Many Requests");
    }

    #[test]
    fn test_client_debug_hides_api_key() {
        let client = WeatherbitClient::new("secret-key", 35.78, -78.64).unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("35.78"));
    }
}
