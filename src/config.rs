//! Run configuration.
//!
//! The binary fills these from command-line flags with environment fallbacks
//! (`LATITUDE`, `LONGITUDE`, `USE_API_KEY`, `RAPIDAPI_KEY`, `REPORT_PATH`).

use std::path::PathBuf;

use thiserror::Error;

use crate::demand::Temperature;
use crate::weather::{FixedTemperature, TemperatureSource, WeatherError, WeatherbitClient};

pub const DEFAULT_REPORT_PATH: &str = "report.md";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("latitude must be within [-90, 90], got {0}")]
    Latitude(f64),

    #[error("longitude must be within [-180, 180], got {0}")]
    Longitude(f64),

    #[error("live weather requires a RapidAPI key")]
    MissingApiKey,

    #[error("offline temperature must be a finite number, got {0}")]
    Temperature(f64),
}

/// Where the temperature comes from.
#[derive(Clone, PartialEq)]
pub enum WeatherMode {
    Live { api_key: String },
    Offline { temperature: Temperature },
}

impl std::fmt::Debug for WeatherMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherMode::Live { .. } => f.write_str("Live"),
            WeatherMode::Offline { temperature } => {
                f.debug_struct("Offline").field("temperature", temperature).finish()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSettings {
    pub latitude: f64,
    pub longitude: f64,
    pub mode: WeatherMode,
}

impl WeatherSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ConfigError::Latitude(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ConfigError::Longitude(self.longitude));
        }
        match &self.mode {
            WeatherMode::Live { api_key } if api_key.trim().is_empty() => {
                Err(ConfigError::MissingApiKey)
            }
            WeatherMode::Offline { temperature } if !temperature.degrees().is_finite() => {
                Err(ConfigError::Temperature(temperature.degrees()))
            }
            _ => Ok(()),
        }
    }

    /// Builds the temperature source for this mode.
    pub fn source(&self) -> Result<Box<dyn TemperatureSource>, WeatherError> {
        Ok(match &self.mode {
            WeatherMode::Live { api_key } => Box::new(WeatherbitClient::new(
                api_key.trim(),
                self.latitude,
                self.longitude,
            )?),
            WeatherMode::Offline { temperature } => Box::new(FixedTemperature(*temperature)),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub inventory_path: PathBuf,
    pub report_path: PathBuf,
    pub weather: WeatherSettings,
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weather.validate()
    }
}

/// Interprets a `USE_API_KEY`-style flag: only `true` (any case, trimmed)
/// enables the live API.
pub fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather(latitude: f64, longitude: f64, mode: WeatherMode) -> WeatherSettings {
        WeatherSettings {
            latitude,
            longitude,
            mode,
        }
    }

    fn offline() -> WeatherMode {
        WeatherMode::Offline {
            temperature: Temperature::fahrenheit(75.0),
        }
    }

    #[test]
    fn test_valid_settings() {
        let settings = Settings {
            inventory_path: "inventory.csv".into(),
            report_path: DEFAULT_REPORT_PATH.into(),
            weather: weather(35.78, -78.64, offline()),
        };
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn test_coordinate_ranges() {
        assert_eq!(
            weather(91.0, 0.0, offline()).validate(),
            Err(ConfigError::Latitude(91.0))
        );
        assert_eq!(
            weather(0.0, -180.5, offline()).validate(),
            Err(ConfigError::Longitude(-180.5))
        );
        assert_eq!(weather(-90.0, 180.0, offline()).validate(), Ok(()));
    }

    #[test]
    fn test_live_mode_needs_key() {
        let settings = weather(
            0.0,
            0.0,
            WeatherMode::Live {
                api_key: "  ".to_string(),
            },
        );
        assert_eq!(settings.validate(), Err(ConfigError::MissingApiKey));
    }

    #[test]
    fn test_offline_source() {
        let source = weather(0.0, 0.0, offline()).source().unwrap();
        assert_eq!(
            source.current_temperature().unwrap(),
            Temperature::fahrenheit(75.0)
        );
    }

    #[test]
    fn test_offline_temperature_must_be_finite() {
        for degrees in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mode = WeatherMode::Offline {
                temperature: Temperature::fahrenheit(degrees),
            };
            let err = weather(0.0, 0.0, mode).validate().unwrap_err();
            assert!(matches!(err, ConfigError::Temperature(_)));
        }
        let mode = WeatherMode::Offline {
            temperature: Temperature::fahrenheit(-20.0),
        };
        assert_eq!(weather(0.0, 0.0, mode).validate(), Ok(()));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let mode = WeatherMode::Live {
            api_key: "secret".to_string(),
        };
        assert!(!format!("{mode:?}").contains("secret"));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" TRUE\n"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("1"));
        assert!(!parse_flag(""));
    }
}
