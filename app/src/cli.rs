//! Command line arguments, with environment-variable fallbacks.
//!
//! A `.env` file in the working directory (or a parent) is loaded first, so
//! its values act as fallbacks too. Variables already set in the environment
//! win over the file.

use std::path::PathBuf;

use clap::Parser;
use shelfcast::config::{DEFAULT_REPORT_PATH, parse_flag};
use shelfcast::weather::OFFLINE_TEMPERATURE_F;
use shelfcast::{Settings, Temperature, WeatherMode, WeatherSettings};

/// Categorize cafe products, check the weather and recommend what to restock.
#[derive(Parser, Debug, Clone)]
#[command(name = "shelfcast")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Args {
    /// Inventory CSV with `product_name` and `stock_status` columns
    pub inventory: PathBuf,

    /// Latitude used for the weather lookup
    #[arg(long, env = "LATITUDE", allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude used for the weather lookup
    #[arg(long, env = "LONGITUDE", allow_negative_numbers = true)]
    pub longitude: f64,

    /// Query the live weather API ("true") or use the offline reading
    #[arg(long, env = "USE_API_KEY", default_value = "false")]
    pub use_api_key: String,

    /// RapidAPI key for the Weatherbit API
    #[arg(long, env = "RAPIDAPI_KEY", hide_env_values = true)]
    pub rapidapi_key: Option<String>,

    /// Temperature (°F) reported when the live API is not used
    #[arg(long, default_value_t = OFFLINE_TEMPERATURE_F, allow_negative_numbers = true)]
    pub offline_temperature: f64,

    /// Where to write the Markdown report
    #[arg(short, long, env = "REPORT_PATH", default_value = DEFAULT_REPORT_PATH)]
    pub report: PathBuf,

    /// Verbosity level (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Loads `.env` into the process environment. Returns the file that was read.
pub fn load_env_file() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

impl Args {
    /// 0 = quiet, 1 = normal, 2 = verbose, 3+ = debug.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }

    pub fn settings(&self) -> Settings {
        let mode = if parse_flag(&self.use_api_key) {
            WeatherMode::Live {
                api_key: self.rapidapi_key.clone().unwrap_or_default(),
            }
        } else {
            WeatherMode::Offline {
                temperature: Temperature::fahrenheit(self.offline_temperature),
            }
        };
        Settings {
            inventory_path: self.inventory.clone(),
            report_path: self.report.clone(),
            weather: WeatherSettings {
                latitude: self.latitude,
                longitude: self.longitude,
                mode,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec![
            "shelfcast",
            "inventory.csv",
            "--latitude",
            "35.78",
            "--longitude",
            "-78.64",
            "--report",
            "out.md",
        ];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_offline_settings() {
        let args = parse(&["--offline-temperature", "42"]);
        let settings = args.settings();
        assert_eq!(settings.inventory_path, PathBuf::from("inventory.csv"));
        assert_eq!(settings.report_path, PathBuf::from("out.md"));
        assert_eq!(settings.weather.longitude, -78.64);
        assert_eq!(
            settings.weather.mode,
            WeatherMode::Offline {
                temperature: Temperature::fahrenheit(42.0)
            }
        );
    }

    #[test]
    fn test_live_settings() {
        let args = parse(&["--use-api-key", " True ", "--rapidapi-key", "abc"]);
        assert_eq!(
            args.settings().weather.mode,
            WeatherMode::Live {
                api_key: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_env_file_supplies_coordinates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "LATITUDE=12.5\nLONGITUDE=-3.25\n").unwrap();
        dotenvy::from_path_override(&path).unwrap();

        let args = Args::try_parse_from(["shelfcast", "inventory.csv"]).unwrap();
        assert_eq!(args.latitude, 12.5);
        assert_eq!(args.longitude, -3.25);
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(parse(&[]).verbosity(), 1);
        assert_eq!(parse(&["-vv"]).verbosity(), 3);
        assert_eq!(parse(&["-q", "-v"]).verbosity(), 0);
    }
}
