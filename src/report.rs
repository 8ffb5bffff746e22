//! Markdown report of the weather analysis.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::classifier::{ClassifierError, ProductClassifier};
use crate::demand::{Temperature, WeatherBand, recommend};
use crate::inventory::ProductRecord;
use crate::restock::restock;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot write report {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Outcome of one run of the recommendation pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub temperature: Option<Temperature>,
    pub high_demand: Vec<String>,
    pub restock: Vec<String>,
}

/// Runs demand recommendation and restock selection over `products`.
pub fn analyze(
    temperature: Option<Temperature>,
    products: &[ProductRecord],
    classifier: &ProductClassifier,
) -> Result<Analysis, ClassifierError> {
    let high_demand = recommend(temperature, products, classifier)?;
    let restock = restock(temperature, products, &high_demand);
    Ok(Analysis {
        temperature,
        high_demand,
        restock,
    })
}

fn headline(band: WeatherBand) -> &'static str {
    match band {
        WeatherBand::Hot => "Beat the heat with our refreshing cold drinks and tasty snacks!",
        WeatherBand::Cold => {
            "Beat the chill with something warm from our hot drinks and comforting snacks!"
        }
        WeatherBand::Moderate => "Enjoy a wide range of drinks and snacks for this perfect weather!",
    }
}

#[derive(Default)]
struct Lines(String);

impl Lines {
    fn line(&mut self, text: &str) {
        self.0.push_str(text);
        self.0.push('\n');
    }

    fn items(&mut self, items: &[String]) {
        for item in items {
            self.line(&format!("- {item}"));
        }
    }
}

/// Renders the report as Markdown.
pub fn render_report(analysis: &Analysis) -> String {
    let mut out = Lines::default();
    out.line("# Product Categorization and Weather Analysis Report\n");
    out.line("## Key Insights Discovered\n");
    out.line("Training product categorization model...");
    out.line("Fetching weather data...");

    match analysis.temperature {
        Some(temperature) => {
            out.line(&format!("Current temperature: {temperature}\n"));
            if let Some(band) = temperature.band() {
                out.line(&format!("\n{}", headline(band)));
            }

            out.line("\nHigh Demand Products Based on Weather:");
            out.items(&analysis.high_demand);

            if analysis.restock.is_empty() {
                out.line("\nNo products need to be restocked for the current weather conditions.");
            } else {
                out.line("\nThese products should be restocked based on the weather conditions:");
                out.items(&analysis.restock);
            }
        }
        None => out.line("Could not retrieve weather data for recommendations."),
    }

    out.line("## Recommendations Based on Findings\n");
    out.line("- Use the 5-day forecast API to define promotion strategies for customers.\n");
    out.line("- Set up promotional offers for regular customers.\n");
    out.line("- Monitor stock levels regularly and restock items accordingly.\n");
    out.line("## External Data Source\n");
    out.line("- Weather data sourced from Weatherbit API (RapidAPI).\n");
    out.0
}

/// Replaces the contents of `path` with `contents`.
pub fn write_report(path: impl AsRef<Path>, contents: &str) -> Result<(), ReportError> {
    let path = path.as_ref();
    fs::write(path, contents).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote report to {}", path.display());
    Ok(())
}
