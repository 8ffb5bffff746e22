//! One run of the recommendation pipeline, from inventory file to report.

use anyhow::{Context, Result};
use log::{info, warn};
use shelfcast::{
    Analysis, Settings, analyze, fetch_temperature, load_inventory, render_report,
    train_product_classifier, write_report,
};

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate().context("invalid configuration")?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Loads the inventory, trains the classifier, reads the temperature and
    /// writes the report. A missing temperature is not an error.
    pub fn run(&self) -> Result<Analysis> {
        let inventory = &self.settings.inventory_path;
        let products = load_inventory(inventory)
            .with_context(|| format!("failed to load inventory {}", inventory.display()))?;
        info!("loaded {} products", products.len());

        info!("Training product categorization model...");
        let classifier =
            train_product_classifier().context("failed to train product classifier")?;

        info!("Fetching weather data...");
        let temperature = match self.settings.weather.source() {
            Ok(source) => fetch_temperature(source.as_ref()),
            Err(e) => {
                warn!("weather source unavailable: {e}");
                None
            }
        };

        let analysis = analyze(temperature, &products, &classifier)?;
        write_report(&self.settings.report_path, &render_report(&analysis))?;
        Ok(analysis)
    }
}
