//! Weather-driven demand and restock recommendations for a cafe inventory.
//!
//! Product names are categorized as hot drinks, cold drinks or snacks by a
//! TF-IDF + multinomial Naive Bayes classifier trained on a built-in product
//! list. The current temperature then decides which categories are in
//! demand, and in-demand products that are out of stock are flagged for
//! restocking.
//!
//! ```no_run
//! use shelfcast::{Temperature, analyze, load_inventory, render_report, train_product_classifier};
//!
//! # fn main() -> shelfcast::Result<()> {
//! let classifier = train_product_classifier()?;
//! let products = load_inventory("inventory.csv")?;
//! let analysis = analyze(Some(Temperature::fahrenheit(82.0)), &products, &classifier)?;
//! println!("{}", render_report(&analysis));
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod demand;
pub mod error;
pub mod inventory;
pub mod report;
pub mod restock;
pub mod weather;

pub use catalog::{Category, LabeledProduct, TrainingSet};
pub use classifier::{
    CategoryModel, FeatureSpace, ProductClassifier, categorize_product, train_product_classifier,
};
pub use config::{Settings, WeatherMode, WeatherSettings};
pub use demand::{Temperature, WeatherBand, recommend};
pub use error::{Error, Result};
pub use inventory::{ProductRecord, load_inventory, read_inventory};
pub use report::{Analysis, analyze, render_report, write_report};
pub use restock::restock;
pub use weather::{FixedTemperature, TemperatureSource, WeatherbitClient, fetch_temperature};

// Shared numeric building blocks, re-exported for downstream crates.
pub use shelfcast_helpers::{DataPoint, Float};
