//! Error types for the shelfcast pipeline.
//!
//! Each stage has its own error enum; [`Error`] aggregates them for callers
//! that drive the whole pipeline.

use thiserror::Error;

pub use crate::catalog::CatalogError;
pub use crate::classifier::ClassifierError;
pub use crate::config::ConfigError;
pub use crate::inventory::InventoryError;
pub use crate::report::ReportError;
pub use crate::weather::WeatherError;

/// Any failure surfaced by the pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Weather(#[from] WeatherError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

pub type Result<T> = std::result::Result<T, Error>;
