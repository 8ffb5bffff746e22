//! Inventory table loading.
//!
//! The inventory is a headed CSV with at least `product_name` and
//! `stock_status` columns; other columns are ignored:
//! ```csv
//! product_name,stock_status,price
//! Iced Tea,out-of-stock,3.50
//! Bagels,in-stock,2.25
//! ```

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use log::info;
use serde::Deserialize;
use thiserror::Error;

/// Stock status value that marks a product as unavailable.
pub const OUT_OF_STOCK: &str = "out-of-stock";

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("cannot open inventory file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error reading the CSV file: {0}")]
    Csv(#[from] csv::Error),
}

/// One row of the inventory table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductRecord {
    pub product_name: String,
    pub stock_status: String,
}

impl ProductRecord {
    pub fn new(product_name: impl Into<String>, stock_status: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            stock_status: stock_status.into(),
        }
    }

    /// True when the status reads `out-of-stock`, ignoring case and
    /// surrounding whitespace.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock_status.trim().to_lowercase() == OUT_OF_STOCK
    }
}

/// Reads inventory rows from any CSV source, in row order.
///
/// Field values are kept exactly as written; only `stock_status` comparisons
/// normalise case and whitespace.
pub fn read_inventory<R: Read>(reader: R) -> Result<Vec<ProductRecord>, InventoryError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let records = reader
        .deserialize()
        .collect::<Result<Vec<ProductRecord>, csv::Error>>()?;
    Ok(records)
}

/// Loads the inventory CSV at `path`.
pub fn load_inventory(path: impl AsRef<Path>) -> Result<Vec<ProductRecord>, InventoryError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InventoryError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_inventory(file)?;
    info!("loaded {} inventory rows from {}", records.len(), path.display());
    Ok(records)
}
