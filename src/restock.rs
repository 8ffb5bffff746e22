//! Restock selection for out-of-stock, high-demand products.

use log::info;

use crate::demand::Temperature;
use crate::inventory::ProductRecord;

/// Out-of-stock products that are also in `high_demand`, in table order.
///
/// Membership is an exact comparison on `product_name`; only the stock
/// status is normalised. Without a temperature reading the result is empty.
pub fn restock(
    temperature: Option<Temperature>,
    products: &[ProductRecord],
    high_demand: &[String],
) -> Vec<String> {
    if temperature.is_none() {
        info!("No weather data available for restocking.");
        return Vec::new();
    }

    products
        .iter()
        .filter(|record| high_demand.contains(&record.product_name))
        .filter(|record| record.is_out_of_stock())
        .map(|record| record.product_name.clone())
        .collect()
}
