//! Weather-driven demand recommendations.

use std::fmt::{self, Display, Formatter};

use log::{info, warn};

use crate::catalog::Category;
use crate::classifier::{ClassifierError, ProductClassifier};
use crate::inventory::ProductRecord;

/// Above this reading cold products are in demand.
pub const HOT_ABOVE_F: f64 = 75.0;
/// Below this reading hot products are in demand.
pub const COLD_BELOW_F: f64 = 50.0;

/// A temperature reading in degrees Fahrenheit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Temperature(f64);

impl Temperature {
    pub fn fahrenheit(degrees: f64) -> Self {
        Self(degrees)
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Weather band for this reading, or `None` when the reading is NaN.
    pub fn band(self) -> Option<WeatherBand> {
        if self.0 > HOT_ABOVE_F {
            Some(WeatherBand::Hot)
        } else if self.0 < COLD_BELOW_F {
            Some(WeatherBand::Cold)
        } else if (COLD_BELOW_F..=HOT_ABOVE_F).contains(&self.0) {
            Some(WeatherBand::Moderate)
        } else {
            None
        }
    }
}

impl Display for Temperature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Always shows a fractional part, as float readings are printed upstream.
        write!(f, "{:?}°F", self.0)
    }
}

/// Weather classes that drive which products are in demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherBand {
    /// Above 75°F.
    Hot,
    /// Below 50°F.
    Cold,
    /// 50°F to 75°F inclusive.
    Moderate,
}

impl WeatherBand {
    /// Whether a product of `category` is in demand in this weather.
    ///
    /// Moderate weather keeps every product so demand is left unchanged.
    pub fn wants(self, category: Category) -> bool {
        match self {
            WeatherBand::Hot => category == Category::Cold,
            WeatherBand::Cold => category == Category::Hot,
            WeatherBand::Moderate => true,
        }
    }
}

/// High-demand product names for the current weather, in table order.
///
/// Duplicate rows produce duplicate names. Without a temperature reading the
/// result is empty.
pub fn recommend(
    temperature: Option<Temperature>,
    products: &[ProductRecord],
    classifier: &ProductClassifier,
) -> Result<Vec<String>, ClassifierError> {
    let Some(temperature) = temperature else {
        info!("No weather data available for recommendations.");
        return Ok(Vec::new());
    };

    let Some(band) = temperature.band() else {
        warn!("temperature reading {temperature} is not a number; nothing recommended");
        return Ok(Vec::new());
    };
    let mut high_demand = Vec::new();
    for record in products {
        let category = classifier.categorize(&record.product_name)?;
        if band.wants(category) {
            high_demand.push(record.product_name.clone());
        }
    }
    info!(
        "{} of {} products in demand at {temperature} ({band:?})",
        high_demand.len(),
        products.len()
    );
    Ok(high_demand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::train_product_classifier;

    fn products() -> Vec<ProductRecord> {
        vec![
            ProductRecord::new("Iced Tea", "out-of-stock"),
            ProductRecord::new("Hot Chocolate", "in-stock"),
            ProductRecord::new("Bagels", "in-stock"),
        ]
    }

    #[test]
    fn test_bands() {
        let band = |degrees: f64| Temperature::fahrenheit(degrees).band();
        assert_eq!(band(80.0), Some(WeatherBand::Hot));
        assert_eq!(band(75.01), Some(WeatherBand::Hot));
        assert_eq!(band(75.0), Some(WeatherBand::Moderate));
        assert_eq!(band(50.0), Some(WeatherBand::Moderate));
        assert_eq!(band(49.99), Some(WeatherBand::Cold));
        assert_eq!(band(0.0), Some(WeatherBand::Cold));
        assert_eq!(band(f64::INFINITY), Some(WeatherBand::Hot));
        assert_eq!(band(f64::NAN), None);
    }

    #[test]
    fn test_band_wants_is_exhaustive() {
        assert!(WeatherBand::Hot.wants(Category::Cold));
        assert!(!WeatherBand::Hot.wants(Category::Hot));
        assert!(!WeatherBand::Hot.wants(Category::Snack));
        assert!(WeatherBand::Cold.wants(Category::Hot));
        assert!(!WeatherBand::Cold.wants(Category::Snack));
        for category in Category::ALL {
            assert!(WeatherBand::Moderate.wants(category));
        }
    }

    #[test]
    fn test_hot_weather_recommends_cold_products() {
        let classifier = train_product_classifier().unwrap();
        let result = recommend(Some(Temperature::fahrenheit(80.0)), &products(), &classifier);
        assert_eq!(result.unwrap(), vec!["Iced Tea"]);
    }

    #[test]
    fn test_cold_weather_recommends_hot_products() {
        let classifier = train_product_classifier().unwrap();
        let result = recommend(Some(Temperature::fahrenheit(40.0)), &products(), &classifier);
        assert_eq!(result.unwrap(), vec!["Hot Chocolate"]);
    }

    #[test]
    fn test_moderate_weather_keeps_everything() {
        let classifier = train_product_classifier().unwrap();
        for degrees in [50.0, 60.0, 75.0] {
            let result =
                recommend(Some(Temperature::fahrenheit(degrees)), &products(), &classifier);
            assert_eq!(result.unwrap(), vec!["Iced Tea", "Hot Chocolate", "Bagels"]);
        }
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let classifier = train_product_classifier().unwrap();
        let rows = vec![
            ProductRecord::new("Lemonade", "in-stock"),
            ProductRecord::new("Bagels", "in-stock"),
            ProductRecord::new("Lemonade", "out-of-stock"),
        ];
        let result = recommend(Some(Temperature::fahrenheit(90.0)), &rows, &classifier);
        assert_eq!(result.unwrap(), vec!["Lemonade", "Lemonade"]);
    }

    #[test]
    fn test_no_weather_data() {
        let classifier = train_product_classifier().unwrap();
        assert!(recommend(None, &products(), &classifier).unwrap().is_empty());
    }

    #[test]
    fn test_nan_reading_recommends_nothing() {
        let classifier = train_product_classifier().unwrap();
        let result = recommend(Some(Temperature::fahrenheit(f64::NAN)), &products(), &classifier);
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_temperature_display() {
        assert_eq!(Temperature::fahrenheit(80.0).to_string(), "80.0°F");
        assert_eq!(Temperature::fahrenheit(72.3).to_string(), "72.3°F");
        assert_eq!(Temperature::fahrenheit(-4.5).to_string(), "-4.5°F");
    }
}
