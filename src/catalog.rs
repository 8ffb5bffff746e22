//! The labelled product list the classifier is trained on.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// Demand category of a product.
///
/// Variants are ordered alphabetically by their label so that classifier
/// ties resolve to the same category regardless of declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Cold,
    Hot,
    Snack,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Cold, Category::Hot, Category::Snack];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Cold => "cold",
            Category::Hot => "hot",
            Category::Snack => "snack",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cold" => Ok(Category::Cold),
            "hot" => Ok(Category::Hot),
            "snack" => Ok(Category::Snack),
            _ => Err(CatalogError::UnknownCategory(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("the number of products ({names}) must match the number of categories ({categories})")]
    LengthMismatch { names: usize, categories: usize },

    #[error("unknown product category: {0:?}")]
    UnknownCategory(String),
}

/// A product name with its known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledProduct {
    pub name: String,
    pub category: Category,
}

/// An immutable list of labelled products.
#[derive(Debug, Clone)]
pub struct TrainingSet {
    products: Vec<LabeledProduct>,
}

impl TrainingSet {
    /// Pairs up parallel name and category lists.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::LengthMismatch` if the lists differ in length.
    pub fn new<S: AsRef<str>>(names: &[S], categories: &[Category]) -> Result<Self, CatalogError> {
        if names.len() != categories.len() {
            return Err(CatalogError::LengthMismatch {
                names: names.len(),
                categories: categories.len(),
            });
        }
        let products = names
            .iter()
            .zip(categories)
            .map(|(name, &category)| LabeledProduct {
                name: name.as_ref().to_string(),
                category,
            })
            .collect();
        Ok(Self { products })
    }

    /// The built-in cafe product list.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::new(PRODUCT_NAMES, PRODUCT_CATEGORIES)
    }

    pub fn products(&self) -> &[LabeledProduct] {
        &self.products
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of products labelled with `category`.
    pub fn count(&self, category: Category) -> usize {
        self.products.iter().filter(|p| p.category == category).count()
    }
}

const PRODUCT_NAMES: &[&str] = &[
    "Coffee",
    "Chai Latte",
    "Hot Chocolate",
    "Iced Coffee",
    "Green Tea",
    "Scones",
    "Cinnamon Rolls",
    "Croissants",
    "Bagels",
    "Muffins",
    "Chocolate Chip Cookies",
    "Brownies",
    "Lemonade",
    "Iced Tea",
    "Frappuccino",
    "Hot Apple Cider",
    "Mocha",
    "Caramel Macchiato",
    "Latte",
    "Espresso",
    "Iced Latte",
    "Pumpkin Spice Latte",
    "Matcha Latte",
    "Peppermint Mocha",
    "Apple Cider",
    "Lemon Iced Tea",
    "Cold Brew Coffee",
    "Tea with Honey",
    "Vegan Muffin",
    "Blueberry Muffins",
    "Cheese Croissant",
    "Ice Cream",
    "Almond Biscotti",
    "Fruit Salad",
];

use Category::{Cold, Hot, Snack};

const PRODUCT_CATEGORIES: &[Category] = &[
    Hot, Hot, Hot, Cold, Cold, Snack, Hot, Snack, Snack, Snack, Snack, Snack, Cold, Cold, Cold,
    Hot, Hot, Hot, Hot, Hot, Cold, Cold, Cold, Snack, Snack, Snack, Snack, Snack, Snack, Snack,
    Snack, Cold, Snack, Hot,
];
