//! Product classifier: TF-IDF features plus multinomial Naive Bayes.

use log::{debug, info};
use naive_bayes::{MultinomialNb, NbError};
use shelfcast_helpers::DataPoint;
use tf_idf::{Norm, StopWords, TfIdfError, TfIdfVectorizer, Tokenizer};
use thiserror::Error;

use crate::catalog::{CatalogError, Category, TrainingSet};

/// Laplace smoothing.
pub const DEFAULT_ALPHA: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    #[error("invalid training set: {0}")]
    Catalog(#[from] CatalogError),

    #[error("feature extraction failed: {0}")]
    Features(#[from] TfIdfError),

    #[error("naive bayes failed: {0}")]
    Model(#[from] NbError),
}

/// The vector space product names are projected into.
pub type FeatureSpace = TfIdfVectorizer<f64>;

/// The fitted category model.
pub type CategoryModel = MultinomialNb<Category, f64>;

/// A trained (model, feature space) pair.
///
/// Built once per run and then only read; classification never mutates it.
#[derive(Debug, Clone)]
pub struct ProductClassifier {
    feature_space: FeatureSpace,
    model: CategoryModel,
}

impl ProductClassifier {
    /// Fits the feature space and model on `training`.
    ///
    /// Names are lowercased, split into words and stripped of English stop
    /// words; weights are smoothed TF-IDF with L2-normalised rows.
    pub fn train(training: &TrainingSet) -> Result<Self, ClassifierError> {
        let mut feature_space = FeatureSpace::with_tokenizer(Tokenizer::new(StopWords::english()))
            .with_smooth_idf(true)
            .with_norm(Norm::L2);
        let names: Vec<&str> = training.names().collect();
        let matrix = feature_space.fit_transform(&names)?;

        let points: Vec<DataPoint<Category, f64>> = matrix
            .rows()
            .into_iter()
            .zip(training.products())
            .map(|(row, product)| DataPoint::new(row.to_owned(), product.category))
            .collect();
        let model = CategoryModel::fit(&points, DEFAULT_ALPHA)?;

        info!(
            "trained product classifier on {} products ({} terms)",
            training.len(),
            feature_space.vocabulary_size()
        );
        Ok(Self {
            feature_space,
            model,
        })
    }

    pub fn from_parts(feature_space: FeatureSpace, model: CategoryModel) -> Self {
        Self {
            feature_space,
            model,
        }
    }

    pub fn feature_space(&self) -> &FeatureSpace {
        &self.feature_space
    }

    pub fn model(&self) -> &CategoryModel {
        &self.model
    }

    pub fn into_parts(self) -> (CategoryModel, FeatureSpace) {
        (self.model, self.feature_space)
    }

    /// Assigns `product_name` to its most probable category.
    ///
    /// Names without any known word fall back to the category priors.
    pub fn categorize(&self, product_name: &str) -> Result<Category, ClassifierError> {
        categorize_product(&self.model, &self.feature_space, product_name)
    }
}

/// Trains on the built-in product list.
pub fn train_product_classifier() -> Result<ProductClassifier, ClassifierError> {
    let training = TrainingSet::embedded()?;
    ProductClassifier::train(&training)
}

/// Categorizes a product name with an explicit model and feature space.
pub fn categorize_product(
    model: &CategoryModel,
    feature_space: &FeatureSpace,
    product_name: &str,
) -> Result<Category, ClassifierError> {
    let features = feature_space.transform(product_name)?;
    let category = model.predict(features.view())?;
    debug!("categorized {product_name:?} as {category}");
    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> ProductClassifier {
        train_product_classifier().unwrap()
    }

    #[test]
    fn test_training_shapes() {
        let classifier = classifier();
        assert_eq!(classifier.model().classes(), &Category::ALL);
        assert_eq!(classifier.model().class_counts(), &[9, 10, 15]);
        assert_eq!(classifier.feature_space().vocabulary_size(), 44);
        assert_eq!(
            classifier.model().n_features(),
            classifier.feature_space().vocabulary_size()
        );
        assert_eq!(classifier.feature_space().term_index("with"), None);
    }

    #[test]
    fn test_known_products() {
        let classifier = classifier();
        let cases = [
            ("Iced Tea", Category::Cold),
            ("Iced Coffee", Category::Cold),
            ("Lemonade", Category::Cold),
            ("Ice Cream", Category::Cold),
            ("Hot Chocolate", Category::Hot),
            ("Coffee", Category::Hot),
            ("Chai Latte", Category::Hot),
            ("Espresso", Category::Hot),
            ("Bagels", Category::Snack),
            ("Muffins", Category::Snack),
            ("Croissant", Category::Snack),
        ];
        for (name, expected) in cases {
            assert_eq!(classifier.categorize(name).unwrap(), expected, "{name}");
        }
    }

    #[test]
    fn test_unknown_words_fall_back_to_priors() {
        let classifier = classifier();
        // Snack is the most frequent training category.
        assert_eq!(classifier.categorize("").unwrap(), Category::Snack);
        assert_eq!(classifier.categorize("Pizza").unwrap(), Category::Snack);
        assert_eq!(classifier.categorize("with the").unwrap(), Category::Snack);
    }

    #[test]
    fn test_categorize_is_case_insensitive_and_deterministic() {
        let classifier = classifier();
        let first = classifier.categorize("ICED LATTE").unwrap();
        assert_eq!(first, Category::Cold);
        for _ in 0..5 {
            assert_eq!(classifier.categorize("iced latte").unwrap(), first);
        }
        let retrained = train_product_classifier().unwrap();
        assert_eq!(retrained.categorize("Iced Latte").unwrap(), first);
    }

    #[test]
    fn test_free_function_matches_method() {
        let (model, feature_space) = classifier().into_parts();
        let category = categorize_product(&model, &feature_space, "Hot Apple Cider").unwrap();
        assert_eq!(category, Category::Hot);
        let rebuilt = ProductClassifier::from_parts(feature_space, model);
        assert_eq!(rebuilt.categorize("Hot Apple Cider").unwrap(), category);
    }

    #[test]
    fn test_custom_training_set() {
        let training = TrainingSet::new(
            &["Hot Soup", "Frozen Yogurt", "Pretzel"],
            &[Category::Hot, Category::Cold, Category::Snack],
        )
        .unwrap();
        let classifier = ProductClassifier::train(&training).unwrap();
        assert_eq!(classifier.categorize("Frozen Lemonade").unwrap(), Category::Cold);
        assert_eq!(classifier.categorize("soup").unwrap(), Category::Hot);
    }

    #[test]
    fn test_mismatched_parts_report_an_error() {
        let training = TrainingSet::new(&["Hot Soup", "Pretzel"], &[Category::Hot, Category::Snack])
            .unwrap();
        let small = ProductClassifier::train(&training).unwrap();
        let (_, small_space) = small.into_parts();
        let (model, _) = classifier().into_parts();
        let result = categorize_product(&model, &small_space, "Soup");
        assert!(matches!(
            result,
            Err(ClassifierError::Model(NbError::DimensionMismatch { .. }))
        ));
    }
}
