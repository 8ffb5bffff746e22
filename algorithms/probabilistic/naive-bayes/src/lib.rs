use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, warn};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use shelfcast_helpers::{DataPoint, Float, log_sum_exp};
use thiserror::Error;

/// Smallest smoothing value used; anything lower is raised to it.
pub const MIN_ALPHA: f64 = 1e-10;

/// Errors that can occur when fitting or using a Naive Bayes classifier.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NbError {
    /// Cannot fit on an empty training set
    #[error("cannot fit a classifier on an empty training set")]
    EmptyDataSet,
    /// Training points do not all have the same number of features
    #[error("training points have mismatched feature dimensions")]
    MismatchedDimensions,
    /// Smoothing must be finite and non-negative
    #[error("smoothing parameter alpha must be finite and non-negative")]
    InvalidAlpha,
    /// Multinomial features are counts or weights and cannot be negative
    #[error("multinomial features must be non-negative and finite")]
    NegativeFeature,
    /// The point to classify has the wrong number of features
    #[error("expected {expected} features, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// A multinomial Naive Bayes classifier.
///
/// Each class gets a prior proportional to its frequency in the training set
/// and a per-feature likelihood estimated from the summed feature weights of
/// its training points, with additive (Laplace/Lidstone) smoothing. Prediction
/// picks the class with the largest posterior, computed as a sum of logs.
///
/// # Type Parameters
///
/// * `L`: The label type. Classes are kept in sorted order; when two classes
///   score exactly the same, the one that sorts first wins.
/// * `F`: The float type for the features (e.g., `f32`, `f64`).
#[derive(Debug, Clone)]
pub struct MultinomialNb<L, F>
where
    L: Clone + Eq + Hash + Debug + Ord,
    F: Float,
{
    alpha: F,
    classes: Vec<L>,
    class_count: Vec<usize>,
    class_log_prior: Array1<F>,
    feature_count: Array2<F>,
    feature_log_prob: Array2<F>,
}

impl<L, F> MultinomialNb<L, F>
where
    L: Clone + Eq + Hash + Debug + Ord,
    F: Float,
{
    /// Fits the classifier to labelled feature vectors.
    ///
    /// # Arguments
    ///
    /// * `data`: Training points; features are term counts or TF-IDF weights.
    /// * `alpha`: Additive smoothing. `1.0` is Laplace smoothing. Values
    ///   below `MIN_ALPHA` are raised to it.
    ///
    /// # Errors
    ///
    /// Returns `NbError::EmptyDataSet`, `NbError::MismatchedDimensions`,
    /// `NbError::InvalidAlpha` or `NbError::NegativeFeature`.
    pub fn fit(data: &[DataPoint<L, F>], alpha: F) -> Result<Self, NbError> {
        if data.is_empty() {
            return Err(NbError::EmptyDataSet);
        }
        if !alpha.is_finite() || alpha < F::zero() {
            return Err(NbError::InvalidAlpha);
        }
        let min_alpha = F::cast(MIN_ALPHA).unwrap_or_else(F::epsilon);
        let alpha = if alpha < min_alpha {
            warn!("alpha too small, raising it to {MIN_ALPHA:e}");
            min_alpha
        } else {
            alpha
        };

        let n_features = data[0].dim();
        for dp in data {
            if dp.dim() != n_features {
                return Err(NbError::MismatchedDimensions);
            }
            if dp.features.iter().any(|&v| !v.is_finite() || v < F::zero()) {
                return Err(NbError::NegativeFeature);
            }
        }

        let classes: Vec<L> = data
            .iter()
            .map(|dp| dp.label.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let index: HashMap<&L, usize> = classes.iter().enumerate().map(|(i, l)| (l, i)).collect();

        let mut class_count = vec![0usize; classes.len()];
        let mut feature_count = Array2::zeros((classes.len(), n_features));
        for dp in data {
            let c = index[&dp.label];
            class_count[c] += 1;
            let mut row = feature_count.row_mut(c);
            row += &dp.features;
        }

        let n_samples = F::from_count(data.len());
        let class_log_prior = class_count
            .iter()
            .map(|&count| (F::from_count(count) / n_samples).ln())
            .collect::<Array1<F>>();

        let smoothed = feature_count.mapv(|v| v + alpha);
        let totals = smoothed.sum_axis(Axis(1));
        let mut feature_log_prob = smoothed;
        for (mut row, &total) in feature_log_prob.rows_mut().into_iter().zip(totals.iter()) {
            row.mapv_inplace(|v| (v / total).ln());
        }

        debug!(
            "fitted multinomial naive bayes: {} samples, {} classes, {} features",
            data.len(),
            classes.len(),
            n_features
        );

        Ok(Self {
            alpha,
            classes,
            class_count,
            class_log_prior,
            feature_count,
            feature_log_prob,
        })
    }

    pub fn alpha(&self) -> F {
        self.alpha
    }

    /// The distinct training labels in sorted order.
    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    /// Number of training points per class, aligned with `classes()`.
    pub fn class_counts(&self) -> &[usize] {
        &self.class_count
    }

    pub fn n_features(&self) -> usize {
        self.feature_log_prob.ncols()
    }

    pub fn class_log_prior(&self) -> ArrayView1<'_, F> {
        self.class_log_prior.view()
    }

    /// Summed feature weights per class (rows follow `classes()`).
    pub fn feature_count(&self) -> ArrayView2<'_, F> {
        self.feature_count.view()
    }

    /// Smoothed log-likelihood of each feature given each class.
    pub fn feature_log_prob(&self) -> ArrayView2<'_, F> {
        self.feature_log_prob.view()
    }

    /// Unnormalised log posterior of every class for `features`.
    pub fn joint_log_likelihood(&self, features: ArrayView1<F>) -> Result<Array1<F>, NbError> {
        if features.len() != self.n_features() {
            return Err(NbError::DimensionMismatch {
                expected: self.n_features(),
                found: features.len(),
            });
        }
        Ok(self.feature_log_prob.dot(&features) + &self.class_log_prior)
    }

    /// Normalised log posterior of every class for `features`.
    pub fn predict_log_proba(&self, features: ArrayView1<F>) -> Result<Array1<F>, NbError> {
        let jll = self.joint_log_likelihood(features)?;
        let norm = log_sum_exp(&jll.to_vec());
        Ok(jll.mapv(|v| v - norm))
    }

    /// Predicts the most probable label for `features`.
    ///
    /// A zero vector (no known terms) scores on the class priors alone.
    ///
    /// # Errors
    ///
    /// Returns `NbError::DimensionMismatch` if `features` has the wrong length.
    pub fn predict(&self, features: ArrayView1<F>) -> Result<L, NbError> {
        let jll = self.joint_log_likelihood(features)?;
        let mut best = 0;
        for (i, &score) in jll.iter().enumerate().skip(1) {
            if score > jll[best] {
                best = i;
            }
        }
        Ok(self.classes[best].clone())
    }
}
