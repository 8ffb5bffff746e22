use ndarray::Array1;
use crate::Float;
use std::fmt::Debug;

/// A single training example: a feature vector and its label.
///
/// L: The type of the label (e.g., String, an enum of categories).
/// F: The float type for the features (e.g., f32, f64).
#[derive(Debug, Clone)]
pub struct DataPoint<L, F>
where
    L: Clone + Eq + std::hash::Hash + Debug,
    F: Float,
{
    pub features: Array1<F>,
    pub label: L,
}

impl<L, F> DataPoint<L, F>
where
    L: Clone + Eq + std::hash::Hash + Debug,
    F: Float,
{
    pub fn new(features: Array1<F>, label: L) -> Self {
        DataPoint { features, label }
    }

    /// Number of features in this point.
    pub fn dim(&self) -> usize {
        self.features.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_data_point_dim() {
        let point = DataPoint::new(array![0.0, 0.5, 0.5], "snack");
        assert_eq!(point.dim(), 3);
        assert_eq!(point.label, "snack");
    }
}
