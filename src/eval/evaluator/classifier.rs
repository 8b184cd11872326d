//! Classifier seam for cross-validation

use ndarray::Array2;

/// A trainable classifier that cross-validation can refit per fold
///
/// Implementors carry their hyperparameters on `self`. The evaluator never
/// fits the prototype it was given: every fold calls [`Classifier::fresh`]
/// and fits the returned copy, so no fitted state leaks between folds.
pub trait Classifier {
    /// Error reported by `fit` or `predict`
    type Error: std::error::Error + Send + Sync + 'static;

    /// An unfitted copy with the same hyperparameters
    fn fresh(&self) -> Self
    where
        Self: Sized;

    /// Fit on rows of `x` with labels `y`
    fn fit(&mut self, x: &Array2<f64>, y: &[usize]) -> Result<(), Self::Error>;

    /// Predict one label per row of `x`
    fn predict(&self, x: &Array2<f64>) -> Result<Vec<usize>, Self::Error>;
}
