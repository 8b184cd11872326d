//! cvfold: stratified k-fold cross-validation for classifiers
//!
//! Fits a user-supplied [`eval::Classifier`] on each of `k` stratified folds,
//! scores train and test predictions (accuracy, precision, recall, F1), and
//! averages the per-fold scores and fit times into an [`eval::Summary`].
//!
//! Computation and presentation are separate: [`eval::CrossValidator::run`]
//! returns the summary value, which renders the text report via `Display`
//! or serializes with [`eval::Summary::to_json`].
//!
//! Diagnostics go through `tracing`; the crate never installs a subscriber.

pub mod error;
pub mod eval;

pub use error::{Error, Result};
pub use eval::{Classifier, CrossValidator, CvConfig, MetricsAccumulator, Summary};
