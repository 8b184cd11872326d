//! Stratified k-fold cross-validation of classifiers
//!
//! [`CrossValidator`] splits the data with [`StratifiedKFold`], fits an
//! unfitted copy of the classifier prototype on every fold, and feeds the
//! train/test predictions into a [`MetricsAccumulator`]. The resulting
//! [`Summary`] renders the fixed text report through `Display`.

mod accumulator;
mod classifier;
mod config;
mod kfold;
mod result;
mod runner;

#[cfg(test)]
mod tests;

pub use accumulator::{FoldResult, MetricsAccumulator};
pub use classifier::Classifier;
pub use config::CvConfig;
pub use kfold::{Fold, StratifiedKFold};
pub use result::Summary;
pub use runner::{CrossValidator, CrossValidatorBuilder};
