//! Classification metrics for model evaluation
//!
//! Provides multi-class classification metrics including:
//! - Confusion matrix computation over arbitrary `usize` labels
//! - Per-class precision, recall, F1
//! - Macro, micro, and weighted averaging
//!
//! Averages run over the labels present in the ground truth. A class that is
//! never predicted scores precision 0 rather than raising, which matches the
//! `zero_division=0` convention of common ML libraries.

mod average;
mod confusion;
mod metrics;

#[cfg(test)]
mod sklearn_parity_tests;

pub use average::Average;
pub use confusion::ConfusionMatrix;
pub use metrics::{MultiClassMetrics, SplitMetrics};
