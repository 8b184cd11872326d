//! Classifier evaluation
//!
//! - `classification`: confusion matrix, per-class metrics, averaging
//! - `evaluator`: stratified k-fold splitting, per-fold accumulation, summary
//!
//! ## Example
//!
//! ```ignore
//! use cvfold::eval::CrossValidator;
//!
//! let summary = CrossValidator::new(model, 5)?.run(&x, &y)?;
//! println!("{summary}");
//! ```

pub mod classification;
pub mod evaluator;

pub use classification::{Average, ConfusionMatrix, MultiClassMetrics, SplitMetrics};
pub use evaluator::{
    Classifier, CrossValidator, CrossValidatorBuilder, CvConfig, Fold, FoldResult,
    MetricsAccumulator, StratifiedKFold, Summary,
};
