//! Per-fold metric accumulation

use super::super::classification::{Average, SplitMetrics};
use super::result::Summary;
use crate::error::{Error, Result};
use serde::Serialize;
use std::time::Duration;

/// Metrics recorded for a single fold
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FoldResult {
    /// Zero-based position in recording order
    pub fold: usize,
    /// Wall-clock duration of the fit call
    pub fit_time: Duration,
    /// Scores on the training partition
    pub train: SplitMetrics,
    /// Scores on the held-out partition
    pub test: SplitMetrics,
}

/// Collects one [`FoldResult`] per completed fold
#[derive(Clone, Debug, Default)]
pub struct MetricsAccumulator {
    average: Average,
    results: Vec<FoldResult>,
}

impl MetricsAccumulator {
    /// Create an empty accumulator using macro averaging
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty accumulator with the given averaging strategy
    pub fn with_average(average: Average) -> Self {
        Self { average, results: Vec::new() }
    }

    /// Averaging strategy applied by `record`
    pub fn average(&self) -> Average {
        self.average
    }

    /// Score both partitions of a fold and append the result
    ///
    /// Fails without recording anything if a label/prediction pair differs
    /// in length or a ground-truth slice is empty.
    pub fn record(
        &mut self,
        elapsed: Duration,
        train_true: &[usize],
        train_pred: &[usize],
        test_true: &[usize],
        test_pred: &[usize],
    ) -> Result<()> {
        Error::ensure_len("train predictions", train_true.len(), train_pred.len())?;
        Error::ensure_len("test predictions", test_true.len(), test_pred.len())?;

        let train = SplitMetrics::compute(train_true, train_pred, self.average)?;
        let test = SplitMetrics::compute(test_true, test_pred, self.average)?;

        self.results.push(FoldResult { fold: self.results.len(), fit_time: elapsed, train, test });
        Ok(())
    }

    /// Recorded folds in recording order
    pub fn results(&self) -> &[FoldResult] {
        &self.results
    }

    /// Number of recorded folds
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no fold has been recorded
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Mean of every recorded field
    ///
    /// Fails with [`Error::EmptyAccumulator`] before the first `record`.
    pub fn summary(&self) -> Result<Summary> {
        Summary::from_results(&self.results).ok_or(Error::EmptyAccumulator)
    }
}
