//! Cross-validation summary and its text report

use super::super::classification::SplitMetrics;
use super::accumulator::FoldResult;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fold-averaged evaluation result
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of folds evaluated
    pub n_folds: usize,
    /// Mean fit time in seconds
    pub fit_time_secs: f64,
    /// Mean scores on the training partitions
    pub train: SplitMetrics,
    /// Mean scores on the held-out partitions
    pub test: SplitMetrics,
    /// Sample standard deviation of test accuracy (0 for one fold)
    pub test_accuracy_std: f64,
    /// Sample standard deviation of test F1 (0 for one fold)
    pub test_f1_std: f64,
}

fn sample_std(values: impl Iterator<Item = f64> + Clone, mean: f64) -> f64 {
    let n = values.clone().count();
    if n < 2 {
        return 0.0;
    }
    let variance = values.map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    variance.sqrt()
}

impl Summary {
    /// Average a sequence of fold results; `None` when it is empty
    pub fn from_results(results: &[FoldResult]) -> Option<Self> {
        let train = SplitMetrics::mean(results.iter().map(|r| &r.train))?;
        let test = SplitMetrics::mean(results.iter().map(|r| &r.test))?;
        let n = results.len();
        let fit_time_secs = results.iter().map(|r| r.fit_time.as_secs_f64()).sum::<f64>() / n as f64;

        Some(Self {
            n_folds: n,
            fit_time_secs,
            train,
            test,
            test_accuracy_std: sample_std(results.iter().map(|r| r.test.accuracy), test.accuracy),
            test_f1_std: sample_std(results.iter().map(|r| r.test.f1), test.f1),
        })
    }

    /// Print the report to stdout
    pub fn print(&self) {
        print!("{self}");
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Width of the label column in the text report
const LABEL_WIDTH: usize = 28;

fn row(f: &mut fmt::Formatter<'_>, label: &str, value: f64) -> fmt::Result {
    writeln!(f, " {label:<width$}{value:.3}", width = LABEL_WIDTH)
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-------------- Evaluation Result --------------")?;
        writeln!(f, " {:<width$}{}", "Number of evaluation:", self.n_folds, width = LABEL_WIDTH)?;
        row(f, "Learning time:", self.fit_time_secs)?;
        writeln!(f, " --")?;
        row(f, "Train accuracy:", self.train.accuracy)?;
        row(f, "Train precision:", self.train.precision)?;
        row(f, "Train recall:", self.train.recall)?;
        row(f, "Train f1-score:", self.train.f1)?;
        writeln!(f, " --")?;
        row(f, "Test accuracy:", self.test.accuracy)?;
        row(f, "Test precision:", self.test.precision)?;
        row(f, "Test recall:", self.test.recall)?;
        row(f, "Test f1-score:", self.test.f1)
    }
}
