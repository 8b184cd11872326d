//! Confusion matrix for multi-class classification

use crate::error::{Error, Result};
use std::fmt;

/// Confusion matrix for multi-class classification
///
/// Rows and columns follow `labels()`, the sorted union of every label seen
/// in either the ground truth or the predictions. Element `[i][j]` counts
/// samples whose true label is `labels()[i]` and predicted label is
/// `labels()[j]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfusionMatrix {
    /// matrix[true_index][predicted_index] = count
    matrix: Vec<Vec<usize>>,
    /// Sorted, deduplicated class labels
    labels: Vec<usize>,
}

impl ConfusionMatrix {
    /// Create from ground truth and predictions
    pub fn from_predictions(y_true: &[usize], y_pred: &[usize]) -> Result<Self> {
        Error::ensure_len("predictions", y_true.len(), y_pred.len())?;

        let mut labels: Vec<usize> = y_true.iter().chain(y_pred).copied().collect();
        labels.sort_unstable();
        labels.dedup();

        let n = labels.len();
        let mut matrix = vec![vec![0; n]; n];
        for (t, p) in y_true.iter().zip(y_pred) {
            // Both lookups hit: `labels` was built from these slices.
            if let (Ok(i), Ok(j)) = (labels.binary_search(t), labels.binary_search(p)) {
                matrix[i][j] += 1;
            }
        }

        Ok(Self { matrix, labels })
    }

    /// Get the raw matrix
    pub fn matrix(&self) -> &[Vec<usize>] {
        &self.matrix
    }

    /// Get the class labels in row order
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Get number of classes
    pub fn n_classes(&self) -> usize {
        self.labels.len()
    }

    /// Row/column index of a label
    pub fn index_of(&self, label: usize) -> Option<usize> {
        self.labels.binary_search(&label).ok()
    }

    /// Count of samples with the given true and predicted labels
    pub fn get(&self, true_label: usize, predicted_label: usize) -> usize {
        match (self.index_of(true_label), self.index_of(predicted_label)) {
            (Some(i), Some(j)) => self.matrix[i][j],
            _ => 0,
        }
    }

    /// True positives for a class
    pub fn true_positives(&self, label: usize) -> usize {
        self.get(label, label)
    }

    /// False positives for a class (predicted as class but wasn't)
    pub fn false_positives(&self, label: usize) -> usize {
        self.index_of(label).map_or(0, |j| {
            (0..self.n_classes()).filter(|&i| i != j).map(|i| self.matrix[i][j]).sum()
        })
    }

    /// False negatives for a class (was class but predicted differently)
    pub fn false_negatives(&self, label: usize) -> usize {
        self.index_of(label).map_or(0, |i| {
            (0..self.n_classes()).filter(|&j| j != i).map(|j| self.matrix[i][j]).sum()
        })
    }

    /// Support (total true instances) for a class
    pub fn support(&self, label: usize) -> usize {
        self.index_of(label).map_or(0, |i| self.matrix[i].iter().sum())
    }

    /// Total number of samples
    pub fn total(&self) -> usize {
        self.matrix.iter().flatten().sum()
    }

    /// Fraction of samples on the diagonal; 0 for an empty matrix
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let correct: usize = (0..self.n_classes()).map(|i| self.matrix[i][i]).sum();
        correct as f64 / total as f64
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;

        write!(f, "{:>8}", "")?;
        for label in &self.labels {
            write!(f, " {:>8}", format!("Pred {label}"))?;
        }
        writeln!(f)?;

        for (label, row) in self.labels.iter().zip(&self.matrix) {
            write!(f, "{:>8}", format!("True {label}"))?;
            for count in row {
                write!(f, " {count:>8}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
