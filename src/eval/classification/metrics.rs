//! Multi-class classification metrics

use super::average::Average;
use super::confusion::ConfusionMatrix;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// `num / den`, or 0 when the denominator is zero.
///
/// Undefined precision (class never predicted) and undefined recall (class
/// never observed) both count as 0 towards the average.
fn ratio(num: f64, den: f64) -> f64 {
    if den > 0.0 {
        num / den
    } else {
        0.0
    }
}

fn harmonic(p: f64, r: f64) -> f64 {
    ratio(2.0 * p * r, p + r)
}

fn true_classes(y_true: &[usize]) -> Vec<usize> {
    let mut classes = y_true.to_vec();
    classes.sort_unstable();
    classes.dedup();
    classes
}

/// Per-class classification metrics
#[derive(Clone, Debug)]
pub struct MultiClassMetrics {
    /// Labels the per-class vectors refer to, ascending
    pub labels: Vec<usize>,
    /// Per-class precision
    pub precision: Vec<f64>,
    /// Per-class recall
    pub recall: Vec<f64>,
    /// Per-class F1 score
    pub f1: Vec<f64>,
    /// Per-class support (count)
    pub support: Vec<usize>,
    tp_total: usize,
    fp_total: usize,
    fn_total: usize,
}

impl MultiClassMetrics {
    /// Compute metrics for `classes` from a confusion matrix
    ///
    /// Labels in `classes` that the matrix has never seen get all-zero rows.
    pub fn from_confusion_matrix(cm: &ConfusionMatrix, classes: &[usize]) -> Self {
        let n = classes.len();
        let mut precision = Vec::with_capacity(n);
        let mut recall = Vec::with_capacity(n);
        let mut f1 = Vec::with_capacity(n);
        let mut support = Vec::with_capacity(n);
        let (mut tp_total, mut fp_total, mut fn_total) = (0, 0, 0);

        for &class in classes {
            let tp = cm.true_positives(class);
            let fp = cm.false_positives(class);
            let fn_ = cm.false_negatives(class);

            let p = ratio(tp as f64, (tp + fp) as f64);
            let r = ratio(tp as f64, (tp + fn_) as f64);

            precision.push(p);
            recall.push(r);
            f1.push(harmonic(p, r));
            support.push(cm.support(class));

            tp_total += tp;
            fp_total += fp;
            fn_total += fn_;
        }

        Self {
            labels: classes.to_vec(),
            precision,
            recall,
            f1,
            support,
            tp_total,
            fp_total,
            fn_total,
        }
    }

    /// Compute from ground truth and predictions
    ///
    /// The averaged classes are the labels present in `y_true`.
    pub fn from_predictions(y_true: &[usize], y_pred: &[usize]) -> Result<Self> {
        let cm = ConfusionMatrix::from_predictions(y_true, y_pred)?;
        Ok(Self::from_confusion_matrix(&cm, &true_classes(y_true)))
    }

    /// Number of classes averaged over
    pub fn n_classes(&self) -> usize {
        self.labels.len()
    }

    /// Get averaged precision
    pub fn precision_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => self.micro_precision(),
            _ => self.average_metric(&self.precision, average),
        }
    }

    /// Get averaged recall
    pub fn recall_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => self.micro_recall(),
            _ => self.average_metric(&self.recall, average),
        }
    }

    /// Get averaged F1
    pub fn f1_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => harmonic(self.micro_precision(), self.micro_recall()),
            _ => self.average_metric(&self.f1, average),
        }
    }

    fn micro_precision(&self) -> f64 {
        ratio(self.tp_total as f64, (self.tp_total + self.fp_total) as f64)
    }

    fn micro_recall(&self) -> f64 {
        ratio(self.tp_total as f64, (self.tp_total + self.fn_total) as f64)
    }

    fn average_metric(&self, values: &[f64], average: Average) -> f64 {
        match average {
            Average::Macro | Average::Micro => {
                ratio(values.iter().sum::<f64>(), values.len() as f64)
            }
            Average::Weighted => {
                let total_support: usize = self.support.iter().sum();
                let weighted: f64 =
                    values.iter().zip(&self.support).map(|(&v, &s)| v * s as f64).sum();
                ratio(weighted, total_support as f64)
            }
        }
    }
}

/// Accuracy and averaged precision/recall/F1 for one label/prediction pair
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl SplitMetrics {
    /// Score `y_pred` against `y_true`
    ///
    /// Fails on a length mismatch or an empty ground truth.
    pub fn compute(y_true: &[usize], y_pred: &[usize], average: Average) -> Result<Self> {
        if y_true.is_empty() {
            return Err(Error::invalid_input("cannot score an empty label set"));
        }

        let cm = ConfusionMatrix::from_predictions(y_true, y_pred)?;
        let metrics = MultiClassMetrics::from_confusion_matrix(&cm, &true_classes(y_true));

        Ok(Self {
            accuracy: cm.accuracy(),
            precision: metrics.precision_avg(average),
            recall: metrics.recall_avg(average),
            f1: metrics.f1_avg(average),
        })
    }

    /// Field-wise arithmetic mean; `None` for an empty iterator
    pub fn mean<'a>(items: impl IntoIterator<Item = &'a SplitMetrics>) -> Option<Self> {
        let mut n = 0usize;
        let mut sum = Self::default();
        for m in items {
            n += 1;
            sum.accuracy += m.accuracy;
            sum.precision += m.precision;
            sum.recall += m.recall;
            sum.f1 += m.f1;
        }
        if n == 0 {
            return None;
        }
        let n = n as f64;
        Some(Self {
            accuracy: sum.accuracy / n,
            precision: sum.precision / n,
            recall: sum.recall / n,
            f1: sum.f1 / n,
        })
    }
}
