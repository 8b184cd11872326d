//! sklearn parity tests for classification metrics
//!
//! Reference values computed with sklearn 1.4.0:
//! ```python
//! from sklearn.metrics import (accuracy_score, precision_score,
//!                              recall_score, f1_score)
//! ```
//! Every case below has the same label set in `y_true` and `y_pred`, where
//! restricting the average to ground-truth labels agrees with sklearn.

use super::*;

const Y_TRUE: [usize; 9] = [0, 0, 1, 1, 2, 2, 0, 1, 2];
const Y_PRED: [usize; 9] = [0, 1, 1, 2, 2, 0, 0, 1, 2];
const TWO_THIRDS: f64 = 0.6666666666666666;

#[test]
fn test_sklearn_parity_accuracy() {
    // sklearn: accuracy_score(Y_TRUE, Y_PRED) = 0.6666666666666666
    let cm = ConfusionMatrix::from_predictions(&Y_TRUE, &Y_PRED).unwrap();
    let acc = cm.accuracy();

    assert!(
        (acc - TWO_THIRDS).abs() < 1e-6,
        "Accuracy {acc} does not match sklearn reference {TWO_THIRDS}"
    );
}

#[test]
fn test_sklearn_parity_macro() {
    // sklearn: precision/recall/f1_score(..., average='macro') = 0.6666666666666666
    let m = SplitMetrics::compute(&Y_TRUE, &Y_PRED, Average::Macro).unwrap();

    assert!((m.precision - TWO_THIRDS).abs() < 1e-6, "Macro precision {}", m.precision);
    assert!((m.recall - TWO_THIRDS).abs() < 1e-6, "Macro recall {}", m.recall);
    assert!((m.f1 - TWO_THIRDS).abs() < 1e-6, "Macro F1 {}", m.f1);
}

#[test]
fn test_sklearn_parity_micro_and_weighted() {
    // sklearn: micro = weighted = macro for this balanced dataset
    for average in [Average::Micro, Average::Weighted] {
        let m = SplitMetrics::compute(&Y_TRUE, &Y_PRED, average).unwrap();
        assert!((m.precision - TWO_THIRDS).abs() < 1e-6, "{average:?} precision {}", m.precision);
        assert!((m.recall - TWO_THIRDS).abs() < 1e-6, "{average:?} recall {}", m.recall);
        assert!((m.f1 - TWO_THIRDS).abs() < 1e-6, "{average:?} F1 {}", m.f1);
    }
}

#[test]
fn test_sklearn_parity_imbalanced() {
    // Class 0: TP=3, FP=1, FN=2 -> P=0.75, R=0.6, F1=0.6667
    // Class 1: TP=1, FP=2, FN=1 -> P=0.333, R=0.5, F1=0.4
    // Class 2: TP=1, FP=0, FN=0 -> P=1, R=1, F1=1
    let y_true = vec![0, 0, 0, 0, 0, 1, 1, 2];
    let y_pred = vec![0, 0, 0, 1, 1, 1, 0, 2];

    let m = SplitMetrics::compute(&y_true, &y_pred, Average::Macro).unwrap();

    assert!((m.accuracy - 0.625).abs() < 1e-6, "Accuracy {}", m.accuracy);
    assert!(
        (m.f1 - 0.6888888888888888).abs() < 1e-6,
        "Macro F1 {} does not match reference 0.6889",
        m.f1
    );
}

#[test]
fn test_sklearn_parity_binary() {
    // Class 0: TP=2, FP=1, FN=2 -> P=0.6667, R=0.5, F1=0.5714
    // Class 1: TP=3, FP=2, FN=1 -> P=0.6, R=0.75, F1=0.6667
    let y_true = vec![0, 0, 1, 1, 0, 1, 0, 1];
    let y_pred = vec![0, 1, 1, 0, 0, 1, 1, 1];

    let m = SplitMetrics::compute(&y_true, &y_pred, Average::Macro).unwrap();

    assert!((m.accuracy - 0.625).abs() < 1e-6, "Accuracy {}", m.accuracy);
    assert!(
        (m.f1 - 0.6190476190476191).abs() < 1e-6,
        "Macro F1 {} does not match reference 0.6190",
        m.f1
    );
}
