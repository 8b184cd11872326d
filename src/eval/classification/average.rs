//! Averaging strategies for multi-class metrics

use serde::{Deserialize, Serialize};

/// Averaging strategy for multi-class metrics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Average {
    /// Calculate metrics for each label, return unweighted mean
    #[default]
    Macro,
    /// Calculate metrics globally by counting total TP, FP, FN
    Micro,
    /// Weighted mean by support (number of true instances per label)
    Weighted,
}
