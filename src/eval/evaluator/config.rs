//! Cross-validation configuration

use super::super::classification::Average;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration for a cross-validation run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CvConfig {
    /// Number of stratified folds (k >= 2)
    pub n_splits: usize,
    /// Shuffle each class before dealing it into folds
    pub shuffle: bool,
    /// Seed for the shuffle; `None` draws from the OS and is not reproducible
    pub seed: Option<u64>,
    /// Averaging strategy for precision, recall and F1
    pub average: Average,
}

impl Default for CvConfig {
    fn default() -> Self {
        Self {
            n_splits: 5,
            shuffle: true,
            seed: None,
            average: Average::Macro,
        }
    }
}

impl CvConfig {
    /// Minimum number of folds
    pub const MIN_SPLITS: usize = 2;

    /// Reject configurations that cannot produce a train/test split
    pub fn validate(&self) -> Result<()> {
        if self.n_splits < Self::MIN_SPLITS {
            return Err(Error::invalid_config(
                "n_splits",
                format!("must be at least {}, got {}", Self::MIN_SPLITS, self.n_splits),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_five_fold_macro() {
        let config = CvConfig::default();
        assert_eq!(config.n_splits, 5);
        assert!(config.shuffle);
        assert_eq!(config.seed, None);
        assert_eq!(config.average, Average::Macro);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_single_fold() {
        let config = CvConfig { n_splits: 1, ..Default::default() };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { field: "n_splits", .. }));
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: CvConfig =
            serde_json::from_str(r#"{"n_splits": 10, "seed": 7, "average": "weighted"}"#).unwrap();
        assert_eq!(config.n_splits, 10);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.average, Average::Weighted);
        assert!(config.shuffle);
    }

    #[test]
    fn test_deserialize_rejects_unknown_field() {
        let result: std::result::Result<CvConfig, _> = serde_json::from_str(r#"{"folds": 3}"#);
        assert!(result.is_err());
    }
}
