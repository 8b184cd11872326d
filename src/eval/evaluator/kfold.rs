//! Stratified K-Fold cross-validation splitter

use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeMap;

/// One train/test partition of the sample indices
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fold {
    /// Training indices, ascending
    pub train: Vec<usize>,
    /// Test indices, ascending
    pub test: Vec<usize>,
}

/// Stratified K-Fold splitter
///
/// Every class is dealt round-robin across the folds, so each test set holds
/// `floor(n_c / k)` or `ceil(n_c / k)` members of a class with `n_c`
/// samples, and fold sizes differ by at most one.
#[derive(Clone, Debug)]
pub struct StratifiedKFold {
    n_splits: usize,
    shuffle: bool,
    seed: Option<u64>,
}

impl StratifiedKFold {
    /// Create a shuffling splitter seeded from the OS
    pub fn new(n_splits: usize) -> Self {
        Self {
            n_splits,
            shuffle: true,
            seed: None,
        }
    }

    /// Fix the shuffle seed so fold membership is reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set an optional seed
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Disable shuffling
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle = false;
        self
    }

    /// Number of folds
    pub fn n_splits(&self) -> usize {
        self.n_splits
    }

    /// Generate `n_splits` stratified folds for the label vector `y`
    pub fn split(&self, y: &[usize]) -> Result<Vec<Fold>> {
        let k = self.n_splits;
        if k < 2 {
            return Err(Error::invalid_config(
                "n_splits",
                format!("must be at least 2, got {k}"),
            ));
        }
        if y.is_empty() {
            return Err(Error::invalid_input("cannot split an empty label vector"));
        }
        if y.len() < k {
            return Err(Error::TooFewSamples { samples: y.len(), n_splits: k });
        }

        let mut by_class: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (i, &label) in y.iter().enumerate() {
            by_class.entry(label).or_default().push(i);
        }

        if let Some((&label, members)) = by_class.iter().find(|(_, m)| m.len() < k) {
            return Err(Error::StratificationFailure { label, members: members.len(), n_splits: k });
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut fold_of = vec![0usize; y.len()];
        let mut next = 0;
        for members in by_class.values_mut() {
            if self.shuffle {
                members.shuffle(&mut rng);
            }
            for &i in members.iter() {
                fold_of[i] = next;
                next = (next + 1) % k;
            }
        }

        let folds = (0..k)
            .map(|f| {
                let (test, train): (Vec<usize>, Vec<usize>) =
                    (0..y.len()).partition(|&i| fold_of[i] == f);
                Fold { train, test }
            })
            .collect();

        Ok(folds)
    }
}
