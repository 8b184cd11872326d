//! Cross-validation runner

use super::super::classification::Average;
use super::accumulator::MetricsAccumulator;
use super::classifier::Classifier;
use super::config::CvConfig;
use super::kfold::{Fold, StratifiedKFold};
use super::result::Summary;
use crate::error::{BoxError, Error, Result, Stage};
use ndarray::{Array2, Axis};
use std::time::Instant;

/// Stratified k-fold evaluation of a classifier prototype
///
/// ```ignore
/// use cvfold::eval::CrossValidator;
///
/// let summary = CrossValidator::builder()
///     .classifier(model)
///     .n_splits(5)
///     .seed(42)
///     .build()?
///     .run(&x, &y)?;
/// summary.print();
/// ```
#[derive(Clone, Debug)]
pub struct CrossValidator<C> {
    prototype: C,
    config: CvConfig,
}

/// Builder for [`CrossValidator`]
#[derive(Clone, Debug)]
pub struct CrossValidatorBuilder<C> {
    classifier: Option<C>,
    config: CvConfig,
}

impl<C> Default for CrossValidatorBuilder<C> {
    fn default() -> Self {
        Self { classifier: None, config: CvConfig::default() }
    }
}

impl<C: Classifier> CrossValidatorBuilder<C> {
    /// Classifier prototype; required
    pub fn classifier(mut self, classifier: C) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Replace every setting with `config`
    pub fn config(mut self, config: CvConfig) -> Self {
        self.config = config;
        self
    }

    /// Number of folds
    pub fn n_splits(mut self, n_splits: usize) -> Self {
        self.config.n_splits = n_splits;
        self
    }

    /// Enable or disable per-class shuffling
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.config.shuffle = shuffle;
        self
    }

    /// Fix the shuffle seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Averaging strategy for precision, recall and F1
    pub fn average(mut self, average: Average) -> Self {
        self.config.average = average;
        self
    }

    /// Validate and build; touches no data
    pub fn build(self) -> Result<CrossValidator<C>> {
        let prototype = self
            .classifier
            .ok_or_else(|| Error::invalid_config("classifier", "no classifier prototype was provided"))?;
        self.config.validate()?;
        Ok(CrossValidator { prototype, config: self.config })
    }
}

fn classifier_error<E>(fold: usize, stage: Stage) -> impl FnOnce(E) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    move |err| Error::Classifier { fold, stage, source: BoxError::from(err) }
}

fn take_labels(y: &[usize], indices: &[usize]) -> Vec<usize> {
    indices.iter().map(|&i| y[i]).collect()
}

impl<C: Classifier> CrossValidator<C> {
    /// Start a builder
    pub fn builder() -> CrossValidatorBuilder<C> {
        CrossValidatorBuilder::default()
    }

    /// Evaluator with `n_splits` folds and default settings otherwise
    pub fn new(classifier: C, n_splits: usize) -> Result<Self> {
        Self::builder().classifier(classifier).n_splits(n_splits).build()
    }

    /// Active configuration
    pub fn config(&self) -> &CvConfig {
        &self.config
    }

    /// The unfitted prototype
    pub fn prototype(&self) -> &C {
        &self.prototype
    }

    /// Run every fold and return the fold-averaged summary
    pub fn run(&self, x: &Array2<f64>, y: &[usize]) -> Result<Summary> {
        let summary = self.run_folds(x, y)?.summary()?;
        tracing::info!(
            n_folds = summary.n_folds,
            fit_time_secs = summary.fit_time_secs,
            test_accuracy = summary.test.accuracy,
            test_f1 = summary.test.f1,
            "cross-validation complete"
        );
        Ok(summary)
    }

    /// Run every fold and return the per-fold results
    pub fn run_folds(&self, x: &Array2<f64>, y: &[usize]) -> Result<MetricsAccumulator> {
        Self::validate_input(x, y)?;

        let splitter = StratifiedKFold::new(self.config.n_splits).with_optional_seed(self.config.seed);
        let splitter = if self.config.shuffle { splitter } else { splitter.without_shuffle() };
        let folds = splitter.split(y)?;

        let mut accumulator = MetricsAccumulator::with_average(self.config.average);
        for (index, fold) in folds.iter().enumerate() {
            self.run_fold(index, fold, x, y, &mut accumulator)?;
        }

        Ok(accumulator)
    }

    fn run_fold(
        &self,
        index: usize,
        fold: &Fold,
        x: &Array2<f64>,
        y: &[usize],
        accumulator: &mut MetricsAccumulator,
    ) -> Result<()> {
        let x_train = x.select(Axis(0), &fold.train);
        let x_test = x.select(Axis(0), &fold.test);
        let y_train = take_labels(y, &fold.train);
        let y_test = take_labels(y, &fold.test);

        let mut model = self.prototype.fresh();

        let start = Instant::now();
        model.fit(&x_train, &y_train).map_err(classifier_error(index, Stage::Fit))?;
        let elapsed = start.elapsed();

        let train_pred = model.predict(&x_train).map_err(classifier_error(index, Stage::PredictTrain))?;
        let test_pred = model.predict(&x_test).map_err(classifier_error(index, Stage::PredictTest))?;

        tracing::debug!(
            fold = index,
            train_size = fold.train.len(),
            test_size = fold.test.len(),
            fit_secs = elapsed.as_secs_f64(),
            "fold evaluated"
        );

        accumulator.record(elapsed, &y_train, &train_pred, &y_test, &test_pred)
    }

    fn validate_input(x: &Array2<f64>, y: &[usize]) -> Result<()> {
        if y.is_empty() || x.nrows() == 0 {
            return Err(Error::invalid_input("feature matrix and label vector must be non-empty"));
        }
        if x.ncols() == 0 {
            return Err(Error::invalid_input("feature matrix has no columns"));
        }
        Error::ensure_len("feature rows", y.len(), x.nrows())
    }
}
