//! Error types with actionable diagnostics.
//!
//! Every variant carries the structured context (field names, expected vs
//! actual counts) needed to fix the call without reading the source.

use thiserror::Error;

/// Result type alias for cvfold operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error returned by a user-supplied classifier.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Stage of a fold at which the classifier failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Fitting on the train partition
    Fit,
    /// Predicting the train partition
    PredictTrain,
    /// Predicting the test partition
    PredictTest,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Fit => f.write_str("fit"),
            Stage::PredictTrain => f.write_str("predict(train)"),
            Stage::PredictTest => f.write_str("predict(test)"),
        }
    }
}

/// Errors that can occur while configuring or running an evaluation.
#[derive(Error, Debug)]
pub enum Error {
    /// The evaluator was configured with an unusable value.
    #[error("Invalid configuration for '{field}': {message}\n  → Fix the value before calling run()")]
    InvalidConfiguration { field: &'static str, message: String },

    /// Input data is missing or malformed.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Two sequences that must be aligned have different lengths.
    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch { what: &'static str, expected: usize, actual: usize },

    /// Fewer samples than folds.
    #[error("Cannot split {samples} samples into {n_splits} folds\n  → Provide at least {n_splits} samples or lower n_splits")]
    TooFewSamples { samples: usize, n_splits: usize },

    /// A class is too small to appear in every test fold.
    #[error("Cannot stratify: class {label} has {members} members, fewer than n_splits={n_splits}\n  → Collect more samples of class {label} or lower n_splits")]
    StratificationFailure { label: usize, members: usize, n_splits: usize },

    /// Summary requested before any fold was recorded.
    #[error("No folds recorded: the mean of an empty sequence is undefined\n  → Call record() at least once before summary()")]
    EmptyAccumulator,

    /// The user-supplied classifier failed.
    #[error("Classifier failed during {stage} on fold {fold}: {source}")]
    Classifier {
        fold: usize,
        stage: Stage,
        #[source]
        source: BoxError,
    },

    /// Serialization of a summary failed.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl Error {
    /// Shorthand for [`Error::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput { message: message.into() }
    }

    /// Shorthand for [`Error::InvalidConfiguration`].
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration { field, message: message.into() }
    }

    /// Fail with [`Error::LengthMismatch`] unless `actual == expected`.
    pub fn ensure_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::LengthMismatch { what, expected, actual })
        }
    }

    /// Whether the error was caused by the caller's configuration or data
    /// rather than by the classifier.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfiguration { .. }
                | Self::InvalidInput { .. }
                | Self::LengthMismatch { .. }
                | Self::TooFewSamples { .. }
                | Self::StratificationFailure { .. }
                | Self::EmptyAccumulator
        )
    }

    /// Stable error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration { .. } => "E001",
            Self::InvalidInput { .. } => "E010",
            Self::LengthMismatch { .. } => "E011",
            Self::TooFewSamples { .. } => "E020",
            Self::StratificationFailure { .. } => "E021",
            Self::EmptyAccumulator => "E030",
            Self::Classifier { .. } => "E040",
            Self::Serialization { .. } => "E050",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { message: err.to_string() }
    }
}
