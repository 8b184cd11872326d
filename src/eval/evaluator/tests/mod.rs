//! Tests for the cross-validation runner, accumulator and report


use super::Classifier;
use ndarray::Array2;
use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0}")]
pub(super) struct StubError(pub &'static str);

/// Assigns each row to the class with the closest mean
#[derive(Clone, Debug, Default)]
pub(super) struct NearestCentroid {
    centroids: Vec<(usize, Vec<f64>)>,
}

impl Classifier for NearestCentroid {
    type Error = StubError;

    fn fresh(&self) -> Self {
        Self::default()
    }

    fn fit(&mut self, x: &Array2<f64>, y: &[usize]) -> Result<(), StubError> {
        if !self.centroids.is_empty() {
            return Err(StubError("already fitted"));
        }
        let mut sums: BTreeMap<usize, (Vec<f64>, usize)> = BTreeMap::new();
        for (row, &label) in x.rows().into_iter().zip(y) {
            let (sum, count) = sums.entry(label).or_insert_with(|| (vec![0.0; x.ncols()], 0));
            for (s, v) in sum.iter_mut().zip(row.iter()) {
                *s += v;
            }
            *count += 1;
        }
        self.centroids = sums
            .into_iter()
            .map(|(label, (sum, n))| (label, sum.into_iter().map(|s| s / n as f64).collect()))
            .collect();
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Vec<usize>, StubError> {
        if self.centroids.is_empty() {
            return Err(StubError("not fitted"));
        }
        let nearest = |row: ndarray::ArrayView1<'_, f64>| {
            self.centroids
                .iter()
                .map(|(label, c)| {
                    let d: f64 = c.iter().zip(row.iter()).map(|(a, b)| (a - b).powi(2)).sum();
                    (*label, d)
                })
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map_or(0, |(label, _)| label)
        };
        Ok(x.rows().into_iter().map(nearest).collect())
    }
}

/// Records how it is used; predicts the first training label
#[derive(Clone, Debug, Default)]
pub(super) struct Probe {
    pub fresh_calls: Rc<Cell<usize>>,
    pub fail_fit_on: Option<usize>,
    pub short_predict: bool,
    id: usize,
    fitted_label: Option<usize>,
}

impl Classifier for Probe {
    type Error = StubError;

    fn fresh(&self) -> Self {
        let id = self.fresh_calls.get();
        self.fresh_calls.set(id + 1);
        Self {
            fresh_calls: Rc::clone(&self.fresh_calls),
            fail_fit_on: self.fail_fit_on,
            short_predict: self.short_predict,
            id,
            fitted_label: None,
        }
    }

    fn fit(&mut self, _x: &Array2<f64>, y: &[usize]) -> Result<(), StubError> {
        if self.fitted_label.is_some() {
            return Err(StubError("state leaked between folds"));
        }
        if self.fail_fit_on == Some(self.id) {
            return Err(StubError("singular matrix"));
        }
        self.fitted_label = y.first().copied();
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Vec<usize>, StubError> {
        let label = self.fitted_label.ok_or(StubError("not fitted"))?;
        let n = if self.short_predict { x.nrows() - 1 } else { x.nrows() };
        Ok(vec![label; n])
    }
}

/// `per_class` points around `(10c, -10c)` for each class `c`
pub(super) fn blobs(classes: usize, per_class: usize) -> (Array2<f64>, Vec<usize>) {
    let n = classes * per_class;
    let x = Array2::from_shape_fn((n, 2), |(i, j)| {
        let c = (i / per_class) as f64;
        let jitter = (i % per_class) as f64 * 0.1;
        if j == 0 {
            10.0 * c + jitter
        } else {
            -10.0 * c - jitter
        }
    });
    let y = (0..n).map(|i| i / per_class).collect();
    (x, y)
}
