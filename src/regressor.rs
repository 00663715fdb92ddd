//! Defines the behavior of a trained regressor.
use rayon::prelude::*;

use crate::Sample;


/// A trait that defines the behavor of regressor.
/// You only need to implement `predict` method.
///
/// # Panics
/// The methods of this trait do not check the shape of `sample`.
/// They may panic if `sample` has fewer columns
/// than the sample the regressor was trained on.
/// `RandomTreeRegressor::query_sample` checks the width
/// and returns an error instead.
pub trait Regressor: Sync {
    /// Predicts the target value of the `row`'th row of the `sample`.
    fn predict(&self, sample: &Sample, row: usize) -> f64;


    /// Predicts the target values of all rows of the `sample`.
    /// The rows are evaluated in parallel.
    fn predict_all(&self, sample: &Sample) -> Vec<f64> {
        let n_sample = sample.shape().0;
        (0..n_sample).into_par_iter()
            .map(|row| self.predict(sample, row))
            .collect::<Vec<_>>()
    }
}
