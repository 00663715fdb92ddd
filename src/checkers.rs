//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data
use crate::error::{Result, RTreeError};


/// Check whether the training sample has a valid shape or not.
#[inline(always)]
pub(crate) fn sample_shape(
    n_sample: usize,
    n_target: usize,
    n_feature: usize,
) -> Result<()>
{
    if n_sample != n_target {
        return Err(RTreeError::invalid(format!(
            "the sample has {n_sample} rows but {n_target} labels"
        )));
    }

    // Since the previous check guarantees `n_sample == n_target`,
    // we only need to check `n_sample`.
    if n_sample == 0 {
        return Err(RTreeError::invalid("the sample has no rows"));
    }

    if n_feature == 0 {
        return Err(RTreeError::invalid("the sample has no feature columns"));
    }
    Ok(())
}


/// Check the width of the `row`'th row.
#[inline(always)]
pub(crate) fn row_width(expected: usize, got: usize, row: usize)
    -> Result<()>
{
    if expected != got {
        return Err(RTreeError::invalid(format!(
            "row {row} has {got} columns, expected {expected}"
        )));
    }
    Ok(())
}


/// Check the number of columns of a single query row or sample.
#[inline(always)]
pub(crate) fn n_columns(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(RTreeError::invalid(format!(
            "got {got} columns, expected {expected}"
        )));
    }
    Ok(())
}


/// Check the leaf size.
#[inline(always)]
pub(crate) fn leaf_size(size: usize) -> Result<()> {
    if size < 1 {
        return Err(RTreeError::invalid(
            "`leaf_size` must be at least 1. got 0."
        ));
    }
    Ok(())
}


/// Check the number of random feature picks per node.
#[inline(always)]
pub(crate) fn max_feature_trials(trials: usize) -> Result<()> {
    if trials < 1 {
        return Err(RTreeError::invalid(
            "`max_feature_trials` must be at least 1. got 0."
        ));
    }
    Ok(())
}


/// Check the number of split value draws per node.
#[inline(always)]
pub(crate) fn max_split_trials(trials: usize) -> Result<()> {
    if trials < 1 {
        return Err(RTreeError::invalid(
            "`max_split_trials` must be at least 1. got 0."
        ));
    }
    Ok(())
}


/// Check the ratio of the training part of a holdout split.
#[inline(always)]
pub(crate) fn train_ratio(ratio: f64) -> Result<()> {
    if !(0f64 < ratio && ratio < 1f64) {
        return Err(RTreeError::invalid(format!(
            "training ratio must be in (0, 1). got {ratio}."
        )));
    }
    Ok(())
}


/// Check that two slices are non-empty and of the same length.
#[inline(always)]
pub(crate) fn paired_slices(lhs: &[f64], rhs: &[f64]) -> Result<()> {
    if lhs.len() != rhs.len() {
        return Err(RTreeError::invalid(format!(
            "length mismatch: {} vs {}", lhs.len(), rhs.len()
        )));
    }
    if lhs.is_empty() {
        return Err(RTreeError::invalid("empty input"));
    }
    Ok(())
}
