use crate::checkers;
use crate::error::Result;


/// Squared loss
pub fn squared_loss(true_label: f64, prediction: f64) -> f64 {
    (true_label - prediction).powi(2)
}


/// Absolute loss
pub fn absolute_loss(true_label: f64, prediction: f64) -> f64 {
    (true_label - prediction).abs()
}


/// Root mean squared error between `target` and `prediction`.
/// Returns `Err(InvalidInput)` if the slices are empty
/// or have different lengths.
pub fn rmse(target: &[f64], prediction: &[f64]) -> Result<f64> {
    checkers::paired_slices(target, prediction)?;

    let n_sample = target.len() as f64;
    let mse = target.iter()
        .zip(prediction)
        .map(|(&y, &p)| squared_loss(y, p))
        .sum::<f64>()
        / n_sample;
    Ok(mse.sqrt())
}


/// Pearson correlation coefficient between `lhs` and `rhs`.
/// The result is `NaN` if either side has zero variance.
/// Returns `Err(InvalidInput)` if the slices are empty
/// or have different lengths.
pub fn correlation(lhs: &[f64], rhs: &[f64]) -> Result<f64> {
    checkers::paired_slices(lhs, rhs)?;

    let n_sample = lhs.len() as f64;
    let lmean = lhs.iter().sum::<f64>() / n_sample;
    let rmean = rhs.iter().sum::<f64>() / n_sample;

    let (cov, lvar, rvar) = lhs.iter()
        .zip(rhs)
        .fold((0f64, 0f64, 0f64), |(cov, lvar, rvar), (&l, &r)| {
            let (dl, dr) = (l - lmean, r - rmean);
            (cov + dl * dr, lvar + dl * dl, rvar + dr * dr)
        });

    Ok(cov / (lvar * rvar).sqrt())
}
