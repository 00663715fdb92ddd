use polars::prelude::*;
use rayon::prelude::*;

use crate::checkers;
use crate::error::{Result, RTreeError};
use super::feature::*;


/// Struct `Sample` holds a batch sample in a column-major format.
/// Each feature column has the same length as the target vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<f64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct a `Sample` from feature columns and the target vector.
    /// Returns `Err(InvalidInput)` if the shape is not valid.
    pub fn from_columns(features: Vec<Feature>, target: Vec<f64>)
        -> Result<Self>
    {
        let n_sample = target.len();
        let n_feature = features.len();

        for feat in features.iter() {
            checkers::sample_shape(feat.len(), n_sample, n_feature)?;
        }
        let n_rows = features.first()
            .map(|feat| feat.len())
            .unwrap_or(n_sample);
        checkers::sample_shape(n_rows, n_sample, n_feature)?;

        Ok(Self { features, target, n_sample, n_feature, })
    }


    /// Construct a `Sample` from a row-major feature matrix
    /// and the target vector.
    /// Columns are named `Feat. [1]`, `Feat. [2]`, ..., `Feat. [n]`.
    pub fn from_rows<R>(rows: &[R], target: &[f64]) -> Result<Self>
        where R: AsRef<[f64]>
    {
        let n_feature = rows.first()
            .map(|row| row.as_ref().len())
            .unwrap_or(0);
        checkers::sample_shape(rows.len(), target.len(), n_feature)?;

        let mut features = (1..=n_feature).map(|i| {
                let name = format!("Feat. [{i}]");
                Feature::dense(name)
            })
            .collect::<Vec<_>>();

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            checkers::row_width(n_feature, row.len(), i)?;
            for (feat, &x) in features.iter_mut().zip(row) {
                feat.append(x);
            }
        }

        Self::from_columns(features, target.to_vec())
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    /// Every column is cast to `f64`.
    pub fn from_dataframe(data: DataFrame, target: Series) -> Result<Self> {
        let target = series_to_vec(&target)?;

        let features = data.get_columns()
            .into_par_iter()
            .map(|series| -> Result<Feature> {
                let vals = series_to_vec(series)?;
                Ok(Feature::new(series.name(), vals))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_columns(features, target)
    }


    /// Returns the pair of the number of rows and columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the slice of target values.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns the names of the feature columns.
    pub fn feature_names(&self) -> Vec<&str> {
        self.features.iter()
            .map(|feat| feat.name())
            .collect()
    }


    /// Returns the value at (`row`, `col`).
    #[inline]
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.features[col][row]
    }


    /// Returns the `idx`'th row as a pair of
    /// the feature vector and its target value.
    pub fn at(&self, idx: usize) -> (Vec<f64>, f64) {
        let x = self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<_>>();
        (x, self.target[idx])
    }


    /// Returns a new sample that consists of the rows in `indices`.
    pub(crate) fn subset(&self, indices: &[usize]) -> Self {
        let features = self.features.iter()
            .map(|feat| feat.subset(indices))
            .collect::<Vec<_>>();
        let target = indices.iter()
            .map(|&i| self.target[i])
            .collect::<Vec<_>>();

        Self {
            features,
            target,
            n_sample: indices.len(),
            n_feature: self.n_feature,
        }
    }


    /// Split `self` into a training part and a test part.
    /// The first `floor(ratio * n_sample)` rows become the training part
    /// and the rest become the test part.
    /// Rows are not shuffled.
    pub fn split_at_ratio(&self, ratio: f64) -> Result<(Self, Self)> {
        checkers::train_ratio(ratio)?;

        let train_size = (ratio * self.n_sample as f64).floor() as usize;
        if train_size == 0 || train_size == self.n_sample {
            return Err(RTreeError::invalid(format!(
                "ratio {ratio} leaves an empty part \
                 for a sample of {} rows",
                self.n_sample
            )));
        }

        let train_ix = (0..train_size).collect::<Vec<_>>();
        let test_ix = (train_size..self.n_sample).collect::<Vec<_>>();

        Ok((self.subset(&train_ix), self.subset(&test_ix)))
    }
}


/// Cast a `polars::Series` to `f64` and collect the values.
/// Null cells are reported as `InvalidInput`.
pub(crate) fn series_to_vec(series: &Series) -> Result<Vec<f64>> {
    let name = series.name().to_string();
    let series = series.cast(&DataType::Float64)?;
    series.f64()?
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| {
            RTreeError::invalid(format!(
                "column \"{name}\" contains a missing value"
            ))
        })
}


#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> Sample {
        let rows = vec![
            vec![1.0, 10.0],
            vec![2.0, 20.0],
            vec![3.0, 30.0],
            vec![4.0, 40.0],
            vec![5.0, 50.0],
        ];
        let target = vec![0.1, 0.2, 0.3, 0.4, 0.5];
        Sample::from_rows(&rows, &target).unwrap()
    }

    #[test]
    fn from_rows_is_column_major() {
        let sample = toy();
        assert_eq!(sample.shape(), (5, 2));
        assert_eq!(sample.features()[1].vals(), &[10.0, 20.0, 30.0, 40.0, 50.0]);
        assert_eq!(sample.value(2, 1), 30.0);
        assert_eq!(sample.at(3), (vec![4.0, 40.0], 0.4));
        assert_eq!(sample.feature_names(), vec!["Feat. [1]", "Feat. [2]"]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        let err = Sample::from_rows(&rows, &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, RTreeError::InvalidInput(_)));
    }

    #[test]
    fn row_count_mismatch_is_rejected() {
        let rows = vec![vec![1.0]; 5];
        let err = Sample::from_rows(&rows, &[1.0; 4]).unwrap_err();
        assert!(matches!(err, RTreeError::InvalidInput(_)));
    }

    #[test]
    fn zero_columns_are_rejected() {
        let rows: Vec<Vec<f64>> = vec![vec![], vec![]];
        assert!(Sample::from_rows(&rows, &[1.0, 2.0]).is_err());
    }

    #[test]
    fn split_is_sequential() {
        let sample = toy();
        let (train, test) = sample.split_at_ratio(0.6).unwrap();
        assert_eq!(train.shape(), (3, 2));
        assert_eq!(test.shape(), (2, 2));
        assert_eq!(train.target(), &[0.1, 0.2, 0.3]);
        assert_eq!(test.target(), &[0.4, 0.5]);
        assert_eq!(test.features()[0].vals(), &[4.0, 5.0]);
    }

    #[test]
    fn split_rejects_empty_parts() {
        let sample = toy();
        assert!(sample.split_at_ratio(0.1).is_err());
        assert!(sample.split_at_ratio(1.5).is_err());
    }

    #[test]
    fn from_dataframe_casts_to_f64() {
        let s1 = Series::new("x", &[1i64, 2, 3]);
        let s2 = Series::new("y", &[0.5, 1.5, 2.5]);
        let df = DataFrame::new(vec![s1, s2]).unwrap();
        let target = Series::new("t", &[1.0, 2.0, 3.0]);

        let sample = Sample::from_dataframe(df, target).unwrap();
        assert_eq!(sample.shape(), (3, 2));
        assert_eq!(sample.feature_names(), vec!["x", "y"]);
        assert_eq!(sample.features()[0].vals(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn from_dataframe_rejects_nulls() {
        let s1 = Series::new("x", &[Some(1.0), None, Some(3.0)]);
        let df = DataFrame::new(vec![s1]).unwrap();
        let target = Series::new("t", &[1.0, 2.0, 3.0]);

        let err = Sample::from_dataframe(df, target).unwrap_err();
        assert!(matches!(err, RTreeError::InvalidInput(_)));
    }
}
