//! This file defines split rules for the random tree.
use crate::Sample;


/// The output of the function `split` of `Splitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftRight {
    /// The value is at most the threshold.
    Left,
    /// The value is greater than the threshold, or is `NaN`.
    Right,
}


/// A splitting rule of a branch node.
/// A row goes to the left child if the value at `feature`
/// is less than or equal to `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Splitter {
    pub(super) feature: usize,
    pub(super) threshold: f64,
}


impl Splitter {
    #[inline]
    pub(super) fn new(feature: usize, threshold: f64) -> Self {
        Self { feature, threshold, }
    }


    /// Returns the index of the feature this rule looks at.
    #[inline]
    pub fn feature(&self) -> usize {
        self.feature
    }


    /// Returns the threshold of this rule.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }


    /// Routes a single value.
    /// `NaN` is never `<=` a threshold, so it goes to the right.
    #[inline]
    pub fn split_value(&self, value: f64) -> LeftRight {
        if value <= self.threshold {
            LeftRight::Left
        } else {
            LeftRight::Right
        }
    }


    /// Routes the `row`'th row of `sample`.
    #[inline]
    pub fn split(&self, sample: &Sample, row: usize) -> LeftRight {
        self.split_value(sample.value(row, self.feature))
    }


    /// Routes a row given as a slice.
    /// The caller guarantees `row.len() > self.feature`.
    #[inline]
    pub fn split_row(&self, row: &[f64]) -> LeftRight {
        self.split_value(row[self.feature])
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_go_left() {
        let rule = Splitter::new(0, 2.5);
        assert_eq!(rule.split_value(2.5), LeftRight::Left);
        assert_eq!(rule.split_value(2.4), LeftRight::Left);
        assert_eq!(rule.split_value(2.6), LeftRight::Right);
    }

    #[test]
    fn nan_goes_right() {
        let rule = Splitter::new(1, 0.0);
        assert_eq!(rule.split_value(f64::NAN), LeftRight::Right);
        assert_eq!(rule.split_row(&[0.0, f64::NAN]), LeftRight::Right);
    }
}
