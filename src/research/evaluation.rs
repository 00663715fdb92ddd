use colored::Colorize;
use serde::Serialize;

use crate::{RandomTree, RandomTreeRegressor, Sample};
use crate::error::Result;
use super::loss_functions::{rmse, correlation};

use std::fmt;


const WIDTH: usize = 9;
const PREC_WIDTH: usize = 6;
const FULL_WIDTH: usize = 60;


/// RMSE and correlation of predictions against the true targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scores {
    /// Root mean squared error.
    pub rmse: f64,
    /// Pearson correlation coefficient.
    /// `NaN` if the predictions or the targets are constant.
    pub correlation: f64,
}


impl Scores {
    /// Compute the scores of `predictions` against `target`.
    pub fn compute(target: &[f64], predictions: &[f64]) -> Result<Self> {
        let rmse = rmse(target, predictions)?;
        let correlation = correlation(predictions, target)?;
        Ok(Self { rmse, correlation, })
    }


    /// Compute the scores of `f` on `sample`.
    /// Returns `Err(InvalidInput)` if `sample` does not have
    /// as many columns as the training sample.
    pub fn of(f: &RandomTreeRegressor, sample: &Sample) -> Result<Self> {
        let predictions = f.query_sample(sample)?;
        Self::compute(sample.target(), &predictions)
    }
}


/// The result of a holdout evaluation.
/// The first part of the sample trains a tree,
/// and the tree is scored on both parts.
///
/// # Example
/// ```no_run
/// use rtlearner::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("data/ripple.csv")
///     .read()
///     .unwrap();
/// let learner = RandomTreeBuilder::new()
///     .leaf_size(50)
///     .build();
/// let (evaluation, _tree) = Evaluation::holdout(&sample, &learner, 0.6)
///     .unwrap();
/// println!("{evaluation}");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Number of training rows.
    pub train_size: usize,
    /// Number of test rows.
    pub test_size: usize,
    /// Leaf size of the learner.
    pub leaf_size: usize,
    /// Seed of the learner.
    pub seed: u64,
    /// Depth of the grown tree.
    pub depth: usize,
    /// Number of leaves of the grown tree.
    pub n_leaves: usize,
    /// Scores on the training part.
    pub in_sample: Scores,
    /// Scores on the test part.
    pub out_of_sample: Scores,
}


impl Evaluation {
    /// Train `learner` on the first `floor(train_ratio * n)` rows
    /// of `sample` and score it on both parts.
    /// Returns the evaluation together with the grown tree.
    pub fn holdout(
        sample: &Sample,
        learner: &RandomTree,
        train_ratio: f64,
    ) -> Result<(Self, RandomTreeRegressor)>
    {
        let (train, test) = sample.split_at_ratio(train_ratio)?;

        let f = learner.fit(&train)?;
        let in_sample = Scores::of(&f, &train)?;
        let out_of_sample = Scores::of(&f, &test)?;

        let evaluation = Self {
            train_size: train.shape().0,
            test_size: test.shape().0,
            leaf_size: f.leaf_size(),
            seed: f.seed(),
            depth: f.depth(),
            n_leaves: f.n_leaves(),
            in_sample,
            out_of_sample,
        };
        Ok((evaluation, f))
    }


    /// Returns this evaluation as a pretty-printed JSON string.
    /// A `NaN` score is written as `null`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}


impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:=>FULL_WIDTH$}", "")?;
        writeln!(
            f,
            "{}    {}    {}",
            format!("[LEAF SIZE {:>WIDTH$}]", self.leaf_size).bold().red(),
            format!("[TRAIN {:>WIDTH$}]", self.train_size).bold().green(),
            format!("[TEST {:>WIDTH$}]", self.test_size).bold().yellow(),
        )?;
        writeln!(
            f,
            "{}    {}",
            format!("[DEPTH {:>WIDTH$}]", self.depth).bold().cyan(),
            format!("[LEAVES {:>WIDTH$}]", self.n_leaves).bold().cyan(),
        )?;

        let parts = [
            ("In sample results", &self.in_sample),
            ("Out of sample results", &self.out_of_sample),
        ];
        for (title, scores) in parts {
            writeln!(f, "{:->FULL_WIDTH$}", "")?;
            writeln!(f, "{}", title.bold())?;
            writeln!(
                f,
                "    RMSE: {}",
                format!("{:>WIDTH$.PREC_WIDTH$}", scores.rmse).bold().blue(),
            )?;
            writeln!(
                f,
                "    corr: {}",
                format!("{:>WIDTH$.PREC_WIDTH$}", scores.correlation)
                    .bold()
                    .blue(),
            )?;
        }
        write!(f, "{:=>FULL_WIDTH$}", "")
    }
}
