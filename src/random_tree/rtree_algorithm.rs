use colored::Colorize;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand::seq::index;

use crate::{checkers, Sample};
use crate::error::Result;

use super::{
    node::*,
    split_rule::*,
    rtree_regressor::RandomTreeRegressor,
};

use std::fmt;
use std::time::Instant;
use std::collections::HashMap;


const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


/// Every split value draw on a node sent all rows to one side.
/// The node becomes a leaf.
#[derive(Debug)]
struct DegenerateSplit;


type SplitOutcome = std::result::Result<
    (Splitter, Vec<usize>, Vec<usize>),
    DegenerateSplit,
>;


/// `RandomTree` grows a regression tree by random partitioning.
/// Each branch node splits on a feature chosen uniformly at random
/// at the mean of the feature values of two random rows.
/// Each leaf predicts the mean target of the rows routed to it.
///
/// The same seed and the same sample always produce the same tree.
///
/// # Example
/// ```no_run
/// use rtlearner::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("data/ripple.csv")
///     .read()
///     .unwrap();
///
/// let learner = RandomTreeBuilder::new()
///     .leaf_size(50)
///     .seed(777)
///     .build();
///
/// let f = learner.fit(&sample).unwrap();
/// let predictions = f.predict_all(&sample);
///
/// let n_sample = sample.shape().0 as f64;
/// let loss = sample.target()
///     .iter()
///     .zip(predictions)
///     .map(|(y, p)| (y - p).powi(2))
///     .sum::<f64>()
///     / n_sample;
/// println!("loss (train) is: {loss}");
/// ```
#[derive(Debug, Clone)]
pub struct RandomTree {
    leaf_size: usize,

    // `None` means "the number of feature columns".
    max_feature_trials: Option<usize>,

    max_split_trials: usize,

    seed: u64,

    verbose: bool,
}


impl RandomTree {
    #[inline]
    pub(super) fn from_components(
        leaf_size: usize,
        max_feature_trials: Option<usize>,
        max_split_trials: usize,
        seed: u64,
        verbose: bool,
    ) -> Self
    {
        Self { leaf_size, max_feature_trials, max_split_trials, seed, verbose, }
    }


    /// Returns the leaf size.
    pub fn leaf_size(&self) -> usize {
        self.leaf_size
    }


    /// Returns the seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }


    /// Grow a tree on `sample`.
    ///
    /// Returns `Err(InvalidInput)` if `leaf_size` or one of the trial counts
    /// is zero. Nothing is grown in that case.
    pub fn fit(&self, sample: &Sample) -> Result<RandomTreeRegressor> {
        let (n_sample, n_feature) = sample.shape();
        checkers::sample_shape(n_sample, sample.target().len(), n_feature)?;
        checkers::leaf_size(self.leaf_size)?;
        let n_trials = self.max_feature_trials.unwrap_or(n_feature);
        checkers::max_feature_trials(n_trials)?;
        checkers::max_split_trials(self.max_split_trials)?;

        let now = Instant::now();

        let mut rng = StdRng::seed_from_u64(self.seed);
        let indices = (0..n_sample).collect::<Vec<_>>();
        let root = self.grow(sample, indices, n_trials, &mut rng);

        let f = RandomTreeRegressor::from_components(
            *root, n_feature, self.leaf_size, self.seed,
        );

        if self.verbose {
            self.print_stats(sample, &f, now.elapsed().as_millis());
        }

        Ok(f)
    }


    /// Grow a tree on a row-major feature matrix and its targets.
    ///
    /// Returns `Err(InvalidInput)` if the number of rows and targets differ,
    /// if there is no row or no column,
    /// or if the rows have different lengths.
    pub fn fit_rows<R>(&self, features: &[R], target: &[f64])
        -> Result<RandomTreeRegressor>
        where R: AsRef<[f64]>
    {
        let sample = Sample::from_rows(features, target)?;
        self.fit(&sample)
    }


    fn grow(
        &self,
        sample: &Sample,
        indices: Vec<usize>,
        n_trials: usize,
        rng: &mut StdRng,
    ) -> Box<Node>
    {
        let target = sample.target();
        let n_sample = indices.len();
        let prediction = indices.iter()
            .map(|&i| target[i])
            .sum::<f64>()
            / n_sample as f64;

        // The stopping conditions consume no randomness.
        if n_sample <= self.leaf_size {
            let leaf = Node::leaf(prediction, n_sample, LeafReason::LeafSize);
            return Box::new(leaf);
        }

        let y = target[indices[0]];
        if indices.iter().all(|&i| target[i] == y) {
            let leaf = Node::leaf(prediction, n_sample, LeafReason::PureTarget);
            return Box::new(leaf);
        }

        let candidates = sample.features()
            .iter()
            .enumerate()
            .filter_map(|(j, feat)| {
                (!feat.is_constant_on(&indices)).then_some(j)
            })
            .collect::<Vec<_>>();
        if candidates.is_empty() {
            let reason = LeafReason::ConstantFeatures;
            return Box::new(Node::leaf(prediction, n_sample, reason));
        }

        let feature = pick_feature(sample, &candidates, n_trials, rng);
        let split = self.split_at(sample, &indices, feature, rng);
        let (rule, lindices, rindices) = match split {
            Ok(split) => split,
            Err(DegenerateSplit) => {
                let reason = LeafReason::DegenerateSplit;
                return Box::new(Node::leaf(prediction, n_sample, reason));
            },
        };

        // Each child grows with its own generator
        // so that the draws on a node do not depend on its siblings.
        let mut lrng = StdRng::seed_from_u64(rng.gen());
        let mut rrng = StdRng::seed_from_u64(rng.gen());

        let ltree = self.grow(sample, lindices, n_trials, &mut lrng);
        let rtree = self.grow(sample, rindices, n_trials, &mut rrng);

        Box::new(Node::branch(rule, ltree, rtree))
    }


    /// Draws a threshold for `feature` as the mean of the values
    /// at two distinct rows, and splits `indices` by it.
    /// Retries at most `max_split_trials` times
    /// while one side is empty.
    fn split_at(
        &self,
        sample: &Sample,
        indices: &[usize],
        feature: usize,
        rng: &mut StdRng,
    ) -> SplitOutcome
    {
        let feat = &sample.features()[feature];
        for _ in 0..self.max_split_trials {
            let pair = index::sample(rng, indices.len(), 2);
            let a = feat[indices[pair.index(0)]];
            let b = feat[indices[pair.index(1)]];
            let rule = Splitter::new(feature, midpoint(a, b));

            let (lindices, rindices) = indices.iter()
                .partition::<Vec<usize>, _>(|&&i| {
                    rule.split(sample, i) == LeftRight::Left
                });

            if !lindices.is_empty() && !rindices.is_empty() {
                return Ok((rule, lindices, rindices));
            }
        }
        Err(DegenerateSplit)
    }


    /// print the summary of the grown tree.
    fn print_stats(
        &self,
        sample: &Sample,
        f: &RandomTreeRegressor,
        millis: u128,
    )
    {
        let (n_sample, n_feature) = sample.shape();
        let mut counts = HashMap::new();
        for leaf in f.root().leaves() {
            *counts.entry(leaf.reason()).or_insert(0_usize) += 1;
        }

        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "RANDOM TREE".bold(), "",
        );
        println!("\n{header}");

        let stats = [
            ("Rows", n_sample.to_string()),
            ("Columns", n_feature.to_string()),
            ("Leaf size", self.leaf_size.to_string()),
            ("Seed", self.seed.to_string()),
            ("Nodes", f.n_nodes().to_string()),
            ("Leaves", f.n_leaves().to_string()),
            ("Depth", f.depth().to_string()),
            ("Time (ms)", millis.to_string()),
        ];
        for (key, val) in stats {
            println!(
                "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
                key.bold(),
                val.bold().green(),
            );
        }

        let reasons = [
            LeafReason::LeafSize,
            LeafReason::PureTarget,
            LeafReason::ConstantFeatures,
            LeafReason::DegenerateSplit,
        ];
        println!("+ {}", "Leaves by reason".bold());
        for reason in reasons {
            let count = counts.get(&reason).copied().unwrap_or(0);
            println!(
                "    + {:<width$}\t{:>width$}",
                reason.to_string(),
                count.to_string().bold().yellow(),
                width = STAT_WIDTH - 4,
            );
        }
        println!("{:=^FULL_WIDTH$}\n", "");
    }
}


/// Picks a feature uniformly at random.
/// Retries at most `n_trials` times while the picked feature
/// is constant on the node.
/// After that, picks uniformly among `candidates`,
/// the non-constant features of the node.
fn pick_feature(
    sample: &Sample,
    candidates: &[usize],
    n_trials: usize,
    rng: &mut StdRng,
) -> usize
{
    let n_feature = sample.shape().1;
    for _ in 0..n_trials {
        let j = rng.gen_range(0..n_feature);
        if candidates.binary_search(&j).is_ok() {
            return j;
        }
    }
    candidates[rng.gen_range(0..candidates.len())]
}


/// Mean of `a` and `b`.
/// Halves first when the sum overflows, e.g., near `f64::MAX`.
#[inline]
fn midpoint(a: f64, b: f64) -> f64 {
    let sum = a + b;
    if sum.is_finite() {
        sum / 2f64
    } else {
        a / 2f64 + b / 2f64
    }
}


impl fmt::Display for RandomTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trials = self.max_feature_trials
            .map(|t| t.to_string())
            .unwrap_or_else(|| "# of features".to_string());
        write!(
            f,
            "\
            ----------\n\
            # Random Tree Learner\n\n\
            - Leaf size: {}\n\
            - Max feature trials: {}\n\
            - Max split trials: {}\n\
            - Seed: {}\n\
            ----------\
            ",
            self.leaf_size,
            trials,
            self.max_split_trials,
            self.seed,
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_of_ordinary_values() {
        assert_eq!(midpoint(1.0, 4.0), 2.5);
        assert_eq!(midpoint(-3.0, 3.0), 0.0);
    }

    #[test]
    fn midpoint_near_the_largest_float() {
        let (a, b) = (0.9 * f64::MAX, f64::MAX);
        let m = midpoint(a, b);
        assert!(m.is_finite());
        assert!(a <= m && m <= b);
    }

    #[test]
    fn midpoint_keeps_nan() {
        assert!(midpoint(f64::NAN, 1.0).is_nan());
    }
}
