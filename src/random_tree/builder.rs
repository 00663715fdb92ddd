use super::rtree_algorithm::RandomTree;


/// The leaf size set as default.
pub const DEFAULT_LEAF_SIZE: usize = 1;
/// The number of split value draws per node set as default.
pub const DEFAULT_MAX_SPLIT_TRIALS: usize = 10;
/// The seed set as default.
pub const DEFAULT_SEED: u64 = 1234;


/// A struct that builds `RandomTree`.
/// `RandomTreeBuilder` keeps parameters for constructing `RandomTree`.
///
/// # Example
///
/// ```no_run
/// use rtlearner::prelude::*;
///
/// let learner = RandomTreeBuilder::new()
///     .leaf_size(50)
///     .seed(42)
///     .verbose(true)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct RandomTreeBuilder {
    leaf_size: usize,

    // `None` means "the number of feature columns".
    max_feature_trials: Option<usize>,

    max_split_trials: usize,

    seed: u64,

    verbose: bool,
}


impl Default for RandomTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}


impl RandomTreeBuilder {
    /// Construct a new instance of `RandomTreeBuilder`.
    /// By default,
    /// `RandomTreeBuilder` sets the parameters as follows;
    /// ```text
    /// leaf_size: DEFAULT_LEAF_SIZE == 1,
    /// max_feature_trials: the number of feature columns,
    /// max_split_trials: DEFAULT_MAX_SPLIT_TRIALS == 10,
    /// seed: DEFAULT_SEED == 1234,
    /// verbose: false,
    /// ```
    pub fn new() -> Self {
        Self {
            leaf_size: DEFAULT_LEAF_SIZE,
            max_feature_trials: None,
            max_split_trials: DEFAULT_MAX_SPLIT_TRIALS,
            seed: DEFAULT_SEED,
            verbose: false,
        }
    }


    /// Set the leaf size.
    /// A node with at most `leaf_size` rows becomes a leaf.
    /// `fit` rejects `0`.
    pub fn leaf_size(mut self, leaf_size: usize) -> Self {
        self.leaf_size = leaf_size;
        self
    }


    /// Set the number of uniform feature picks per node
    /// before falling back to a pick among the non-constant features.
    /// `fit` rejects `0`.
    pub fn max_feature_trials(mut self, trials: usize) -> Self {
        self.max_feature_trials = Some(trials);
        self
    }


    /// Set the number of split value draws per node.
    /// If every draw sends all rows to one side,
    /// the node becomes a leaf.
    pub fn max_split_trials(mut self, trials: usize) -> Self {
        self.max_split_trials = trials;
        self
    }


    /// Set the seed of the randomness.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `RandomTree::fit` prints a summary of the grown tree.
    /// Default vaule is `false.`
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Build a `RandomTree`.
    /// This method consumes `self`.
    pub fn build(self) -> RandomTree {
        RandomTree::from_components(
            self.leaf_size,
            self.max_feature_trials,
            self.max_split_trials,
            self.seed,
            self.verbose,
        )
    }
}
