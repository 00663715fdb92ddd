#![warn(missing_docs)]

//!
//! A crate that provides a random regression tree learner.
//!
//! The learner grows a binary tree by random partitioning:
//! each branch node splits on a randomly chosen feature
//! at the mean of that feature over two random rows,
//! and each leaf predicts the mean target of the rows routed to it.
//!
//! - Growing a tree is deterministic for a fixed seed.
//!     Two calls of `RandomTree::fit` with the same seed and
//!     the same sample return identical trees.
//!
//! - A grown tree is immutable.
//!     `RandomTreeRegressor` can be queried from many threads at once.
//!
//! The `research` module provides the evaluation harness:
//! RMSE, correlation, and a holdout evaluation.
//!
//! # Example
//! ```no_run
//! use rtlearner::prelude::*;
//!
//! let features = vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]];
//! let target = vec![1.0, 1.0, 5.0, 5.0];
//!
//! let learner = RandomTreeBuilder::new()
//!     .leaf_size(1)
//!     .seed(42)
//!     .build();
//! let f = learner.fit_rows(&features, &target).unwrap();
//!
//! let predictions = f.query(&[vec![1.0], vec![4.0]]).unwrap();
//! assert_eq!(predictions, vec![1.0, 5.0]);
//! ```

pub mod error;
pub mod sample;
pub mod regressor;
pub mod random_tree;
pub mod research;
pub mod prelude;

pub(crate) mod checkers;


pub use error::{RTreeError, Result};

pub use sample::{
    Sample,
    SampleReader,
    Feature,
};

pub use regressor::Regressor;

pub use random_tree::{
    RandomTree,
    RandomTreeBuilder,
    RandomTreeRegressor,
    Node,
    BranchNode,
    LeafNode,
    LeafReason,
    Splitter,
    LeftRight,
};

pub use research::{
    Evaluation,
    Scores,
};
