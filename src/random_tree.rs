//! The files in `random_tree/` directory defines
//! the random regression tree learner and its output.

/// Defines the random tree learner.
pub mod rtree_algorithm;
/// Defines the regressor produced by the learner.
pub mod rtree_regressor;
/// Random tree builder.
pub mod builder;

/// Defines the tree nodes.
pub mod node;
/// Defines the splitting rule of a branch node.
pub mod split_rule;


pub use rtree_algorithm::RandomTree;
pub use rtree_regressor::RandomTreeRegressor;
pub use builder::RandomTreeBuilder;
pub use node::{Node, BranchNode, LeafNode, LeafReason};
pub use split_rule::{Splitter, LeftRight};
