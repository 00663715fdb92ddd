//! Exports the standard structs and traits.
//!
pub use crate::error::{
    RTreeError,
    Result,
};


pub use crate::sample::{
    Sample,
    SampleReader,
    Feature,
};


pub use crate::random_tree::{
    // Learner
    RandomTree,
    RandomTreeBuilder,


    // Output hypothesis -------------------------
    RandomTreeRegressor,
    Node,
    LeafNode,
    LeafReason,
};


pub use crate::regressor::Regressor;


pub use crate::research::{
    Evaluation,
    Scores,
    rmse,
    correlation,
};
