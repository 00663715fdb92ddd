//! This directory provides some features for evaluating a learner.
//! - Loss functions and scores (RMSE, correlation)
//! - A holdout evaluation that reports in-sample and
//!   out-of-sample scores

/// Defines loss functions (e.g., squared loss, RMSE).
pub mod loss_functions;

/// Defines the holdout evaluation.
pub mod evaluation;


pub use loss_functions::{
    squared_loss,
    absolute_loss,
    rmse,
    correlation,
};


pub use evaluation::{
    Evaluation,
    Scores,
};
