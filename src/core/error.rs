//! Error taxonomy for pipeline stages.
//!
//! Planning and architecture failures are fatal and propagate out of the
//! orchestrator; file-write failures never appear here because the Coder
//! recovers them into a terminal `Status::Error`.

use thiserror::Error;

use crate::adapters::ModelError;

/// Errors that terminate a run
#[derive(Debug, Error)]
pub enum StageError {
    /// The Planner's constrained decode produced no usable value
    #[error("planner did not return a valid response: {0}")]
    Planning(String),

    /// The Architect's constrained decode produced no usable value
    #[error("architect did not return a valid response: {0}")]
    Architecture(String),

    /// The stage-transition budget was exhausted
    #[error("recursion limit of {limit} stage transitions exceeded")]
    StepBudgetExceeded { limit: u32 },

    /// Transport-level model failure
    #[error(transparent)]
    Model(#[from] ModelError),
}
