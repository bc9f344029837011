//! Domain types for the forgeflow pipeline.
//!
//! This module contains the structured contracts exchanged between stages:
//! - Plan: high-level decomposition of a user request
//! - TaskPlan: ordered file-level implementation steps
//! - RunState: the single record threaded through all stages

pub mod plan;
pub mod run;

// Re-export commonly used types
pub use plan::{ImplementationStep, Plan, PlanFile, TaskPlan};
pub use run::{RunState, StageUpdate, Status};
