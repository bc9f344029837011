//! Core orchestration logic.
//!
//! This module contains:
//! - Prompts: prompt builders for each stage
//! - Planner: user prompt -> Plan
//! - Architect: Plan -> TaskPlan
//! - Coder: TaskPlan -> generated code + persisted file
//! - Orchestrator: the fixed state machine sequencing the stages

pub mod architect;
pub mod coder;
pub mod error;
pub mod orchestrator;
pub mod planner;
pub mod prompts;

// Re-export commonly used types
pub use architect::design;
pub use coder::{code, CoderOutput};
pub use error::StageError;
pub use orchestrator::{Node, Orchestrator, DEFAULT_RECURSION_LIMIT};
pub use planner::plan;
