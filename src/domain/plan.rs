//! Structured contracts produced by the Planner and Architect stages.
//!
//! All three shapes derive `JsonSchema` so the schema handed to the model
//! in constrained mode is generated from the same types that decode the
//! model's output.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// High-level decomposition of a user request.
///
/// Produced once by the Planner, consumed read-only by the Architect, and
/// embedded inside the resulting [`TaskPlan`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Plan {
    /// Short project name
    pub name: String,

    /// What the project does, in a sentence or two
    pub description: String,

    /// Languages, frameworks, and libraries to use
    pub techstack: Vec<String>,

    /// Files the project is expected to consist of
    pub files: Vec<PlanFile>,
}

/// One intended file in a [`Plan`] (abstract, not yet an implementation task).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlanFile {
    /// Relative path of the file
    pub path: String,

    /// What the file is for
    pub purpose: String,
}

/// One concrete unit of work: a target file and what to build in it.
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ImplementationStep {
    /// Relative path of the file to generate
    pub filepath: String,

    /// Natural-language description of the work
    pub task_description: String,
}

impl ImplementationStep {
    pub fn new(filepath: impl Into<String>, task_description: impl Into<String>) -> Self {
        Self {
            filepath: filepath.into(),
            task_description: task_description.into(),
        }
    }
}

/// Ordered implementation steps plus the [`Plan`] they came from.
///
/// Ordering is significant: the Coder stage acts on the first step. The
/// `plan` back-reference is always overwritten by the Architect with the
/// run's own Plan; the model's echoed copy is never trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TaskPlan {
    /// Steps in execution order
    pub implementation_steps: Vec<ImplementationStep>,

    /// The Plan this TaskPlan was derived from
    pub plan: Plan,
}
