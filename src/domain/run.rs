//! Run state threaded through the pipeline.
//!
//! A RunState is created with only the user prompt set; each stage returns a
//! [`StageUpdate`] with the fields it produced, and the orchestrator merges
//! the update before advancing. Fields accumulate monotonically: merging
//! never clears a field that was already set.

use serde::{Deserialize, Serialize};

use super::plan::{Plan, TaskPlan};

/// The single mutable record carried through one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    /// The original build request (set once, at entry)
    pub user_prompt: String,

    /// Set by the Planner stage
    pub plan: Option<Plan>,

    /// Set by the Architect stage
    pub task_plan: Option<TaskPlan>,

    /// Generated code (or a diagnostic string), set by the Coder stage
    pub code: Option<String>,

    /// Terminal status, set by the Coder stage
    pub status: Option<Status>,
}

impl RunState {
    /// Create the initial state for a run
    pub fn new(user_prompt: impl Into<String>) -> Self {
        Self {
            user_prompt: user_prompt.into(),
            plan: None,
            task_plan: None,
            code: None,
            status: None,
        }
    }

    /// Merge a stage's partial output into this state.
    ///
    /// Only fields the stage actually set are applied; a `None` in the
    /// update leaves the existing value untouched.
    pub fn merge(&mut self, update: StageUpdate) {
        if let Some(plan) = update.plan {
            self.plan = Some(plan);
        }
        if let Some(task_plan) = update.task_plan {
            self.task_plan = Some(task_plan);
        }
        if let Some(code) = update.code {
            self.code = Some(code);
        }
        if let Some(status) = update.status {
            self.status = Some(status);
        }
    }
}

/// Partial record of newly-set fields returned by one stage node.
#[derive(Debug, Clone, Default)]
pub struct StageUpdate {
    pub plan: Option<Plan>,
    pub task_plan: Option<TaskPlan>,
    pub code: Option<String>,
    pub status: Option<Status>,
}

impl StageUpdate {
    pub fn with_plan(plan: Plan) -> Self {
        Self {
            plan: Some(plan),
            ..Default::default()
        }
    }

    pub fn with_task_plan(task_plan: TaskPlan) -> Self {
        Self {
            task_plan: Some(task_plan),
            ..Default::default()
        }
    }

    pub fn with_code(code: String, status: Status) -> Self {
        Self {
            code: Some(code),
            status: Some(status),
            ..Default::default()
        }
    }
}

/// Terminal status of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Code was generated and persisted (or there was nothing to do)
    Done,

    /// Code was generated but could not be persisted
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::{Plan, TaskPlan};

    fn tiny_plan() -> Plan {
        Plan {
            name: "p".to_string(),
            description: "d".to_string(),
            techstack: vec![],
            files: vec![],
        }
    }

    #[test]
    fn test_new_state_has_only_prompt() {
        let state = RunState::new("build me a thing");
        assert_eq!(state.user_prompt, "build me a thing");
        assert!(state.plan.is_none());
        assert!(state.task_plan.is_none());
        assert!(state.code.is_none());
        assert!(state.status.is_none());
    }

    #[test]
    fn test_merge_is_monotonic() {
        let mut state = RunState::new("prompt");

        state.merge(StageUpdate::with_plan(tiny_plan()));
        assert!(state.plan.is_some());

        // An empty update must not clear anything already set
        state.merge(StageUpdate::default());
        assert!(state.plan.is_some());

        state.merge(StageUpdate::with_task_plan(TaskPlan {
            implementation_steps: vec![],
            plan: tiny_plan(),
        }));
        assert!(state.plan.is_some());
        assert!(state.task_plan.is_some());

        state.merge(StageUpdate::with_code("code".to_string(), Status::Done));
        assert_eq!(state.status, Some(Status::Done));
        assert_eq!(state.code.as_deref(), Some("code"));
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&Status::Done).unwrap(), "\"DONE\"");
        assert_eq!(serde_json::to_string(&Status::Error).unwrap(), "\"ERROR\"");
    }
}
