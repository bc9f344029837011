//! Main orchestrator for pipeline execution.
//!
//! A fixed three-node flow: Planner -> Architect -> Coder -> End. Each node
//! returns a partial update that is merged into the run state before the
//! next transition. A step budget bounds total transitions as a guard
//! against any future cyclic extension; the current topology never
//! exhausts it.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::adapters::ModelAdapter;
use crate::domain::{RunState, StageUpdate};
use crate::tools::ToolSet;

use super::error::StageError;
use super::{architect, coder, planner};

/// Default stage-transition budget
pub const DEFAULT_RECURSION_LIMIT: u32 = 100;

/// Nodes of the pipeline state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Planner,
    Architect,
    Coder,
    End,
}

impl Node {
    /// The statically fixed successor of this node
    pub fn next(self) -> Node {
        match self {
            Node::Planner => Node::Architect,
            Node::Architect => Node::Coder,
            Node::Coder => Node::End,
            Node::End => Node::End,
        }
    }
}

/// Sequences the three stages over a single run state
pub struct Orchestrator {
    model: Arc<dyn ModelAdapter>,
    tools: Arc<dyn ToolSet>,
}

impl Orchestrator {
    /// Create an orchestrator with the given capabilities
    pub fn new(model: Arc<dyn ModelAdapter>, tools: Arc<dyn ToolSet>) -> Self {
        Self { model, tools }
    }

    /// Execute one run to completion.
    ///
    /// `state` must carry the user prompt; `recursion_limit` bounds the
    /// number of stage transitions. Planning and architecture failures
    /// propagate out of this call; a write failure in the Coder surfaces
    /// only as `Status::Error` in the returned state.
    #[instrument(skip(self, state))]
    pub async fn invoke(&self, mut state: RunState, recursion_limit: u32) -> Result<RunState> {
        let run_id = Uuid::new_v4();
        info!(%run_id, "Starting run");

        let mut transitions = 0u32;
        let mut node = Node::Planner;

        while node != Node::End {
            if transitions >= recursion_limit {
                return Err(StageError::StepBudgetExceeded {
                    limit: recursion_limit,
                }
                .into());
            }
            transitions += 1;

            debug!(%run_id, ?node, transitions, "Entering stage");

            let update = match node {
                Node::Planner => {
                    let plan = planner::plan(self.model.as_ref(), &state.user_prompt).await?;
                    StageUpdate::with_plan(plan)
                }
                Node::Architect => {
                    let plan = state
                        .plan
                        .as_ref()
                        .context("architect reached with no plan set")?;
                    let task_plan = architect::design(self.model.as_ref(), plan).await?;
                    StageUpdate::with_task_plan(task_plan)
                }
                Node::Coder => {
                    let task_plan = state
                        .task_plan
                        .as_ref()
                        .context("coder reached with no task plan set")?;
                    let output =
                        coder::code(self.model.as_ref(), self.tools.as_ref(), task_plan).await?;
                    StageUpdate::with_code(output.code, output.status)
                }
                Node::End => unreachable!("loop exits before entering End"),
            };

            state.merge(update);
            node = node.next();
        }

        info!(%run_id, status = ?state.status, "Run finished");
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_transitions_are_fixed() {
        assert_eq!(Node::Planner.next(), Node::Architect);
        assert_eq!(Node::Architect.next(), Node::Coder);
        assert_eq!(Node::Coder.next(), Node::End);
        assert_eq!(Node::End.next(), Node::End);
    }
}
