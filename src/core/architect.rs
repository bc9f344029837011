//! Architect stage: Plan -> TaskPlan.

use schemars::schema_for;
use tracing::{debug, info};

use crate::adapters::ModelAdapter;
use crate::domain::{Plan, TaskPlan};

use super::error::StageError;
use super::prompts::architect_prompt;

/// Turn a [`Plan`] into an ordered [`TaskPlan`].
///
/// The Plan is serialized into the prompt and the model is invoked in
/// schema-constrained mode. Whatever `plan` the model echoes back is
/// discarded: the back-reference is always overwritten with the run's own
/// Plan. Performs no filesystem I/O.
pub async fn design(model: &dyn ModelAdapter, plan: &Plan) -> Result<TaskPlan, StageError> {
    info!(adapter = model.name(), plan = %plan.name, "Designing implementation tasks");

    let plan_json = serde_json::to_string(plan)
        .map_err(|e| StageError::Architecture(format!("failed to serialize plan: {e}")))?;

    let schema = serde_json::to_value(schema_for!(TaskPlan))
        .map_err(|e| StageError::Architecture(format!("failed to build TaskPlan schema: {e}")))?;

    let value = model
        .invoke_structured(&architect_prompt(&plan_json), &schema)
        .await?
        .ok_or_else(|| StageError::Architecture("no structured value returned".to_string()))?;

    let mut task_plan: TaskPlan = serde_json::from_value(value)
        .map_err(|e| StageError::Architecture(format!("value did not conform to TaskPlan: {e}")))?;

    // Never trust the model's copy of the plan
    task_plan.plan = plan.clone();

    match serde_json::to_string(&task_plan) {
        Ok(json) => debug!(task_plan = %json, "TaskPlan produced"),
        Err(_) => debug!(steps = task_plan.implementation_steps.len(), "TaskPlan produced"),
    }

    Ok(task_plan)
}
