//! Planner stage: user prompt -> Plan.

use schemars::schema_for;
use tracing::{debug, info};

use crate::adapters::ModelAdapter;
use crate::domain::Plan;

use super::error::StageError;
use super::prompts::planner_prompt;

/// Turn the user's build request into a structured [`Plan`].
///
/// Invokes the model in schema-constrained mode. An absent or
/// non-conforming result is fatal to the run; there are no retries.
pub async fn plan(model: &dyn ModelAdapter, user_prompt: &str) -> Result<Plan, StageError> {
    info!(adapter = model.name(), "Planning");

    let schema = serde_json::to_value(schema_for!(Plan))
        .map_err(|e| StageError::Planning(format!("failed to build Plan schema: {e}")))?;

    let value = model
        .invoke_structured(&planner_prompt(user_prompt), &schema)
        .await?
        .ok_or_else(|| StageError::Planning("no structured value returned".to_string()))?;

    let plan: Plan = serde_json::from_value(value)
        .map_err(|e| StageError::Planning(format!("value did not conform to Plan: {e}")))?;

    debug!(name = %plan.name, files = plan.files.len(), "Plan produced");
    Ok(plan)
}
