//! Coder stage: TaskPlan -> generated code + persisted file.

use tracing::{info, warn};

use crate::adapters::ModelAdapter;
use crate::domain::{Status, TaskPlan};
use crate::tools::{ToolSet, WriteFileArgs};

use super::error::StageError;
use super::prompts::{coder_system_prompt, coder_user_prompt};

/// What the Coder stage contributes to the run
#[derive(Debug, Clone)]
pub struct CoderOutput {
    /// Generated code, or a diagnostic string on write failure
    pub code: String,

    /// Terminal run status
    pub status: Status,
}

/// Generate code for the first implementation step and persist it.
///
/// An empty step list short-circuits with `Status::Done` and no external
/// calls — an empty plan is not itself a failure. Only the first step is
/// processed; the remaining steps are out of scope for a single run. A
/// failed write is recovered locally into `Status::Error` so the run still
/// terminates normally.
pub async fn code(
    model: &dyn ModelAdapter,
    tools: &dyn ToolSet,
    task_plan: &TaskPlan,
) -> Result<CoderOutput, StageError> {
    let Some(step) = task_plan.implementation_steps.first() else {
        info!("No implementation steps, nothing to generate");
        return Ok(CoderOutput {
            code: "No implementation steps provided".to_string(),
            status: Status::Done,
        });
    };

    info!(adapter = model.name(), filepath = %step.filepath, "Generating code");

    let prompt = format!("{}\n{}", coder_system_prompt(), coder_user_prompt(step));
    let generated = model.invoke(&prompt).await?;

    let write = tools
        .write_file(WriteFileArgs {
            path: step.filepath.clone(),
            content: generated.clone(),
        })
        .await;

    match write {
        Ok(()) => {
            info!(filepath = %step.filepath, bytes = generated.len(), "Code persisted");
            Ok(CoderOutput {
                code: generated,
                status: Status::Done,
            })
        }
        Err(e) => {
            warn!(filepath = %step.filepath, error = %e, "Write failed");
            Ok(CoderOutput {
                code: format!("Error: {e}"),
                status: Status::Error,
            })
        }
    }
}
