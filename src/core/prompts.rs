//! Prompt builders for the three stages.

use crate::domain::ImplementationStep;

/// Prompt sent to the Planner in constrained mode
pub fn planner_prompt(user_prompt: &str) -> String {
    format!("Create a detailed plan for: {user_prompt}")
}

/// Prompt sent to the Architect in constrained mode; `plan_json` is the
/// serialized Plan
pub fn architect_prompt(plan_json: &str) -> String {
    format!("Create implementation tasks for plan: {plan_json}")
}

/// Fixed system instruction for code generation
pub fn coder_system_prompt() -> &'static str {
    "You are a coding assistant. Generate complete, working code based on the task description."
}

/// Per-step generation prompt for the Coder
pub fn coder_user_prompt(step: &ImplementationStep) -> String {
    format!(
        "Task: {}\nFile: {}\nGenerate complete, working code for this task.",
        step.task_description, step.filepath
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planner_prompt_embeds_request() {
        let prompt = planner_prompt("build a calculator");
        assert!(prompt.contains("build a calculator"));
    }

    #[test]
    fn test_coder_prompt_names_file_and_task() {
        let step = ImplementationStep::new("index.html", "Create the HTML structure");
        let prompt = coder_user_prompt(&step);
        assert!(prompt.contains("File: index.html"));
        assert!(prompt.contains("Task: Create the HTML structure"));
    }
}
