//! forgeflow - three-stage LLM build pipeline
//!
//! Turns one natural-language build request into generated source code:
//! - Planner: request -> structured Plan
//! - Architect: Plan -> ordered TaskPlan
//! - Coder: first task -> generated code, persisted to disk
//!
//! # Architecture
//!
//! The orchestrator is a fixed state machine (Planner -> Architect ->
//! Coder -> End) carrying a single RunState between stages. The model
//! endpoint and the filesystem tools are capabilities passed in behind
//! traits, so every stage is testable with substitutes.
//!
//! # Modules
//!
//! - `adapters`: Model invocation (Groq chat-completions)
//! - `tools`: Filesystem tool surface for the Coder
//! - `core`: Stages and the orchestrator state machine
//! - `domain`: Structured contracts (Plan, TaskPlan, RunState)
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Run the pipeline on a build request
//! forgeflow run "Create a simple calculator web app with HTML, CSS and JavaScript"
//!
//! # Or pipe the request in
//! echo "..." | forgeflow run
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod tools;

// Re-export main types at crate root for convenience
pub use adapters::{GroqAdapter, ModelAdapter, ModelError};
pub use core::{Orchestrator, StageError, DEFAULT_RECURSION_LIMIT};
pub use domain::{ImplementationStep, Plan, PlanFile, RunState, StageUpdate, Status, TaskPlan};
pub use tools::{ListFilesArgs, LocalToolSet, ReadFileArgs, ToolSet, WriteFileArgs};
