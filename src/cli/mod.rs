//! Command-line interface for forgeflow.
//!
//! A single synchronous invocation: take a build request, run it through
//! the pipeline, report the terminal status.

use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::adapters::GroqAdapter;
use crate::config::{Config, API_KEY_VAR};
use crate::core::Orchestrator;
use crate::domain::{RunState, Status};
use crate::tools::LocalToolSet;

/// forgeflow - three-stage LLM build pipeline
#[derive(Parser, Debug)]
#[command(name = "forgeflow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the pipeline on a build request
    Run {
        /// The build request (reads from stdin if not provided)
        prompt: Option<String>,

        /// Read the request from a file instead
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory to write generated files into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Override the stage-transition budget
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the parsed command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Run {
                prompt,
                input,
                out_dir,
                limit,
            } => run(prompt, input, out_dir, limit).await,
            Commands::Config => show_config(),
        }
    }
}

async fn run(
    prompt: Option<String>,
    input: Option<PathBuf>,
    out_dir: PathBuf,
    limit: Option<u32>,
) -> Result<()> {
    let user_prompt = read_prompt(prompt, input)?;
    if user_prompt.trim().is_empty() {
        anyhow::bail!("Build request is empty");
    }

    let config = Config::load()?;
    let api_key = config
        .api_key
        .clone()
        .with_context(|| format!("{API_KEY_VAR} is not set"))?;

    let model = Arc::new(GroqAdapter::with_base_url(
        api_key,
        config.model.clone(),
        config.base_url.clone(),
    ));
    let tools = Arc::new(LocalToolSet::new(out_dir));

    let orchestrator = Orchestrator::new(model, tools);
    let recursion_limit = limit.unwrap_or(config.recursion_limit);

    let state = orchestrator
        .invoke(RunState::new(user_prompt), recursion_limit)
        .await?;

    match state.status {
        Some(Status::Done) => {
            println!("DONE");
            if let Some(task_plan) = &state.task_plan {
                if let Some(step) = task_plan.implementation_steps.first() {
                    println!("Wrote {}", step.filepath);
                }
            }
        }
        Some(Status::Error) => {
            println!("ERROR");
            if let Some(code) = &state.code {
                println!("{code}");
            }
        }
        None => anyhow::bail!("Run ended without a status"),
    }

    Ok(())
}

fn read_prompt(prompt: Option<String>, input: Option<PathBuf>) -> Result<String> {
    if let Some(prompt) = prompt {
        return Ok(prompt);
    }

    if let Some(path) = input {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read build request from stdin")?;
    Ok(buffer)
}

fn show_config() -> Result<()> {
    let config = Config::load()?;
    println!("model:           {}", config.model);
    println!("base_url:        {}", config.base_url);
    println!("recursion_limit: {}", config.recursion_limit);
    println!(
        "api_key:         {}",
        if config.api_key.is_some() {
            "(set)"
        } else {
            "(not set)"
        }
    );
    Ok(())
}
