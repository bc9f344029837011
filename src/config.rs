//! Runtime configuration for forgeflow.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (FORGEFLOW_MODEL, FORGEFLOW_BASE_URL,
//!    FORGEFLOW_RECURSION_LIMIT, GROQ_API_KEY)
//! 2. Config file (forgeflow.yaml in the current directory)
//! 3. Defaults

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::adapters::groq::DEFAULT_BASE_URL;
use crate::core::DEFAULT_RECURSION_LIMIT;

/// Default model name (the pipeline was built against Groq's instant tier)
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub recursion_limit: Option<u32>,
}

impl ConfigFile {
    /// Parse a config file from YAML content
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse forgeflow config YAML")
    }
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Model name passed to the adapter
    pub model: String,

    /// Chat-completions base URL
    pub base_url: String,

    /// API key, if present in the environment
    pub api_key: Option<String>,

    /// Stage-transition budget for a run
    pub recursion_limit: u32,
}

impl Config {
    /// Load configuration from forgeflow.yaml (if present) and the
    /// environment
    pub fn load() -> Result<Self> {
        let file = match std::fs::read_to_string(Path::new("forgeflow.yaml")) {
            Ok(content) => ConfigFile::from_yaml(&content)?,
            Err(_) => ConfigFile::default(),
        };

        Ok(Self::resolve(file, |var| std::env::var(var).ok()))
    }

    /// Resolve a config file plus an environment lookup into a final
    /// configuration
    fn resolve(file: ConfigFile, env: impl Fn(&str) -> Option<String>) -> Self {
        let model = env("FORGEFLOW_MODEL")
            .or(file.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = env("FORGEFLOW_BASE_URL")
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let recursion_limit = env("FORGEFLOW_RECURSION_LIMIT")
            .and_then(|v| v.parse().ok())
            .or(file.recursion_limit)
            .unwrap_or(DEFAULT_RECURSION_LIMIT);

        let api_key = env(API_KEY_VAR);

        Self {
            model,
            base_url,
            api_key,
            recursion_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::resolve(ConfigFile::default(), |_| None);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.recursion_limit, DEFAULT_RECURSION_LIMIT);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_env_overrides_file() {
        let file = ConfigFile {
            model: Some("file-model".to_string()),
            base_url: None,
            recursion_limit: Some(5),
        };
        let config = Config::resolve(file, |var| match var {
            "FORGEFLOW_MODEL" => Some("env-model".to_string()),
            _ => None,
        });
        assert_eq!(config.model, "env-model");
        assert_eq!(config.recursion_limit, 5);
    }

    #[test]
    fn test_config_file_parsing() {
        let yaml = "model: llama-3.3-70b-versatile\nrecursion_limit: 10\n";
        let file = ConfigFile::from_yaml(yaml).unwrap();
        assert_eq!(file.model.as_deref(), Some("llama-3.3-70b-versatile"));
        assert_eq!(file.recursion_limit, Some(10));
    }
}
