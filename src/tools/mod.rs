//! Filesystem tool surface available to the Coder stage.
//!
//! Each operation takes a single argument record, mirroring how the tools
//! are invoked by name. Only `write_file` is exercised by the current
//! single-step Coder; the rest are part of the surface offered to a coding
//! stage.

pub mod local;

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// Re-export the local filesystem implementation
pub use local::LocalToolSet;

/// Arguments for `write_file`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteFileArgs {
    pub path: String,
    pub content: String,
}

/// Arguments for `read_file`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadFileArgs {
    pub path: String,
}

/// Arguments for `list_files`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFilesArgs {
    pub directory: String,
}

/// Trait for the filesystem tool set
#[async_trait]
pub trait ToolSet: Send + Sync {
    /// Write content to a file, creating it if needed
    async fn write_file(&self, args: WriteFileArgs) -> Result<()>;

    /// Read a file's content as text
    async fn read_file(&self, args: ReadFileArgs) -> Result<String>;

    /// List files in a directory
    async fn list_files(&self, args: ListFilesArgs) -> Result<Vec<PathBuf>>;

    /// The directory generated files are resolved against
    async fn current_dir(&self) -> Result<PathBuf>;
}
