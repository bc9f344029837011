//! Local filesystem implementation of the tool set.
//!
//! All relative paths resolve against a configured project root, so a run
//! writes generated files into one directory regardless of where the
//! process was started.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::{ListFilesArgs, ReadFileArgs, ToolSet, WriteFileArgs};

/// Tool set operating on the local filesystem under a project root
pub struct LocalToolSet {
    root: PathBuf,
}

impl LocalToolSet {
    /// Create a tool set rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a (possibly relative) path against the project root
    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

#[async_trait]
impl ToolSet for LocalToolSet {
    async fn write_file(&self, args: WriteFileArgs) -> Result<()> {
        let target = self.resolve(&args.path);

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        tokio::fs::write(&target, &args.content)
            .await
            .with_context(|| format!("Failed to write file {}", target.display()))?;

        debug!(path = %target.display(), bytes = args.content.len(), "Wrote file");
        Ok(())
    }

    async fn read_file(&self, args: ReadFileArgs) -> Result<String> {
        let target = self.resolve(&args.path);
        tokio::fs::read_to_string(&target)
            .await
            .with_context(|| format!("Failed to read file {}", target.display()))
    }

    async fn list_files(&self, args: ListFilesArgs) -> Result<Vec<PathBuf>> {
        let target = self.resolve(&args.directory);
        let mut entries = tokio::fs::read_dir(&target)
            .await
            .with_context(|| format!("Failed to list directory {}", target.display()))?;

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            paths.push(entry.path());
        }
        paths.sort();

        Ok(paths)
    }

    async fn current_dir(&self) -> Result<PathBuf> {
        Ok(self.root.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_relative_paths_resolve_against_root() {
        let tools = LocalToolSet::new("/tmp/project");
        assert_eq!(
            tools.resolve("index.html"),
            PathBuf::from("/tmp/project/index.html")
        );
        assert_eq!(tools.resolve("/etc/hosts"), PathBuf::from("/etc/hosts"));
    }

    #[tokio::test]
    async fn test_current_dir_is_root() {
        let tools = LocalToolSet::new("/tmp/project");
        assert_eq!(
            tools.current_dir().await.unwrap(),
            PathBuf::from("/tmp/project")
        );
    }
}
