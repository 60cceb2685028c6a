//! Self-modify tool — patch the assistant's own source files.
//!
//! Two operations:
//! - `backup`: copy a file to `<path>.bak`
//! - `apply`: back up the current content (if any), then overwrite the file
//!
//! The backup-first discipline means an `apply` can always be reverted by
//! restoring the `.bak` file.

use async_trait::async_trait;
use autocli_core::error::ToolError;
use autocli_core::tool::Tool;
use std::path::Path;
use tracing::{debug, info};

/// Tool for backing up and rewriting source files.
pub struct SelfModifyTool;

impl SelfModifyTool {
    pub fn new() -> Self {
        Self
    }

    fn execution_failed(reason: impl Into<String>) -> ToolError {
        ToolError::ExecutionFailed {
            tool_name: "self_modify".into(),
            reason: reason.into(),
        }
    }

    async fn backup(path: &str) -> Result<String, ToolError> {
        if !Path::new(path).exists() {
            return Err(Self::execution_failed(format!(
                "File does not exist: {path}"
            )));
        }

        let backup_path = format!("{path}.bak");
        tokio::fs::copy(path, &backup_path)
            .await
            .map_err(|e| Self::execution_failed(format!("Failed to back up '{path}': {e}")))?;

        Ok(format!("Backed up '{path}' to '{backup_path}'"))
    }

    async fn apply(path: &str, content: &str) -> Result<String, ToolError> {
        if Path::new(path).exists() {
            Self::backup(path).await?;
        }

        tokio::fs::write(path, content)
            .await
            .map_err(|e| Self::execution_failed(format!("Failed to write '{path}': {e}")))?;

        info!(path, bytes = content.len(), "Applied self-modification");
        Ok(format!(
            "Applied {} bytes to '{path}' (previous version in '{path}.bak')",
            content.len()
        ))
    }
}

impl Default for SelfModifyTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for SelfModifyTool {
    fn name(&self) -> &str {
        "self_modify"
    }

    fn description(&self) -> &str {
        "Back up and rewrite the assistant's own source files."
    }

    async fn execute(&self, params: serde_json::Value) -> Result<String, ToolError> {
        let operation = params["operation"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'operation' parameter".into()))?;
        let path = params["path"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'path' parameter".into()))?;

        debug!(operation, path, "Self-modify operation");

        match operation {
            "backup" => Self::backup(path).await,
            "apply" => {
                let content = params["content"].as_str().ok_or_else(|| {
                    ToolError::InvalidArguments("Missing 'content' parameter".into())
                })?;
                Self::apply(path, content).await
            }
            other => Err(ToolError::InvalidArguments(format!(
                "Unknown operation '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn backup_copies_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agent.rs");
        std::fs::write(&path, "fn main() {}").unwrap();

        let tool = SelfModifyTool::new();
        tool.execute(serde_json::json!({
            "operation": "backup",
            "path": path.to_str().unwrap()
        }))
        .await
        .unwrap();

        let backup = std::fs::read_to_string(path.with_extension("rs.bak")).unwrap();
        assert_eq!(backup, "fn main() {}");
    }

    #[tokio::test]
    async fn apply_backs_up_then_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agent.rs");
        std::fs::write(&path, "old").unwrap();

        let tool = SelfModifyTool::new();
        tool.execute(serde_json::json!({
            "operation": "apply",
            "path": path.to_str().unwrap(),
            "content": "new"
        }))
        .await
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(
            std::fs::read_to_string(path.with_extension("rs.bak")).unwrap(),
            "old"
        );
    }

    #[tokio::test]
    async fn apply_to_new_file_needs_no_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.rs");

        let tool = SelfModifyTool::new();
        tool.execute(serde_json::json!({
            "operation": "apply",
            "path": path.to_str().unwrap(),
            "content": "content"
        }))
        .await
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "content");
        assert!(!path.with_extension("rs.bak").exists());
    }

    #[tokio::test]
    async fn backup_missing_file_fails() {
        let tool = SelfModifyTool::new();
        let err = tool
            .execute(serde_json::json!({
                "operation": "backup",
                "path": "/tmp/autocli_test_missing_src_9f2.rs"
            }))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::ExecutionFailed { .. }));
    }

    #[tokio::test]
    async fn apply_requires_content() {
        let tool = SelfModifyTool::new();
        let err = tool
            .execute(serde_json::json!({"operation": "apply", "path": "/tmp/x.rs"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
