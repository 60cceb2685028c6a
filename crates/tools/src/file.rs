//! File tool — read, write, and inspect files.
//!
//! Operations: read, write, append, delete, list, exists. All single-shot;
//! no locking against concurrent external modification.

use async_trait::async_trait;
use autocli_core::error::ToolError;
use autocli_core::tool::Tool;
use std::path::Path;
use tracing::debug;

/// Tool for file operations.
pub struct FileTool;

impl FileTool {
    pub fn new() -> Self {
        Self
    }

    fn execution_failed(reason: impl Into<String>) -> ToolError {
        ToolError::ExecutionFailed {
            tool_name: "file".into(),
            reason: reason.into(),
        }
    }

    async fn read_file(path: &str) -> Result<String, ToolError> {
        let file_path = Path::new(path);

        if !file_path.exists() {
            return Err(Self::execution_failed(format!(
                "File does not exist: {path}"
            )));
        }

        if !file_path.is_file() {
            return Err(Self::execution_failed(format!(
                "Path is not a file: {path}"
            )));
        }

        let content = tokio::fs::read_to_string(file_path)
            .await
            .map_err(|e| Self::execution_failed(format!("Failed to read '{path}': {e}")))?;

        Ok(format!("File content of '{path}':\n\n{content}"))
    }

    async fn write_file(path: &str, content: &str) -> Result<String, ToolError> {
        let file_path = Path::new(path);

        // Create parent directories if needed
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    Self::execution_failed(format!("Failed to create parent dirs: {e}"))
                })?;
            }
        }

        tokio::fs::write(file_path, content)
            .await
            .map_err(|e| Self::execution_failed(format!("Failed to write '{path}': {e}")))?;

        Ok(format!(
            "Successfully wrote {} bytes to '{path}'",
            content.len()
        ))
    }

    async fn append_file(path: &str, content: &str) -> Result<String, ToolError> {
        use tokio::io::AsyncWriteExt;

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(|e| Self::execution_failed(format!("Failed to open '{path}': {e}")))?;

        file.write_all(content.as_bytes())
            .await
            .map_err(|e| Self::execution_failed(format!("Failed to append to '{path}': {e}")))?;

        // Tokio file writes are buffered; flush before drop so the append is
        // visible once this returns.
        file.flush()
            .await
            .map_err(|e| Self::execution_failed(format!("Failed to append to '{path}': {e}")))?;

        Ok(format!(
            "Successfully appended {} bytes to '{path}'",
            content.len()
        ))
    }

    async fn delete_file(path: &str) -> Result<String, ToolError> {
        if !Path::new(path).exists() {
            return Err(Self::execution_failed(format!(
                "File does not exist: {path}"
            )));
        }

        tokio::fs::remove_file(path)
            .await
            .map_err(|e| Self::execution_failed(format!("Failed to delete '{path}': {e}")))?;

        Ok(format!("Successfully deleted '{path}'"))
    }

    async fn list_directory(path: &str) -> Result<String, ToolError> {
        let dir_path = Path::new(path);

        if !dir_path.exists() {
            return Err(Self::execution_failed(format!(
                "Directory does not exist: {path}"
            )));
        }

        if !dir_path.is_dir() {
            return Err(Self::execution_failed(format!(
                "Path is not a directory: {path}"
            )));
        }

        let mut read_dir = tokio::fs::read_dir(dir_path)
            .await
            .map_err(|e| Self::execution_failed(format!("Failed to list '{path}': {e}")))?;

        let mut items: Vec<(String, bool)> = Vec::new();
        while let Some(entry) = read_dir
            .next_entry()
            .await
            .map_err(|e| Self::execution_failed(format!("Failed to list '{path}': {e}")))?
        {
            let name = entry.file_name().to_string_lossy().to_string();
            let is_dir = entry
                .file_type()
                .await
                .map(|t| t.is_dir())
                .unwrap_or(false);
            items.push((name, is_dir));
        }

        items.sort_by(|a, b| a.0.cmp(&b.0));

        let listing: Vec<String> = items
            .into_iter()
            .map(|(name, is_dir)| {
                let tag = if is_dir { "DIR" } else { "FILE" };
                format!("  [{tag}] {name}")
            })
            .collect();

        Ok(format!("Contents of '{path}':\n{}", listing.join("\n")))
    }

    async fn check_exists(path: &str) -> String {
        let exists = Path::new(path).exists();
        format!("Path '{path}' exists: {exists}")
    }
}

impl Default for FileTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for FileTool {
    fn name(&self) -> &str {
        "file"
    }

    fn description(&self) -> &str {
        "File operations: read, write, append, delete, list, exists."
    }

    async fn execute(&self, params: serde_json::Value) -> Result<String, ToolError> {
        let operation = params["operation"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'operation' parameter".into()))?;
        let path = params["path"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'path' parameter".into()))?;
        let content = params["content"].as_str().unwrap_or("");

        debug!(operation, path, "File operation");

        match operation {
            "read" => Self::read_file(path).await,
            "write" => Self::write_file(path, content).await,
            "append" => Self::append_file(path, content).await,
            "delete" => Self::delete_file(path).await,
            "list" => Self::list_directory(path).await,
            "exists" => Ok(Self::check_exists(path).await),
            other => Err(ToolError::InvalidArguments(format!(
                "Unknown operation '{other}'"
            ))),
        }
    }
}
