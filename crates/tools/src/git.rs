//! Git tool — run version-control subcommands.
//!
//! Takes a subcommand string ("status", "log --oneline -5"), splits it on
//! whitespace, and invokes the `git` binary directly. No shell is involved.

use async_trait::async_trait;
use autocli_core::error::ToolError;
use autocli_core::tool::Tool;
use tokio::process::Command;
use tracing::debug;

/// Execute git subcommands against the current working directory.
pub struct GitTool;

impl GitTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GitTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for GitTool {
    fn name(&self) -> &str {
        "git"
    }

    fn description(&self) -> &str {
        "Run a git subcommand and return its output."
    }

    async fn execute(&self, params: serde_json::Value) -> Result<String, ToolError> {
        let command = params["command"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'command' parameter".into()))?;

        let args: Vec<&str> = command.split_whitespace().collect();
        if args.is_empty() {
            return Err(ToolError::InvalidArguments(
                "Empty git subcommand".into(),
            ));
        }

        debug!(command = %command, "Executing git command");

        let output = Command::new("git")
            .args(&args)
            .output()
            .await
            .map_err(|e| ToolError::ExecutionFailed {
                tool_name: "git".into(),
                reason: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        let result_text = if output.status.success() {
            if stderr.is_empty() {
                stdout
            } else {
                format!("{stdout}\n[stderr]: {stderr}")
            }
        } else {
            let code = output.status.code().unwrap_or(-1);
            format!("[exit code: {code}]\n{stdout}\n{stderr}")
        };

        Ok(result_text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn git_version_runs() {
        let tool = GitTool::new();
        let result = tool
            .execute(serde_json::json!({"command": "--version"}))
            .await
            .unwrap();
        assert!(result.contains("git version"));
    }

    #[tokio::test]
    async fn subcommand_splits_on_whitespace() {
        let tool = GitTool::new();
        // `git config --get` with a key that is never set; exits non-zero
        // but the launch itself succeeds.
        let result = tool
            .execute(serde_json::json!({"command": "config --get autocli.nonexistent"}))
            .await
            .unwrap();
        assert!(result.contains("[exit code:"));
    }

    #[tokio::test]
    async fn missing_command_is_invalid_arguments() {
        let tool = GitTool::new();
        let err = tool.execute(serde_json::json!({})).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn empty_command_is_invalid_arguments() {
        let tool = GitTool::new();
        let err = tool
            .execute(serde_json::json!({"command": "   "}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
