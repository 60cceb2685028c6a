//! Shell tool — execute system commands.
//!
//! Commands run verbatim through the system shell with the invoking user's
//! privileges. Sandboxing is an explicit non-goal of this assistant; the
//! router may hand an entire unrecognized message here (see the intent
//! extractor), so callers should treat this tool as fully trusted-input.

use async_trait::async_trait;
use autocli_core::error::ToolError;
use autocli_core::tool::Tool;
use tokio::process::Command;
use tracing::{debug, warn};

/// Execute shell commands and capture their output.
pub struct ShellTool;

impl ShellTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ShellTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for ShellTool {
    fn name(&self) -> &str {
        "shell"
    }

    fn description(&self) -> &str {
        "Execute a shell command and return stdout/stderr."
    }

    async fn execute(&self, params: serde_json::Value) -> Result<String, ToolError> {
        let command = params["command"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'command' parameter".into()))?;

        debug!(command = %command, "Executing shell command");

        let output = if cfg!(target_os = "windows") {
            Command::new("cmd").args(["/C", command]).output().await
        } else {
            Command::new("sh").args(["-c", command]).output().await
        };

        match output {
            Ok(output) => {
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
                    warn!(command = %command, exit_code = code, "Command failed");
                    format!("[exit code: {code}]\n{stdout}\n{stderr}")
                };

                Ok(result_text.trim().to_string())
            }
            Err(e) => Err(ToolError::ExecutionFailed {
                tool_name: "shell".into(),
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn execute_echo() {
        let tool = ShellTool::new();
        let result = tool
            .execute(serde_json::json!({"command": "echo hi"}))
            .await
            .unwrap();
        assert!(result.contains("hi"));
    }

    #[tokio::test]
    async fn failing_command_reports_exit_code() {
        let tool = ShellTool::new();
        let result = tool
            .execute(serde_json::json!({"command": "false"}))
            .await
            .unwrap();
        assert!(result.contains("[exit code: 1]"));
    }

    #[tokio::test]
    async fn missing_command_is_invalid_arguments() {
        let tool = ShellTool::new();
        let err = tool.execute(serde_json::json!({})).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
