//! Tool trait — the abstraction over agent capabilities.
//!
//! Tools are what give the assistant the ability to act in the world:
//! execute shell commands, read/write files, run git, patch its own source.
//! Every tool takes a JSON object of named parameters and returns either a
//! text payload or a [`ToolError`]; required keys are validated before any
//! side effect happens.

use crate::error::ToolError;
use async_trait::async_trait;
use std::collections::HashMap;

/// The core Tool trait.
///
/// Each capability (file, shell, git, self_modify) implements this trait.
/// Tools are registered in the ToolRegistry and looked up by name when the
/// intent router dispatches a request.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The unique name of this tool (e.g., "shell", "file").
    fn name(&self) -> &str;

    /// A short description of what this tool does.
    fn description(&self) -> &str;

    /// Execute the tool with the given parameters.
    ///
    /// Parameter validation must come first: a missing required key is
    /// `ToolError::InvalidArguments` and must not touch the filesystem or
    /// spawn a process.
    async fn execute(&self, params: serde_json::Value) -> Result<String, ToolError>;
}

/// A registry of available tools, keyed by tool name.
///
/// This is the static dispatch table: the router classifies a message,
/// then looks up exactly one tool here and invokes it exactly once.
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        let name = tool.name().to_string();
        self.tools.insert(name, tool);
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    /// Execute a named tool with the given parameters.
    pub async fn execute(
        &self,
        name: &str,
        params: serde_json::Value,
    ) -> Result<String, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;
        tool.execute(params).await
    }

    /// List all registered tool names.
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A simple test tool for unit tests.
    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }
        fn description(&self) -> &str {
            "Echoes back the input"
        }
        async fn execute(&self, params: serde_json::Value) -> Result<String, ToolError> {
            let text = params["text"]
                .as_str()
                .ok_or_else(|| ToolError::InvalidArguments("Missing 'text' parameter".into()))?;
            Ok(text.to_string())
        }
    }

    #[test]
    fn registry_register_and_lookup() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(EchoTool));
        assert!(registry.get("echo").is_some());
        assert!(registry.get("nonexistent").is_none());
    }

    #[tokio::test]
    async fn registry_execute_tool() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(EchoTool));

        let result = registry
            .execute("echo", serde_json::json!({"text": "hello world"}))
            .await
            .unwrap();
        assert_eq!(result, "hello world");
    }

    #[tokio::test]
    async fn registry_execute_missing_tool() {
        let registry = ToolRegistry::new();
        let err = registry
            .execute("nonexistent", serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }

    #[tokio::test]
    async fn missing_params_are_invalid_arguments() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(EchoTool));

        let err = registry
            .execute("echo", serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
