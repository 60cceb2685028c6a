//! Built-in tool implementations for AutoCLI.
//!
//! Tools give the assistant the ability to interact with the world:
//! read/write files, run shell commands, drive git, and patch its own
//! source files. Each one implements the `Tool` trait from `autocli-core`
//! and is looked up by name in the registry when the intent router
//! dispatches a request.

pub mod file;
pub mod git;
pub mod self_modify;
pub mod shell;

use autocli_core::tool::ToolRegistry;

pub use file::FileTool;
pub use git::GitTool;
pub use self_modify::SelfModifyTool;
pub use shell::ShellTool;

/// Create the default tool registry with all built-in tools.
///
/// Note: the shell tool executes commands verbatim. Sandboxing is out of
/// scope for this assistant; it runs with the invoking user's privileges.
pub fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(ShellTool::new()));
    registry.register(Box::new(FileTool::new()));
    registry.register(Box::new(GitTool::new()));
    registry.register(Box::new(SelfModifyTool::new()));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_has_all_tools() {
        let registry = default_registry();
        for name in ["shell", "file", "git", "self_modify"] {
            assert!(registry.get(name).is_some(), "missing tool: {name}");
        }
    }
}
