//! Tool dispatcher — one intent, one tool invocation.
//!
//! Every non-chat intent maps to exactly one registered tool. The dispatcher
//! emits a status marker (tool name and argument) to the live output sink,
//! runs the tool, then emits `✓` or `✗`. Tool failures never propagate:
//! they are counted and returned as a localized error string.

use crate::conversation::Conversation;
use crate::intent::Intent;
use crate::stats::SessionStats;
use crate::OutputSink;
use autocli_core::tool::ToolRegistry;
use serde_json::json;
use tracing::{debug, warn};

const READ_DISPLAY_LIMIT: usize = 500;

/// Dispatch a classified intent to its tool.
///
/// Returns the display text for the caller: a model-generated summary for
/// the file-list case, an error string on failure, or an empty string when
/// the raw tool output was already emitted to the sink.
pub async fn dispatch(
    intent: &Intent,
    tools: &ToolRegistry,
    conversation: &Conversation,
    stats: &mut SessionStats,
    sink: &mut dyn OutputSink,
) -> String {
    match intent {
        Intent::FileList => {
            sink.emit("\n[file list] ");
            match tools.execute("file", json!({"operation": "list", "path": "."})).await {
                Ok(listing) => {
                    sink.emit("✓\n");
                    stats.record_tool_use("file");
                    let prompt = format!(
                        "Пользователь спросил про файлы. Вот список файлов:\n{listing}\n\nОпиши коротко структуру (3-5 пунктов, без эмодзи)"
                    );
                    conversation.send_contextual(&prompt).await
                }
                Err(e) => fail(stats, sink, e),
            }
        }
        Intent::ShellRun { command } => {
            sink.emit(&format!("\n[shell: {command}] "));
            match tools.execute("shell", json!({"command": command})).await {
                Ok(output) => {
                    sink.emit("✓\n");
                    stats.record_tool_use("shell");
                    sink.emit(&format!("{output}\n"));
                    String::new()
                }
                Err(e) => fail(stats, sink, e),
            }
        }
        Intent::VcsRun { subcommand } => {
            sink.emit(&format!("\n[git {subcommand}] "));
            match tools.execute("git", json!({"command": subcommand})).await {
                Ok(output) => {
                    sink.emit("✓\n");
                    stats.record_tool_use("git");
                    sink.emit(&format!("{output}\n"));
                    String::new()
                }
                Err(e) => fail(stats, sink, e),
            }
        }
        Intent::FileRead { path } => {
            sink.emit(&format!("\n[read {path}] "));
            match tools.execute("file", json!({"operation": "read", "path": path})).await {
                Ok(content) => {
                    sink.emit("✓\n");
                    stats.record_tool_use("file");
                    sink.emit(&format!("{}\n", truncate_for_display(&content)));
                    String::new()
                }
                Err(e) => fail(stats, sink, e),
            }
        }
        Intent::Chat => {
            // Chat never reaches the dispatcher; the agent routes it to the
            // conversation manager directly.
            debug!("Chat intent reached dispatcher; nothing to do");
            String::new()
        }
    }
}

fn fail(
    stats: &mut SessionStats,
    sink: &mut dyn OutputSink,
    error: autocli_core::error::ToolError,
) -> String {
    sink.emit("✗\n");
    warn!(error = %error, "Tool invocation failed");
    stats.record_error();
    format!("Ошибка: {error}")
}

/// Cap long file contents for terminal display, keeping a char boundary.
fn truncate_for_display(content: &str) -> String {
    if content.chars().count() <= READ_DISPLAY_LIMIT {
        return content.to_string();
    }
    let head: String = content.chars().take(READ_DISPLAY_LIMIT).collect();
    format!("{head}...\n(truncated)")
}
