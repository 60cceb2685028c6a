//! Session statistics — counters for one agent instance.
//!
//! Created at agent construction, mutated throughout the session, read-only
//! externally via `report()`. Counters are monotonically non-decreasing for
//! the process lifetime.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Per-session counters: requests, errors, self-improvement triggers, and
/// per-tool invocation counts.
#[derive(Debug, Clone)]
pub struct SessionStats {
    /// Processed user messages
    pub requests: u64,

    /// Failed tool invocations and model-stream failures
    pub errors: u64,

    /// Self-improvement triggers
    pub self_improvements: u64,

    /// Successful invocations per tool name
    pub tool_usage: HashMap<String, u64>,

    /// When this session started
    pub started_at: DateTime<Utc>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            requests: 0,
            errors: 0,
            self_improvements: 0,
            tool_usage: HashMap::new(),
            started_at: Utc::now(),
        }
    }

    /// Count one processed user message.
    pub fn record_request(&mut self) {
        self.requests += 1;
    }

    /// Count one error (tool failure or model-stream failure).
    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    /// Count one successful invocation of the named tool.
    pub fn record_tool_use(&mut self, tool_name: &str) {
        *self.tool_usage.entry(tool_name.to_string()).or_insert(0) += 1;
    }

    /// Count one self-improvement trigger.
    pub fn record_self_improvement(&mut self) {
        self.self_improvements += 1;
    }

    /// Invocation count for a tool (0 if never used).
    pub fn tool_count(&self, tool_name: &str) -> u64 {
        self.tool_usage.get(tool_name).copied().unwrap_or(0)
    }

    /// Render a human-readable status block.
    pub fn report(&self, model: &str, transcript_len: usize) -> String {
        let mut out = String::from("=== Agent Status ===\n");
        out.push_str(&format!("Model: {model}\n"));
        out.push_str(&format!(
            "Started: {}\n",
            self.started_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        out.push_str(&format!("Requests: {}\n", self.requests));
        out.push_str(&format!("Errors: {}\n", self.errors));
        out.push_str(&format!("Self-improvements: {}\n", self.self_improvements));

        out.push_str("\nTools used:\n");
        let mut tools: Vec<_> = self.tool_usage.iter().collect();
        tools.sort_by(|a, b| a.0.cmp(b.0));
        for (tool, count) in tools {
            out.push_str(&format!("  {tool}: {count}\n"));
        }

        out.push_str(&format!("\nHistory length: {transcript_len} messages\n"));
        out
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
