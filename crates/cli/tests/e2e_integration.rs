//! End-to-end agent scenarios against a scripted model backend.
//!
//! These exercise the full classify → dispatch / chat pipeline with the real
//! tool registry and a mock provider standing in for Ollama.

use async_trait::async_trait;
use autocli_agent::Agent;
use autocli_config::AppConfig;
use autocli_core::error::ProviderError;
use autocli_core::message::Message;
use autocli_core::provider::{Provider, ProviderRequest, ProviderResponse};
use std::sync::Arc;

/// Echoes a canned reply for every model call.
struct CannedProvider {
    reply: &'static str,
}

#[async_trait]
impl Provider for CannedProvider {
    fn name(&self) -> &str {
        "canned"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        Ok(ProviderResponse {
            message: Message::assistant(self.reply),
            model: request.model,
        })
    }
}

fn agent_with(reply: &'static str) -> Agent {
    let config = AppConfig::default();
    Agent::new(
        &config,
        Arc::new(CannedProvider { reply }),
        autocli_tools::default_registry(),
    )
}

#[tokio::test]
async fn list_files_runs_file_tool_and_summarizes() {
    let mut agent = agent_with("Проект с несколькими файлами исходного кода.");
    let mut markers = String::new();
    let mut sink = |s: &str| markers.push_str(s);

    let summary = agent.process("list files", &mut sink).await;

    assert!(!summary.is_empty());
    assert_eq!(agent.stats().tool_count("file"), 1);
    assert_eq!(agent.stats().errors, 0);
    assert!(markers.contains("[file list]"));
    assert!(markers.contains('✓'));
    // Tool path never touches the conversation transcript.
    assert!(agent.transcript().is_empty());
}

#[tokio::test]
async fn run_echo_executes_shell_and_shows_output() {
    let mut agent = agent_with("unused");
    let mut out = String::new();
    let mut sink = |s: &str| out.push_str(s);

    let display = agent.process("run echo hi", &mut sink).await;

    assert_eq!(display, "");
    assert!(out.contains("[shell: echo hi]"));
    assert!(out.contains("hi"));
    assert_eq!(agent.stats().tool_count("shell"), 1);
}

#[tokio::test]
async fn small_talk_goes_through_chat_path() {
    let mut agent = agent_with("Всё отлично, спасибо!");
    let mut out = String::new();
    let mut sink = |s: &str| out.push_str(s);

    let before = agent.transcript().len();
    agent.process("how are you", &mut sink).await;

    assert_eq!(agent.transcript().len(), before + 2);
    assert!(agent.stats().tool_usage.is_empty());
    assert!(out.contains("Всё отлично"));
}

#[tokio::test]
async fn reading_missing_file_is_a_counted_error() {
    let mut agent = agent_with("unused");
    let mut out = String::new();
    let mut sink = |s: &str| out.push_str(s);

    let display = agent
        .process("read path/that/does/not/exist.txt", &mut sink)
        .await;

    assert!(display.starts_with("Ошибка:"));
    assert_eq!(agent.stats().errors, 1);
    assert_eq!(agent.stats().tool_count("file"), 0);
    assert!(out.contains('✗'));
}

#[tokio::test]
async fn session_counters_survive_a_mixed_conversation() {
    let mut agent = agent_with("ok");
    let mut sink = |_: &str| {};

    agent.process("привет", &mut sink).await;
    agent.process("run true", &mut sink).await;
    agent.process("read no/such/file.txt", &mut sink).await;
    agent.clear();
    agent.process("git", &mut sink).await;

    let stats = agent.stats();
    assert_eq!(stats.requests, 4);
    assert_eq!(stats.errors, 1);
    assert_eq!(stats.tool_count("shell"), 1);
    // Real `git status` may succeed or fail depending on the environment,
    // but the invocation itself launches, so it counts as a use.
    assert_eq!(stats.tool_count("git"), 1);

    let report = agent.status_report();
    assert!(report.contains("Requests: 4"));
    assert!(report.contains("shell: 1"));
}

#[tokio::test]
async fn clear_resets_transcript_but_not_counters() {
    let mut agent = agent_with("ответ");
    let mut sink = |_: &str| {};

    agent.process("как дела", &mut sink).await;
    assert_eq!(agent.transcript().len(), 2);

    agent.clear();
    assert!(agent.transcript().is_empty());
    assert_eq!(agent.stats().requests, 1);

    agent.process("и снова привет", &mut sink).await;
    assert_eq!(agent.transcript().len(), 2);
    assert_eq!(agent.stats().requests, 2);
}
