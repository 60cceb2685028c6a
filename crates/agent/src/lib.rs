//! Agent runtime: intent classification, tool dispatch, and the streaming
//! conversation loop.
//!
//! One [`Agent`] instance owns its transcript, tool registry, and session
//! counters. Processing is strictly sequential per instance: one user
//! message is fully handled before the next is accepted, and none of the
//! owned state is shared across threads.

pub mod conversation;
pub mod dispatch;
pub mod intent;
pub mod stats;

pub use conversation::Conversation;
pub use intent::{classify, Intent};
pub use stats::SessionStats;

use autocli_config::AppConfig;
use autocli_core::message::Message;
use autocli_core::provider::Provider;
use autocli_core::tool::ToolRegistry;
use std::sync::Arc;
use tracing::{debug, info};

/// Live output destination for streamed fragments and status markers.
///
/// Implemented for any `FnMut(&str)` so callers can pass a closure that
/// prints, collects into a buffer, or forwards over a channel.
pub trait OutputSink {
    fn emit(&mut self, text: &str);
}

impl<F: FnMut(&str)> OutputSink for F {
    fn emit(&mut self, text: &str) {
        self(text)
    }
}

/// The assistant facade: classify a message, run at most one tool, or hold
/// a streamed conversation.
pub struct Agent {
    conversation: Conversation,
    tools: ToolRegistry,
    stats: SessionStats,
    model: String,
}

impl Agent {
    pub fn new(config: &AppConfig, provider: Arc<dyn Provider>, tools: ToolRegistry) -> Self {
        info!(model = %config.model, provider = provider.name(), "Agent initialized");
        Self {
            conversation: Conversation::new(
                provider,
                &config.model,
                config.temperature,
                config.max_tokens,
                &config.system_prompt,
            ),
            tools,
            stats: SessionStats::new(),
            model: config.model.clone(),
        }
    }

    /// Process one user message end to end.
    ///
    /// Classifies the message, then either dispatches to exactly one tool or
    /// routes it through the streamed chat path. Counts one request per call
    /// regardless of outcome. Returns the display text (tool summary or
    /// error string); streamed chat output goes to the sink, not the return
    /// value.
    pub async fn process(&mut self, user_text: &str, sink: &mut dyn OutputSink) -> String {
        self.stats.record_request();
        let intent = classify(user_text);
        debug!(?intent, "Classified user message");

        match intent {
            Intent::Chat => {
                self.conversation
                    .send(user_text, &mut self.stats, sink)
                    .await;
                String::new()
            }
            other => {
                dispatch::dispatch(&other, &self.tools, &self.conversation, &mut self.stats, sink)
                    .await
            }
        }
    }

    /// Ask the model to analyze the assistant's code and suggest
    /// improvements, through the normal chat path.
    pub async fn self_improve(&mut self, sink: &mut dyn OutputSink) -> String {
        info!("Self-improvement triggered");
        self.stats.record_self_improvement();
        let prompt = "Проанализируй свой код и предложи улучшения.";
        self.conversation.send(prompt, &mut self.stats, sink).await
    }

    /// Same as [`Self::self_improve`], seeded with a concrete error text.
    pub async fn self_improve_on_error(
        &mut self,
        error_message: &str,
        sink: &mut dyn OutputSink,
    ) -> String {
        info!(error = %error_message, "Self-improving on error");
        self.stats.record_self_improvement();
        let prompt =
            format!("Произошла ошибка: {error_message}\nПроанализируй и предложи исправление.");
        self.conversation.send(&prompt, &mut self.stats, sink).await
    }

    /// Empty the transcript.
    pub fn clear(&mut self) {
        self.conversation.clear();
    }

    /// Human-readable session status block.
    pub fn status_report(&self) -> String {
        self.stats.report(&self.model, self.conversation.len())
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn transcript(&self) -> &[Message] {
        self.conversation.messages()
    }
}
