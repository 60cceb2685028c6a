//! Conversation manager — owns the transcript and drives model calls.
//!
//! The transcript is an ordered sequence of user/assistant turns owned
//! exclusively by this struct for the lifetime of one agent instance. It is
//! never persisted and only emptied by an explicit `clear()`.
//!
//! `send` is turn-paired: every call appends exactly one user turn and one
//! assistant turn, even when the model stream fails mid-way — the partial
//! aggregation is appended wrapped as an error so a user turn is never left
//! unanswered.

use crate::stats::SessionStats;
use crate::OutputSink;
use autocli_core::message::Message;
use autocli_core::provider::{Provider, ProviderRequest};
use std::sync::Arc;
use tracing::{debug, warn};

/// Transcript owner and model-call driver for one agent session.
pub struct Conversation {
    provider: Arc<dyn Provider>,
    model: String,
    temperature: f32,
    max_tokens: u32,
    system_prompt: String,
    transcript: Vec<Message>,
}

impl Conversation {
    pub fn new(
        provider: Arc<dyn Provider>,
        model: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature,
            max_tokens,
            system_prompt: system_prompt.into(),
            transcript: Vec::new(),
        }
    }

    /// The ordered transcript of user/assistant turns.
    pub fn messages(&self) -> &[Message] {
        &self.transcript
    }

    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    /// Empty the transcript. Idempotent.
    pub fn clear(&mut self) {
        self.transcript.clear();
        debug!("Transcript cleared");
    }

    fn request(&self, messages: Vec<Message>, stream: bool) -> ProviderRequest {
        ProviderRequest {
            model: self.model.clone(),
            messages,
            temperature: self.temperature,
            max_tokens: Some(self.max_tokens),
            stream,
        }
    }

    /// Send a user message and stream the reply.
    ///
    /// Appends the user turn, issues a streaming model call over the fixed
    /// system prompt plus the full transcript, and forwards each fragment to
    /// `sink` as it arrives while aggregating the final assistant turn.
    /// Returns the appended assistant content.
    pub async fn send(
        &mut self,
        user_text: &str,
        stats: &mut SessionStats,
        sink: &mut dyn OutputSink,
    ) -> String {
        self.transcript.push(Message::user(user_text));

        let mut messages = vec![Message::system(&self.system_prompt)];
        messages.extend(self.transcript.iter().cloned());

        let mut full_text = String::new();
        let mut stream_error = None;

        match self.provider.stream(self.request(messages, true)).await {
            Ok(mut rx) => {
                while let Some(item) = rx.recv().await {
                    match item {
                        Ok(chunk) => {
                            if let Some(piece) = chunk.content {
                                if !piece.is_empty() {
                                    sink.emit(&piece);
                                    full_text.push_str(&piece);
                                }
                            }
                            if chunk.done {
                                break;
                            }
                        }
                        Err(e) => {
                            stream_error = Some(e);
                            break;
                        }
                    }
                }
            }
            Err(e) => stream_error = Some(e),
        }

        let assistant_text = match stream_error {
            None => full_text,
            Some(e) => {
                warn!(error = %e, "Streaming error");
                stats.record_error();
                let wrapped = if full_text.is_empty() {
                    format!("Ошибка: {e}")
                } else {
                    format!("{full_text}\n[Ошибка: {e}]")
                };
                sink.emit(&format!("\nОшибка: {e}\n"));
                wrapped
            }
        };

        self.transcript.push(Message::assistant(&assistant_text));
        assistant_text
    }

    /// One-shot model call with a fresh system+user message pair.
    ///
    /// Stateless: never reads or writes the transcript. Returns the trimmed
    /// response text, or an empty string on failure.
    pub async fn send_contextual(&self, prompt: &str) -> String {
        let messages = vec![Message::system(&self.system_prompt), Message::user(prompt)];

        match self.provider.complete(self.request(messages, false)).await {
            Ok(response) => response.message.content.trim().to_string(),
            Err(e) => {
                warn!(error = %e, "Contextual call failed");
                String::new()
            }
        }
    }
}
