//! LLM provider implementations for AutoCLI.
//!
//! Currently one backend: a local [Ollama](https://ollama.com) server via
//! its native chat API. Everything speaks through the `Provider` trait in
//! `autocli-core`, so the agent never knows which backend is wired in.

pub mod ollama;

pub use ollama::OllamaProvider;
