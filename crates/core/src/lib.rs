//! # AutoCLI Core
//!
//! Domain types, traits, and error definitions for the AutoCLI assistant.
//! This crate defines the domain model that all other crates implement
//! against: messages, the tool capability trait, and the model-provider
//! trait.
//!
//! Implementations live in their respective crates (`autocli-tools`,
//! `autocli-providers`); everything depends inward on core, which keeps the
//! dependency graph clean and makes every seam mockable in tests.

pub mod error;
pub mod message;
pub mod provider;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use error::{Error, ProviderError, Result, ToolError};
pub use message::{Message, Role};
pub use provider::{Provider, ProviderRequest, ProviderResponse, StreamChunk};
pub use tool::{Tool, ToolRegistry};
