//! Core building blocks for Lingua — chat wire types, reply-language
//! options, and the model registry.
//!
//! # Architecture
//!
//! - [`types`] — OpenAI chat-completions request/response types
//! - [`language`] — closed set of reply languages + prompt directive
//! - [`config`] — YAML-backed, validated model registry with
//!   feature-gated endpoint resolution

pub mod config;
pub mod language;
pub mod types;

// Re-export main types for convenience
pub use config::{Endpoint, ModelConfig, ModelRegistry, RegistryError};
pub use language::LanguageOption;
pub use types::{ChatCompletion, ChatRequest, Message, ResponseFormat};
