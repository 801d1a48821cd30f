//! Chat-completion HTTP client for Lingua.
//!
//! The caller resolves a model (and optional feature) through the
//! registry in `lingua-core`, then talks to the resulting endpoint
//! through [`ChatClient`].
//!
//! # Architecture
//!
//! - [`http_client::ChatClient`] — bound to one (api_key, base_url, model) triple
//! - [`http_client::create_client`] — registry-backed builder

pub mod http_client;

pub use http_client::{create_client, ChatClient, ChatError, ChatOptions};
