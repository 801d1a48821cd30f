//! Chat-completion HTTP client for OpenAI-compatible endpoints.
//!
//! A thin forwarding layer: one POST per call, bearer auth from the stored
//! credentials, no retries and no timeout policy. Callers own any
//! surrounding timeout/cancellation strategy, and transport errors
//! propagate unmodified.

use bytes::Bytes;
use futures::Stream;
use thiserror::Error;
use tracing::{debug, error};

use lingua_core::config::ModelRegistry;
use lingua_core::types::{ChatCompletion, ChatRequest, Message, ResponseFormat};
use lingua_core::RegistryError;

/// Stock endpoint used when a model entry carries no `base_url`.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

// ─────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────

/// Errors surfaced by [`ChatClient`].
#[derive(Debug, Error)]
pub enum ChatError {
    /// Transport-level failure (connection, TLS, body read), propagated
    /// from the HTTP layer unmodified.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status (auth failure, rate
    /// limit, bad request).
    #[error("chat API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

// ─────────────────────────────────────────────
// ChatClient
// ─────────────────────────────────────────────

/// Per-call knobs, mirroring the remote API's optional fields.
#[derive(Clone, Debug)]
pub struct ChatOptions {
    /// Sampling temperature.
    pub temperature: f64,
    /// Requested output shape; `None` leaves the API default.
    pub response_format: Option<ResponseFormat>,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            response_format: None,
        }
    }
}

/// Chat-completion client bound to one (api_key, base_url, model) triple.
///
/// Each call is independently authenticated and configured from the
/// stored triple; the underlying connection pool is reused across calls.
pub struct ChatClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl ChatClient {
    /// Create a client. `base_url: None` falls back to the stock OpenAI
    /// endpoint.
    pub fn new(
        api_key: impl Into<String>,
        base_url: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        ChatClient {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.into(),
        }
    }

    /// The model identifier sent with each request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The endpoint requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn completions_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}/chat/completions", base)
    }

    fn request_body(&self, messages: &[Message], opts: &ChatOptions, stream: bool) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            temperature: opts.temperature,
            stream,
            response_format: opts.response_format.clone(),
        }
    }

    async fn send(&self, body: &ChatRequest) -> Result<reqwest::Response, ChatError> {
        debug!(
            model = %body.model,
            messages = body.messages.len(),
            stream = body.stream,
            "Calling chat API"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            error!(%status, body = %body, "Chat API error");
            return Err(ChatError::Api { status, body });
        }

        Ok(response)
    }

    /// Send a completion request and decode the full response.
    pub async fn chat(
        &self,
        messages: &[Message],
        opts: &ChatOptions,
    ) -> Result<ChatCompletion, ChatError> {
        let body = self.request_body(messages, opts, false);
        let response = self.send(&body).await?;
        Ok(response.json::<ChatCompletion>().await?)
    }

    /// Send a streaming completion request and hand back the raw byte
    /// stream. Chunks are not parsed here; consuming the stream performs
    /// the remaining network reads.
    pub async fn chat_stream(
        &self,
        messages: &[Message],
        opts: &ChatOptions,
    ) -> Result<impl Stream<Item = reqwest::Result<Bytes>>, ChatError> {
        let body = self.request_body(messages, opts, true);
        let response = self.send(&body).await?;
        Ok(response.bytes_stream())
    }
}

// ─────────────────────────────────────────────
// Builder (convenience)
// ─────────────────────────────────────────────

/// Resolve `code` (plus an optional feature) against the registry and
/// build a client for the resulting endpoint.
pub fn create_client(
    registry: &ModelRegistry,
    code: &str,
    feature: Option<&str>,
    api_key: &str,
) -> Result<ChatClient, RegistryError> {
    let endpoint = registry.resolve(code, feature)?;
    debug!(
        code,
        model = endpoint.model,
        base_url = endpoint.base_url.unwrap_or("default"),
        "Creating chat client"
    );
    Ok(ChatClient::new(
        api_key,
        endpoint.base_url.map(String::from),
        endpoint.model,
    ))
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
