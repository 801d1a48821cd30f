//! Chat wire types — the OpenAI chat-completions request/response format.
//!
//! Every backend the registry knows about speaks this format (the sole
//! `dependence` today is OpenAI-compatible), so the registry and the HTTP
//! client share these types. Messages are typed enums so a malformed
//! conversation is a compile error, not an API rejection.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Messages
// ─────────────────────────────────────────────

/// A chat message, tagged by `role`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    System { content: String },
    User { content: String },
    Assistant { content: String },
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Message::System {
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Message::User {
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Message::Assistant {
            content: content.into(),
        }
    }
}

// ─────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────

/// Requested output shape, serialized as `{"type": ...}`.
///
/// `json_object` constrains the model to emit valid JSON; pairs with the
/// `json_output` feature in the model registry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: String,
}

impl ResponseFormat {
    /// JSON-constrained output.
    pub fn json_object() -> Self {
        ResponseFormat {
            kind: "json_object".to_string(),
        }
    }

    /// Plain text output (the API default).
    pub fn text() -> Self {
        ResponseFormat {
            kind: "text".to_string(),
        }
    }
}

/// Request body for `/chat/completions`.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

// ─────────────────────────────────────────────
// Response (non-streaming)
// ─────────────────────────────────────────────

/// A completed chat response.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatCompletion {
    pub id: Option<String>,
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

impl ChatCompletion {
    /// Text content of the first choice, if any.
    pub fn content(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.message.content.as_deref())
    }
}

/// A single choice in a completed response.
#[derive(Clone, Debug, Deserialize)]
pub struct Choice {
    pub message: ReplyMessage,
    pub finish_reason: Option<String>,
}

/// The assistant message within a choice.
#[derive(Clone, Debug, Deserialize)]
pub struct ReplyMessage {
    pub content: Option<String>,
    /// Thinking output from deep-think models (e.g. deepseek-reasoner).
    #[serde(default)]
    pub reasoning_content: Option<String>,
}

/// Token usage statistics.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
