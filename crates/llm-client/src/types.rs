use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> ChatMessage<'a> {
    pub fn user(content: &'a str) -> Self {
        Self {
            role: "user",
            content,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssistantMessage {
    pub content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("request to advisory provider failed: {0}")]
    Transport(String),
    #[error("advisory provider request timed out")]
    Timeout,
    #[error("advisory provider returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("advisory provider response could not be decoded: {0}")]
    Decode(String),
    #[error("advisory provider returned no completion")]
    NoCompletion,
}
