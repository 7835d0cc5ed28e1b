use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completion client interface.
///
/// Implementations send the ordered message list upstream and return the
/// first completion's text. Trait object so handlers and tests can swap in
/// stub backends.
#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> anyhow::Result<String>;
}
