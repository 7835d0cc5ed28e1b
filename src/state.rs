use std::sync::Arc;

use crate::config::Settings;
use crate::llm::{ChatCompletionClient, OpenAiClient};

/// Shared application state: immutable settings plus the injected upstream
/// client. `llm` is `None` when no credential is configured, which keeps
/// the server up while every translate request reports the missing key.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub llm: Option<Arc<dyn ChatCompletionClient>>,
}

impl AppState {
    pub fn new(config: Settings) -> Self {
        let llm = config.api_key.as_ref().map(|key| {
            Arc::new(OpenAiClient::new(config.base_url.clone(), key.clone()))
                as Arc<dyn ChatCompletionClient>
        });

        Self {
            config: Arc::new(config),
            llm,
        }
    }

    /// State with an arbitrary client, used by tests to inject stubs.
    pub fn with_client(config: Settings, llm: Option<Arc<dyn ChatCompletionClient>>) -> Self {
        Self {
            config: Arc::new(config),
            llm,
        }
    }
}
