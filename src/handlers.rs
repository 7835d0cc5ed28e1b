use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::TranslateError;
use crate::llm::ChatMessage;
use crate::prompt;
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranslationRequest {
    pub text: String,
    pub from_lang: String,
    pub to_lang: String,
}

impl Default for TranslationRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            from_lang: "auto".to_string(),
            to_lang: "en-US".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TranslationResult {
    pub translated: String,
}

/// POST /api/translate
///
/// An absent or malformed body degrades to the all-defaults request, so
/// the only client error is empty text after trimming. The credential
/// check happens per request: an unconfigured server stays up and answers
/// 500 until a key is provided.
pub async fn translate(
    State(state): State<AppState>,
    body: Option<Json<TranslationRequest>>,
) -> Result<Json<TranslationResult>, TranslateError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();

    let text = request.text.trim();
    if text.is_empty() {
        return Err(TranslateError::MissingText);
    }

    let llm = state.llm.as_ref().ok_or(TranslateError::MissingApiKey)?;

    let instruction = prompt::system_instruction(&request.from_lang, &request.to_lang);
    debug!(
        "Translating {} chars: {} -> {}",
        text.len(),
        request.from_lang,
        request.to_lang
    );

    let messages = vec![ChatMessage::system(instruction), ChatMessage::user(text)];
    let translated = llm.chat_completion(messages).await?;

    Ok(Json(TranslationResult {
        translated: translated.trim().to_string(),
    }))
}

/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "configured": state.llm.is_some(),
    }))
}
