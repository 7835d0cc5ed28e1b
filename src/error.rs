use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

/// Failure kinds for the translate endpoint.
///
/// All failures are terminal for the request. Validation problems surface
/// as client errors, everything else as server errors carrying the source
/// error's message text.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Missing text")]
    MissingText,

    #[error("Missing OPENAI_API_KEY")]
    MissingApiKey,

    #[error("{0}")]
    Upstream(#[from] anyhow::Error),
}

impl TranslateError {
    pub fn status(&self) -> StatusCode {
        match self {
            TranslateError::MissingText => StatusCode::BAD_REQUEST,
            TranslateError::MissingApiKey | TranslateError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        match &self {
            TranslateError::MissingText => warn!("Translate request rejected: missing text"),
            TranslateError::MissingApiKey => error!("Translate request failed: no API key configured"),
            TranslateError::Upstream(e) => error!("Translate error: {e}"),
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
