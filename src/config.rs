use std::env;

/// Chat model used for every translation request.
pub const MODEL: &str = "gpt-4o-mini";

/// Low temperature keeps medical terminology stable across calls.
pub const TEMPERATURE: f32 = 0.2;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Process-wide settings, read once at startup and immutable afterwards.
///
/// A missing `OPENAI_API_KEY` is not a startup error: the server still
/// comes up and each translate request reports the missing credential.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            base_url: env::var("OPENAI_BASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            host: "127.0.0.1".to_string(),
            port: 5000,
            static_dir: "static".to_string(),
        }
    }
}
