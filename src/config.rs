//! Environment-driven configuration.

use std::path::PathBuf;

use secrecy::SecretString;

/// Configuration for the remote completion API.
///
/// The endpoint is any OpenAI-compatible chat-completions server; auth is a
/// bearer API key kept behind [`SecretString`] so it never lands in logs.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Base URL of the API, without the `/chat/completions` suffix.
    pub base_url: String,
    /// Model identifier to request.
    pub model: String,
    /// Bearer API key. `None` means inference commands are unavailable.
    pub api_key: Option<SecretString>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: None,
        }
    }
}

impl LlmConfig {
    /// Build config from the environment.
    ///
    /// `OPENAI_API_KEY` is honored first so existing shells keep working;
    /// `BIDSAW_API_KEY` is the tool-specific fallback.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = std::env::var("OPENAI_API_KEY")
            .or_else(|_| std::env::var("BIDSAW_API_KEY"))
            .ok()
            .filter(|k| !k.trim().is_empty())
            .map(SecretString::from);

        Self {
            base_url: std::env::var("BIDSAW_LLM_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.base_url),
            model: std::env::var("BIDSAW_LLM_MODEL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.model),
            api_key,
        }
    }
}

/// Default location of the user's price-list override.
///
/// `bidsaw estimate`/`infer` apply this file on top of the builtin catalog
/// when it exists and no `--prices` flag was given.
pub fn default_price_list_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bidsaw")
        .join("prices.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_openai() {
        let config = LlmConfig::default();
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn default_price_list_path_is_namespaced() {
        let path = default_price_list_path();
        assert!(path.ends_with("bidsaw/prices.csv"));
    }
}
