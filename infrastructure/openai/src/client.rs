use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Shared OpenAI HTTP client configuration.
pub struct OpenAIClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl OpenAIClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}
