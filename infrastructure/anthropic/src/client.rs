use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
pub const API_VERSION: &str = "2023-06-01";

/// Shared Anthropic HTTP client configuration.
pub struct AnthropicClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl AnthropicClient {
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

    /// Returns the messages endpoint URL.
    pub fn messages_url(&self) -> String {
        format!("{}/messages", self.base_url)
    }
}
