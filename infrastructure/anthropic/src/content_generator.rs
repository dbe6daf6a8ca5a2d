use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::content::errors::ContentError;
use business::domain::content::model::ContentRequest;
use business::domain::content::services::ContentGeneratorService;

use crate::client::{API_VERSION, AnthropicClient};

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

pub struct ContentGeneratorAnthropic {
    client: AnthropicClient,
}

impl ContentGeneratorAnthropic {
    pub fn new(client: AnthropicClient) -> Self {
        Self { client }
    }

    fn build_body(request: &ContentRequest) -> serde_json::Value {
        json!({
            "model": request.model,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
            "messages": [
                {"role": "user", "content": request.enhanced_prompt()},
            ],
        })
    }

    /// Text of the first text block; tool or thinking blocks are skipped.
    fn extract_text(response: MessagesResponse) -> Result<String, ContentError> {
        response
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(ContentError::EmptyResponse)
    }
}

#[async_trait]
impl ContentGeneratorService for ContentGeneratorAnthropic {
    async fn generate(&self, request: &ContentRequest) -> Result<String, ContentError> {
        let response = self
            .client
            .client
            .post(self.client.messages_url())
            .header("x-api-key", &self.client.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&Self::build_body(request))
            .send()
            .await
            .map_err(|e| ContentError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContentError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let data: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ContentError::InvalidResponse(e.to_string()))?;

        Self::extract_text(data)
    }
}
