use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::content::errors::ContentError;
use business::domain::content::model::ContentRequest;
use business::domain::content::services::ContentGeneratorService;

use crate::client::OpenAIClient;

const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that generates high-quality HTML content.";

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

pub struct ContentGeneratorOpenAI {
    client: OpenAIClient,
}

impl ContentGeneratorOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn build_body(request: &ContentRequest) -> serde_json::Value {
        json!({
            "model": request.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": request.enhanced_prompt()},
            ],
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        })
    }

    fn extract_text(response: ChatCompletionResponse) -> Result<String, ContentError> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(ContentError::EmptyResponse)
    }
}

#[async_trait]
impl ContentGeneratorService for ContentGeneratorOpenAI {
    async fn generate(&self, request: &ContentRequest) -> Result<String, ContentError> {
        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
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

        let data: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ContentError::InvalidResponse(e.to_string()))?;

        Self::extract_text(data)
    }
}
