use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::content::errors::ContentError;
use crate::domain::content::model::{ContentRequest, GeneratedContent, strip_code_fence};
use crate::domain::content::services::ContentGeneratorService;
use crate::domain::content::use_cases::generate::{
    GenerateContentParams, GenerateContentUseCase,
};
use crate::domain::logger::Logger;

pub struct GenerateContentUseCaseImpl {
    pub generator: Arc<dyn ContentGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateContentUseCase for GenerateContentUseCaseImpl {
    async fn execute(&self, params: GenerateContentParams) -> GeneratedContent {
        self.logger.info(&format!("Generating content with prompt: {}", params.prompt));

        let request = ContentRequest::new(params.prompt, params.model);

        let result = self
            .generator
            .generate(&request)
            .await
            .map(|text| strip_code_fence(&text))
            .and_then(|html| {
                if html.is_empty() {
                    Err(ContentError::EmptyResponse)
                } else {
                    Ok(html)
                }
            });

        match result {
            Ok(html) => {
                self.logger.info(&format!("Generated {} bytes of content", html.len()));
                GeneratedContent::generated(html)
            }
            Err(err) => {
                self.logger.error(&format!("Error generating content: {}", err));
                GeneratedContent::fallback(&err.to_string())
            }
        }
    }
}
