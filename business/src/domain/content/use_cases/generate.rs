use async_trait::async_trait;

use crate::domain::content::model::GeneratedContent;

pub struct GenerateContentParams {
    pub prompt: String,
    pub model: String,
}

/// Generation never fails: provider errors are turned into fallback content.
#[async_trait]
pub trait GenerateContentUseCase: Send + Sync {
    async fn execute(&self, params: GenerateContentParams) -> GeneratedContent;
}
