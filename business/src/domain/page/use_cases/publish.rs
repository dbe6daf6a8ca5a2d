use async_trait::async_trait;
use chrono::{DateTime, Local};

use crate::domain::content::model::{AiProvider, GeneratedContent};
use crate::domain::errors::SiteError;

pub struct PublishSiteParams {
    pub title: String,
    pub prompt: String,
    pub provider: AiProvider,
    pub model: String,
    pub content: GeneratedContent,
    pub generated_at: DateTime<Local>,
}

#[async_trait]
pub trait PublishSiteUseCase: Send + Sync {
    /// Makes sure the output location is usable, before any content is generated.
    async fn prepare(&self) -> Result<(), SiteError>;

    /// Returns the names of the files written, in write order.
    async fn execute(&self, params: PublishSiteParams) -> Result<Vec<String>, SiteError>;
}
