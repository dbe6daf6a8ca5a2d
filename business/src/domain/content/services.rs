use async_trait::async_trait;

use super::errors::ContentError;
use super::model::ContentRequest;

/// Service port for generating HTML body content from a prompt.
///
/// Implementations call a hosted AI API once and return the raw text of the
/// first answer, without the outer document structure.
#[async_trait]
pub trait ContentGeneratorService: Send + Sync {
    async fn generate(&self, request: &ContentRequest) -> Result<String, ContentError>;
}
