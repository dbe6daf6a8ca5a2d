use async_trait::async_trait;

use crate::domain::errors::SiteError;

use super::model::PageMetadata;

/// Output port for the published static site.
#[async_trait]
pub trait SiteRepository: Send + Sync {
    /// Makes sure the output location exists before anything is written.
    async fn prepare(&self) -> Result<(), SiteError>;
    async fn write_page(&self, file_name: &str, html: &str) -> Result<(), SiteError>;
    async fn write_metadata(&self, metadata: &PageMetadata) -> Result<(), SiteError>;
}
