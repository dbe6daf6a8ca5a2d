use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::errors::SiteError;
use business::domain::page::model::{METADATA_FILE, PageMetadata};
use business::domain::page::repository::SiteRepository;

/// Writes the published site into a directory on the local filesystem.
pub struct SiteRepositoryFs {
    output_dir: PathBuf,
}

impl SiteRepositoryFs {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    async fn write_file(&self, file_name: &str, contents: &[u8]) -> Result<(), SiteError> {
        let path = self.output_dir.join(file_name);
        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| SiteError::write_failed(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), bytes = contents.len(), "file written");
        Ok(())
    }
}

#[async_trait]
impl SiteRepository for SiteRepositoryFs {
    async fn prepare(&self) -> Result<(), SiteError> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| {
                SiteError::output_dir_unavailable(format!("{}: {}", self.output_dir.display(), e))
            })
    }

    async fn write_page(&self, file_name: &str, html: &str) -> Result<(), SiteError> {
        self.write_file(file_name, html.as_bytes()).await
    }

    async fn write_metadata(&self, metadata: &PageMetadata) -> Result<(), SiteError> {
        let json =
            serde_json::to_string_pretty(metadata).map_err(|_| SiteError::serialization())?;
        self.write_file(METADATA_FILE, json.as_bytes()).await
    }
}
