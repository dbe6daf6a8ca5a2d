use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::SiteError;
use crate::domain::logger::Logger;
use crate::domain::page::model::{
    INDEX_PAGE, METADATA_FILE, NOT_FOUND_CONTENT, NOT_FOUND_PAGE, NOT_FOUND_TITLE, PageContext,
    PageMetadata, format_timestamp,
};
use crate::domain::page::repository::SiteRepository;
use crate::domain::page::template::render;
use crate::domain::page::use_cases::publish::{PublishSiteParams, PublishSiteUseCase};

pub struct PublishSiteUseCaseImpl {
    pub repository: Arc<dyn SiteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PublishSiteUseCase for PublishSiteUseCaseImpl {
    async fn prepare(&self) -> Result<(), SiteError> {
        self.repository.prepare().await?;
        self.logger.debug("Output directory ready");
        Ok(())
    }

    async fn execute(&self, params: PublishSiteParams) -> Result<Vec<String>, SiteError> {
        self.repository.prepare().await?;

        let index = render(&PageContext::new(
            params.title.as_str(),
            params.content.html.as_str(),
            params.provider,
            &params.generated_at,
        ));
        self.repository.write_page(INDEX_PAGE, &index).await?;
        self.logger.info(&format!("Generated HTML saved to {}", INDEX_PAGE));

        let not_found = render(&PageContext::new(
            NOT_FOUND_TITLE,
            NOT_FOUND_CONTENT,
            params.provider,
            &params.generated_at,
        ));
        self.repository.write_page(NOT_FOUND_PAGE, &not_found).await?;

        let metadata = PageMetadata {
            generated_at: format_timestamp(&params.generated_at),
            prompt: params.prompt,
            title: params.title,
            provider: params.provider,
            model: params.model,
            fallback: params.content.fallback,
        };
        self.repository.write_metadata(&metadata).await?;

        if metadata.fallback {
            self.logger.warn("Published fallback content because generation failed");
        }

        Ok(vec![
            INDEX_PAGE.to_string(),
            NOT_FOUND_PAGE.to_string(),
            METADATA_FILE.to_string(),
        ])
    }
}
