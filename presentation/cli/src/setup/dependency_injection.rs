use std::sync::Arc;

use anthropic::client::AnthropicClient;
use anthropic::content_generator::ContentGeneratorAnthropic;
use logger::TracingLogger;
use openai::client::OpenAIClient;
use openai::content_generator::ContentGeneratorOpenAI;
use site::filesystem::SiteRepositoryFs;

use business::application::content::generate::GenerateContentUseCaseImpl;
use business::application::page::publish::PublishSiteUseCaseImpl;
use business::domain::content::model::AiProvider;
use business::domain::content::services::ContentGeneratorService;
use business::domain::content::use_cases::generate::GenerateContentUseCase;
use business::domain::page::use_cases::publish::PublishSiteUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub generate_content: Arc<dyn GenerateContentUseCase>,
    pub publish_site: Arc<dyn PublishSiteUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_generator(config, Self::content_generator(config))
    }

    /// Wires the use cases around an already built generator.
    pub fn with_generator(
        config: &AppConfig,
        generator: Arc<dyn ContentGeneratorService>,
    ) -> Self {
        let site_repository = Arc::new(SiteRepositoryFs::new(config.output.dir.clone()));

        let generate_content = Arc::new(GenerateContentUseCaseImpl {
            generator,
            logger: Arc::new(TracingLogger::new("generate")),
        });
        let publish_site = Arc::new(PublishSiteUseCaseImpl {
            repository: site_repository,
            logger: Arc::new(TracingLogger::new("publish")),
        });

        Self {
            generate_content,
            publish_site,
        }
    }

    fn content_generator(config: &AppConfig) -> Arc<dyn ContentGeneratorService> {
        let api_key = config.provider.api_key.clone();
        match config.provider.provider {
            AiProvider::Anthropic => Arc::new(ContentGeneratorAnthropic::new(
                AnthropicClient::new(api_key),
            )),
            AiProvider::OpenAI => Arc::new(ContentGeneratorOpenAI::new(OpenAIClient::new(api_key))),
        }
    }
}
