use anyhow::Context;
use chrono::Local;

use business::domain::content::model::AiProvider;
use business::domain::content::use_cases::generate::GenerateContentParams;
use business::domain::page::use_cases::publish::PublishSiteParams;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Runner;

impl Runner {
    /// Generates the page content and publishes the site. Returns the files written.
    pub async fn run(
        config: &AppConfig,
        container: &DependencyContainer,
    ) -> anyhow::Result<Vec<String>> {
        let provider = config.provider.provider;
        match provider {
            AiProvider::OpenAI => tracing::info!("Using OpenAI API for content generation"),
            AiProvider::Anthropic => {
                tracing::info!("Using Anthropic Claude API for content generation")
            }
        }

        container
            .publish_site
            .prepare()
            .await
            .with_context(|| format!("failed to prepare {}", config.output.dir.display()))?;

        let content = container
            .generate_content
            .execute(GenerateContentParams {
                prompt: config.page.prompt.clone(),
                model: config.provider.model.clone(),
            })
            .await;

        let written = container
            .publish_site
            .execute(PublishSiteParams {
                title: config.page.title.clone(),
                prompt: config.page.prompt.clone(),
                provider,
                model: config.provider.model.clone(),
                content,
                generated_at: Local::now(),
            })
            .await
            .with_context(|| format!("failed to publish site to {}", config.output.dir.display()))?;

        tracing::info!(
            output_dir = %config.output.dir.display(),
            files = ?written,
            "Content generation complete!"
        );

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    use anthropic::client::AnthropicClient;
    use anthropic::content_generator::ContentGeneratorAnthropic;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(output_dir: &Path) -> AppConfig {
        let dir = output_dir.display().to_string();
        AppConfig::from_lookup(move |key| match key {
            "ANTHROPIC_API_KEY" => Some("ant-test".to_string()),
            "PROMPT" => Some("Write about Rust".to_string()),
            "PAGE_TITLE" => Some("Rust Weekly".to_string()),
            "OUTPUT_DIR" => Some(dir.clone()),
            _ => None,
        })
        .unwrap()
    }

    fn container_for(config: &AppConfig, server: &MockServer) -> DependencyContainer {
        let client = AnthropicClient::with_base_url(
            config.provider.api_key.clone(),
            format!("{}/v1", server.uri()),
        );
        DependencyContainer::with_generator(
            config,
            Arc::new(ContentGeneratorAnthropic::new(client)),
        )
    }

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("pagegen-run-{}", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn should_publish_generated_page() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": [{"type": "text", "text": "```html\n<h2>Ownership</h2>\n```"}]
            })))
            .expect(1)
            .mount(&server)
            .await;
        let dir = scratch_dir();
        let config = config_for(&dir);

        let written = Runner::run(&config, &container_for(&config, &server))
            .await
            .unwrap();

        assert_eq!(written, vec!["index.html", "404.html", "metadata.json"]);

        let index = std::fs::read_to_string(dir.join("index.html")).unwrap();
        assert!(index.contains("<title>Rust Weekly</title>"));
        assert!(index.contains("<h2>Ownership</h2>"));
        assert!(!index.contains("```"));

        let not_found = std::fs::read_to_string(dir.join("404.html")).unwrap();
        assert!(not_found.contains("<title>404 - Page Not Found</title>"));

        let metadata: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.join("metadata.json")).unwrap())
                .unwrap();
        assert_eq!(metadata["prompt"], "Write about Rust");
        assert_eq!(metadata["title"], "Rust Weekly");
        assert_eq!(metadata["provider"], "anthropic");
        assert_eq!(metadata["model"], "claude-3-5-sonnet-20241022");
        assert_eq!(metadata["fallback"], false);
    }

    #[tokio::test]
    async fn should_publish_fallback_page_when_provider_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;
        let dir = scratch_dir();
        let config = config_for(&dir);

        Runner::run(&config, &container_for(&config, &server))
            .await
            .unwrap();

        let index = std::fs::read_to_string(dir.join("index.html")).unwrap();
        assert!(index.contains("This is fallback content."));
        assert!(index.contains("content.api_error: 500 internal error"));

        let metadata: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.join("metadata.json")).unwrap())
                .unwrap();
        assert_eq!(metadata["fallback"], true);
    }

    #[tokio::test]
    async fn should_fail_before_calling_provider_when_output_dir_is_unusable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": [{"type": "text", "text": "<p>x</p>"}]
            })))
            .expect(0)
            .mount(&server)
            .await;
        let blocker = scratch_dir();
        std::fs::write(&blocker, b"file in the way").unwrap();
        let config = config_for(&blocker);

        let result = Runner::run(&config, &container_for(&config, &server)).await;

        assert!(result.is_err());
    }
}
