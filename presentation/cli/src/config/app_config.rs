use super::output_config::OutputConfig;
use super::page_config::PageConfig;
use super::provider_config::{ConfigError, ProviderConfig};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub page: PageConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            provider: ProviderConfig::from_lookup(&lookup)?,
            page: PageConfig::from_lookup(&lookup),
            output: OutputConfig::from_lookup(&lookup),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::content::model::AiProvider;
    use std::path::PathBuf;

    #[test]
    fn should_assemble_config_from_single_lookup() {
        // Arrange
        let lookup = |key: &str| match key {
            "AI_PROVIDER" => Some("openai".to_string()),
            "OPENAI_API_KEY" => Some("sk-key".to_string()),
            "PAGE_TITLE" => Some("Daily Tech".to_string()),
            _ => None,
        };

        // Act
        let config = AppConfig::from_lookup(lookup).unwrap();

        // Assert
        assert_eq!(config.provider.provider, AiProvider::OpenAI);
        assert_eq!(config.page.title, "Daily Tech");
        assert_eq!(config.output.dir, PathBuf::from("public"));
    }

    #[test]
    fn should_propagate_missing_key() {
        let result = AppConfig::from_lookup(|_| None);

        assert!(matches!(
            result.unwrap_err(),
            ConfigError::MissingApiKey("ANTHROPIC_API_KEY")
        ));
    }
}
