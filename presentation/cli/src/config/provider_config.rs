use business::domain::content::model::AiProvider;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} not set")]
    MissingApiKey(&'static str),
}

/// Which AI API to call and with which credentials.
#[derive(Clone, PartialEq)]
pub struct ProviderConfig {
    pub provider: AiProvider,
    pub api_key: String,
    pub model: String,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}

impl ProviderConfig {
    /// Environment variables:
    /// - AI_PROVIDER: "openai" or "anthropic" (default: "anthropic", case-insensitive)
    /// - ANTHROPIC_API_KEY / OPENAI_API_KEY: Key for the selected provider (required)
    /// - AI_MODEL: Overrides the provider's default model
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingApiKey`] if the selected provider's key is unset or blank.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let provider = AiProvider::from_selector(&lookup("AI_PROVIDER").unwrap_or_default());

        let api_key = lookup(provider.api_key_var())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey(provider.api_key_var()))?;

        let model = lookup("AI_MODEL")
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| provider.default_model().to_string());

        Ok(Self {
            provider,
            api_key,
            model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn should_default_to_anthropic() {
        let config =
            ProviderConfig::from_lookup(lookup_from(&[("ANTHROPIC_API_KEY", "ant-key")])).unwrap();

        assert_eq!(config.provider, AiProvider::Anthropic);
        assert_eq!(config.api_key, "ant-key");
        assert_eq!(config.model, "claude-3-5-sonnet-20241022");
    }

    #[test]
    fn should_select_openai_with_its_key() {
        let config = ProviderConfig::from_lookup(lookup_from(&[
            ("AI_PROVIDER", "OpenAI"),
            ("OPENAI_API_KEY", "sk-key"),
            ("ANTHROPIC_API_KEY", "ant-key"),
        ]))
        .unwrap();

        assert_eq!(config.provider, AiProvider::OpenAI);
        assert_eq!(config.api_key, "sk-key");
        assert_eq!(config.model, "gpt-4o");
    }

    #[test]
    fn should_fail_when_selected_key_is_missing() {
        let result = ProviderConfig::from_lookup(lookup_from(&[
            ("AI_PROVIDER", "openai"),
            ("ANTHROPIC_API_KEY", "ant-key"),
        ]));

        let err = result.unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey("OPENAI_API_KEY"));
        assert_eq!(err.to_string(), "OPENAI_API_KEY not set");
    }

    #[test]
    fn should_treat_blank_key_as_missing() {
        let result = ProviderConfig::from_lookup(lookup_from(&[("ANTHROPIC_API_KEY", "  ")]));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingApiKey("ANTHROPIC_API_KEY")
        );
    }

    #[test]
    fn should_override_model() {
        let config = ProviderConfig::from_lookup(lookup_from(&[
            ("ANTHROPIC_API_KEY", "ant-key"),
            ("AI_MODEL", "claude-sonnet-4-5"),
        ]))
        .unwrap();

        assert_eq!(config.model, "claude-sonnet-4-5");
    }

    #[test]
    fn should_not_print_api_key_in_debug_output() {
        let config =
            ProviderConfig::from_lookup(lookup_from(&[("ANTHROPIC_API_KEY", "ant-secret")])).unwrap();

        assert!(!format!("{:?}", config).contains("ant-secret"));
    }
}
