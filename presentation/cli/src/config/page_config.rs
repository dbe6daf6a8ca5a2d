pub const DEFAULT_PROMPT: &str = "Generate an engaging HTML page about the latest in technology";
pub const DEFAULT_TITLE: &str = "AI Generated Content";

/// What to generate and how to title it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub prompt: String,
    pub title: String,
}

impl PageConfig {
    /// Environment variables:
    /// - PROMPT: Prompt sent to the provider
    /// - PAGE_TITLE: Title of the index page (default: "AI Generated Content")
    ///
    /// Empty values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            prompt: non_empty("PROMPT", DEFAULT_PROMPT),
            title: non_empty("PAGE_TITLE", DEFAULT_TITLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_unset_or_blank() {
        let config = PageConfig::from_lookup(|key| match key {
            "PAGE_TITLE" => Some("   ".to_string()),
            _ => None,
        });

        assert_eq!(config.prompt, DEFAULT_PROMPT);
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn should_read_prompt_and_title() {
        let config = PageConfig::from_lookup(|key| match key {
            "PROMPT" => Some("Explain ownership".to_string()),
            "PAGE_TITLE" => Some("Ownership".to_string()),
            _ => None,
        });

        assert_eq!(config.prompt, "Explain ownership");
        assert_eq!(config.title, "Ownership");
    }
}
