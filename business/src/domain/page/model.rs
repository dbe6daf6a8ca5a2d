use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::content::model::AiProvider;

pub const INDEX_PAGE: &str = "index.html";
pub const NOT_FOUND_PAGE: &str = "404.html";
pub const METADATA_FILE: &str = "metadata.json";

pub const NOT_FOUND_TITLE: &str = "404 - Page Not Found";
pub const NOT_FOUND_CONTENT: &str = "<h2>Page Not Found</h2><p>The page you're looking for doesn't exist.</p><p><a href='/'>Return to Home</a></p>";

/// Long-form date shown in the header badge, e.g. "October 18, 2026".
pub fn format_date(at: &DateTime<Local>) -> String {
    at.format("%B %d, %Y").to_string()
}

/// Local ISO-8601 timestamp with microseconds and no offset.
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Values substituted into the page template.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContext {
    pub title: String,
    pub content: String,
    pub date: String,
    pub timestamp: String,
    pub provider_class: String,
    pub provider_name: String,
}

impl PageContext {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        provider: AiProvider,
        at: &DateTime<Local>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            date: format_date(at),
            timestamp: format_timestamp(at),
            provider_class: provider.badge_class().to_string(),
            provider_name: provider.display_name().to_string(),
        }
    }

    /// Looks up a template variable by name.
    pub fn value(&self, key: &str) -> Option<&str> {
        match key {
            "title" => Some(&self.title),
            "content" => Some(&self.content),
            "date" => Some(&self.date),
            "timestamp" => Some(&self.timestamp),
            "provider_class" => Some(&self.provider_class),
            "provider_name" => Some(&self.provider_name),
            _ => None,
        }
    }
}

/// Contents of `metadata.json`, kept for tracking published runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMetadata {
    pub generated_at: String,
    pub prompt: String,
    pub title: String,
    pub provider: AiProvider,
    pub model: String,
    pub fallback: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 10, 18, 9, 5, 30)
            .single()
            .unwrap()
    }

    #[test]
    fn should_format_long_date() {
        assert_eq!(format_date(&fixed_time()), "October 18, 2026");
    }

    #[test]
    fn should_format_timestamp_with_microseconds() {
        assert_eq!(format_timestamp(&fixed_time()), "2026-10-18T09:05:30.000000");
    }

    #[test]
    fn should_build_context_for_openai() {
        let context = PageContext::new("Title", "<p>Body</p>", AiProvider::OpenAI, &fixed_time());

        assert_eq!(context.value("provider_class"), Some("openai"));
        assert_eq!(context.value("provider_name"), Some("OpenAI GPT-4"));
        assert_eq!(context.value("date"), Some("October 18, 2026"));
        assert_eq!(context.value("unknown"), None);
    }

    #[test]
    fn should_serialize_metadata_fields() {
        let metadata = PageMetadata {
            generated_at: "2026-10-18T09:05:30.000000".to_string(),
            prompt: "Write about Rust".to_string(),
            title: "Rust".to_string(),
            provider: AiProvider::Anthropic,
            model: "claude-3-5-sonnet-20241022".to_string(),
            fallback: false,
        };

        let value = serde_json::to_value(&metadata).unwrap();

        assert_eq!(value["provider"], "anthropic");
        assert_eq!(value["model"], "claude-3-5-sonnet-20241022");
        assert_eq!(value["fallback"], false);
        assert_eq!(value["generated_at"], "2026-10-18T09:05:30.000000");
    }
}
