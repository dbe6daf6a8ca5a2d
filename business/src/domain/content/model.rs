use serde::Serialize;

/// Hosted AI API used to generate the page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    Anthropic,
    OpenAI,
}

impl AiProvider {
    /// Parses the provider selector leniently: `openai` (any case) picks OpenAI,
    /// anything else falls back to Anthropic.
    pub fn from_selector(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("openai") {
            AiProvider::OpenAI
        } else {
            AiProvider::Anthropic
        }
    }

    /// Human readable name shown in the page badges and footer.
    pub fn display_name(&self) -> &'static str {
        match self {
            AiProvider::Anthropic => "Claude",
            AiProvider::OpenAI => "OpenAI GPT-4",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            AiProvider::Anthropic => "claude-3-5-sonnet-20241022",
            AiProvider::OpenAI => "gpt-4o",
        }
    }

    /// Extra CSS class for the "Powered by" badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            AiProvider::Anthropic => "",
            AiProvider::OpenAI => "openai",
        }
    }

    /// Environment variable holding the API key for this provider.
    pub fn api_key_var(&self) -> &'static str {
        match self {
            AiProvider::Anthropic => "ANTHROPIC_API_KEY",
            AiProvider::OpenAI => "OPENAI_API_KEY",
        }
    }
}

impl std::fmt::Display for AiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AiProvider::Anthropic => write!(f, "anthropic"),
            AiProvider::OpenAI => write!(f, "openai"),
        }
    }
}

pub const DEFAULT_MAX_TOKENS: u32 = 4000;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// A single generation request sent to a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRequest {
    pub prompt: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl ContentRequest {
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// The user prompt followed by the formatting instructions shared by all providers.
    pub fn enhanced_prompt(&self) -> String {
        format!(
            r#"{}

Please generate rich, engaging HTML content. Use a variety of HTML elements including:
- Headings (h2, h3)
- Paragraphs
- Lists (ordered and unordered)
- Code blocks where appropriate
- Blockquotes for important points

Make the content informative, well-structured, and visually appealing.
Return only the HTML content without the outer HTML structure."#,
            self.prompt.trim()
        )
    }
}

/// HTML body content ready to be placed in the page template.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedContent {
    pub html: String,
    /// True when the provider call failed and placeholder content was used instead.
    pub fallback: bool,
}

impl GeneratedContent {
    pub fn generated(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            fallback: false,
        }
    }

    pub fn fallback(error: &str) -> Self {
        Self {
            html: format!(
                r#"
<h2>Welcome to AI Generated Content</h2>
<p>An error occurred while generating content. This is fallback content.</p>
<p>Error details: {}</p>
<h3>About This Page</h3>
<p>This page is automatically generated using GitHub Actions and AI APIs.</p>
"#,
                error
            ),
            fallback: true,
        }
    }
}

/// Removes a Markdown code fence wrapping the whole answer, e.g. "```html ... ```".
/// Text that is not entirely fenced, or that holds several fenced blocks, is returned
/// trimmed but otherwise unchanged.
pub fn strip_code_fence(text: &str) -> String {
    let trimmed = text.trim();

    regex::Regex::new(r"^```[A-Za-z0-9_-]*[ \t]*\r?\n([\s\S]*?)\s*```$")
        .ok()
        .and_then(|re| re.captures(trimmed))
        .and_then(|caps| caps.get(1))
        .map(|body| body.as_str())
        .filter(|body| !body.lines().any(|line| line.trim_start().starts_with("```")))
        .map(|body| body.trim().to_string())
        .unwrap_or_else(|| trimmed.to_string())
}
