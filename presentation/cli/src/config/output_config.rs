use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Where the static site is written.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl OutputConfig {
    /// Environment variables:
    /// - OUTPUT_DIR: Output directory (default: "public")
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let dir = lookup("OUTPUT_DIR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());

        Self {
            dir: PathBuf::from(dir),
        }
    }
}
