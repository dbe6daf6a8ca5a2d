/// Errors raised while writing the static site.
/// Use code-style identifiers for all error variants, with the underlying cause appended.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("site.output_dir_unavailable: {0}")]
    OutputDirUnavailable(String),
    #[error("site.write_failed: {0}")]
    WriteFailed(String),
    #[error("site.serialization")]
    Serialization,
}

impl SiteError {
    pub fn output_dir_unavailable(cause: impl std::fmt::Display) -> Self {
        SiteError::OutputDirUnavailable(cause.to_string())
    }
    pub fn write_failed(cause: impl std::fmt::Display) -> Self {
        SiteError::WriteFailed(cause.to_string())
    }
    pub fn serialization() -> Self {
        SiteError::Serialization
    }
}
