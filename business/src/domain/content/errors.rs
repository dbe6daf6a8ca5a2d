#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content.request_failed: {0}")]
    RequestFailed(String),
    #[error("content.api_error: {status} {body}")]
    ApiError { status: u16, body: String },
    #[error("content.invalid_response: {0}")]
    InvalidResponse(String),
    #[error("content.empty_response")]
    EmptyResponse,
}
