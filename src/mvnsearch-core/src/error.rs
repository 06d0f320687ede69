use serde_json::error::Category;

/// DecodeError is returned when a response body cannot be decoded
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Payload is not JSON, or ends early
    #[error("Malformed response payload: {0}")]
    Syntax(#[source] serde_json::Error),

    /// Payload is JSON but the envelope or a document has the wrong shape
    #[error("Unexpected response structure: {0}")]
    Structure(#[source] serde_json::Error),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => DecodeError::Structure(err),
            Category::Syntax | Category::Eof | Category::Io => DecodeError::Syntax(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
