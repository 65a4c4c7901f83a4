use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatClientError {
    #[error("invalid API key or no billing set up")]
    AuthFailed,

    #[error("API quota exhausted: {0}")]
    QuotaExhausted(String),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("model returned no choices")]
    EmptyResponse,
}
