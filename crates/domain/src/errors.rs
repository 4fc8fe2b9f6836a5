use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Invalid reaction: {0}")]
    InvalidReaction(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
