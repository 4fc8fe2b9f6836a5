use thiserror::Error;

/// Failures while reading, checking or writing the catalog client config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read catalog config '{path}': {reason}")]
    FileRead { path: String, reason: String },

    #[error("Cannot write catalog config '{path}': {reason}")]
    FileWrite { path: String, reason: String },

    #[error("Catalog config is not valid TOML: {0}")]
    Parse(String),

    #[error("Catalog config could not be serialized: {0}")]
    Serialize(String),

    #[error("Invalid catalog config: {0}")]
    Validation(String),
}
