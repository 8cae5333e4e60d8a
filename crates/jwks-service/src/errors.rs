use std::path::PathBuf;
use thiserror::Error;

/// Startup errors raised while turning a PEM file into a JWKS body.
///
/// Every variant is fatal: the publication endpoint is never bound when one
/// of these is returned.
#[derive(Debug, Error)]
pub enum JwksError {
    #[error("Could not read public key pem file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Format error: {0}")]
    Format(String),

    #[error("Unsupported key type: {0}")]
    UnsupportedKeyType(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl JwksError {
    /// Bounded label used for metrics and log fields.
    pub fn category(&self) -> &'static str {
        match self {
            JwksError::FileRead { .. } => "file_read",
            JwksError::Format(_) => "format",
            JwksError::UnsupportedKeyType(_) => "unsupported_key_type",
            JwksError::Serialization(_) => "serialization",
        }
    }
}
