//! Core domain errors.

use thiserror::Error;

/// Core domain errors for certpack.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Client certificate has no `-----BEGIN CERTIFICATE-----` line.
    #[error("client certificate does not contain a '-----BEGIN CERTIFICATE-----' line")]
    MissingCertificateMarker,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
