//! Provisioning errors.

use std::path::PathBuf;

use certpack_core::CoreError;
use thiserror::Error;

/// Errors that abort a provisioning run.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// CA certificate could not be read.
    #[error("failed to read CA certificate '{}': {source}", .path.display())]
    ReadCaCert {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Client private key could not be read.
    #[error("failed to read private key '{}': {source}", .path.display())]
    ReadKey {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Client certificate could not be read.
    #[error("failed to read client certificate '{}': {source}", .path.display())]
    ReadCert {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Bundle file could not be written.
    #[error("failed to write bundle '{}': {source}", .path.display())]
    WriteBundle {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Trimming or serialization failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}
