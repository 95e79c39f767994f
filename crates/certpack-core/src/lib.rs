//! certpack Core Types
//!
//! This crate contains the pure pieces of a credential bundle with no
//! dependencies on:
//! - Filesystem access
//! - Command-line parsing
//! - Logging setup
//!
//! Everything that touches the disk lives in `certpack-cli`.

pub mod bundle;
pub mod error;
pub mod ids;
pub mod marker;

// Re-export commonly used types
pub use bundle::CredentialBundle;
pub use error::CoreError;
pub use ids::ClientId;
pub use marker::{find_certificate_start, trim_to_certificate, MarkerPolicy, CERTIFICATE_MARKER};
