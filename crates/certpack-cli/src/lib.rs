//! certpack CLI Library
//!
//! Reads a client's CA certificate, private key and client certificate from
//! disk and writes them back out as a single `<client>.certs.json` bundle.

pub mod config;
pub mod error;
pub mod provision;

pub use config::Config;
pub use error::ProvisionError;
pub use provision::Provisioner;
