//! Reads a client's credentials from disk and writes them as one bundle.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use certpack_core::{ClientId, CredentialBundle};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::ProvisionError;

/// Builds and writes [`CredentialBundle`]s according to a [`Config`].
pub struct Provisioner {
    config: Config,
}

/// Read a whole file as text. Invalid UTF-8 is replaced with U+FFFD.
fn read_text(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

impl Provisioner {
    /// Create a provisioner for the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Configuration this provisioner reads from and writes to.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read the CA certificate, private key and client certificate for
    /// `client_id` and assemble them.
    ///
    /// Input files are read one after another and never modified.
    pub fn load(&self, client_id: &ClientId) -> Result<CredentialBundle, ProvisionError> {
        let ca_path = self.config.ca_cert_path();
        let ca_cert = read_text(&ca_path).map_err(|source| ProvisionError::ReadCaCert {
            path: ca_path.clone(),
            source,
        })?;
        debug!(path = %ca_path.display(), bytes = ca_cert.len(), "Read CA certificate");

        let key_path = self.config.key_path(client_id);
        let private_key = read_text(&key_path).map_err(|source| ProvisionError::ReadKey {
            path: key_path.clone(),
            source,
        })?;
        debug!(path = %key_path.display(), bytes = private_key.len(), "Read private key");

        let cert_path = self.config.cert_path(client_id);
        let client_cert = read_text(&cert_path).map_err(|source| ProvisionError::ReadCert {
            path: cert_path.clone(),
            source,
        })?;
        debug!(path = %cert_path.display(), bytes = client_cert.len(), "Read client certificate");

        let bundle = CredentialBundle::assemble(
            client_id.clone(),
            ca_cert,
            private_key,
            &client_cert,
            self.config.marker_policy,
        )?;

        let trimmed = client_cert.len() - bundle.client_cert.len();
        if trimmed > 0 {
            debug!(
                client_id = %client_id,
                bytes = trimmed,
                "Dropped text ahead of the client certificate"
            );
        }

        Ok(bundle)
    }

    /// Write `bundle` as compact JSON, replacing any earlier bundle.
    pub fn write(&self, bundle: &CredentialBundle) -> Result<PathBuf, ProvisionError> {
        let path = self.config.bundle_path(&bundle.client_id);
        let json = bundle.to_json()?;

        fs::write(&path, json.as_bytes()).map_err(|source| ProvisionError::WriteBundle {
            path: path.clone(),
            source,
        })?;

        info!(client_id = %bundle.client_id, path = %path.display(), "Wrote credential bundle");
        Ok(path)
    }

    /// Load and write the bundle for `client_id`.
    ///
    /// Library entry point. The `certpack` binary calls [`Provisioner::load`]
    /// and [`Provisioner::write`] separately so it can echo the bundle in
    /// between.
    pub fn run(&self, client_id: &ClientId) -> Result<(CredentialBundle, PathBuf), ProvisionError> {
        let bundle = self.load(client_id)?;
        let path = self.write(&bundle)?;
        Ok((bundle, path))
    }
}
