//! Provisioner configuration.

use std::path::{Path, PathBuf};

use certpack_core::{ClientId, MarkerPolicy};

/// Provisioner configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the CA certificate and the client's key and certificate.
    pub input_dir: PathBuf,

    /// Directory the bundle is written to.
    pub output_dir: PathBuf,

    /// File name of the CA certificate inside `input_dir`.
    pub ca_cert_file: String,

    /// Handling of a client certificate without a certificate header.
    pub marker_policy: MarkerPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            ca_cert_file: "ca.crt".to_string(),
            marker_policy: MarkerPolicy::Passthrough,
        }
    }
}

impl Config {
    /// Read inputs from and write the bundle to the same directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            input_dir: dir.as_ref().to_path_buf(),
            output_dir: dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Path of the CA certificate.
    pub fn ca_cert_path(&self) -> PathBuf {
        self.input_dir.join(&self.ca_cert_file)
    }

    /// Path of the client's private key.
    pub fn key_path(&self, client_id: &ClientId) -> PathBuf {
        self.input_dir.join(client_id.key_file_name())
    }

    /// Path of the client's certificate.
    pub fn cert_path(&self, client_id: &ClientId) -> PathBuf {
        self.input_dir.join(client_id.cert_file_name())
    }

    /// Path the client's bundle is written to.
    pub fn bundle_path(&self, client_id: &ClientId) -> PathBuf {
        self.output_dir.join(client_id.bundle_file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_are_relative_to_working_dir() {
        let config = Config::default();
        let id = ClientId::new("device42");

        assert_eq!(config.ca_cert_path(), Path::new("./ca.crt"));
        assert_eq!(config.key_path(&id), Path::new("./device42.key"));
        assert_eq!(config.cert_path(&id), Path::new("./device42.crt"));
        assert_eq!(config.bundle_path(&id), Path::new("./device42.certs.json"));
    }

    #[test]
    fn test_output_dir_only_moves_bundle() {
        let config = Config {
            output_dir: PathBuf::from("out"),
            ..Config::in_dir("in")
        };
        let id = ClientId::new("d");

        assert_eq!(config.key_path(&id), Path::new("in/d.key"));
        assert_eq!(config.bundle_path(&id), Path::new("out/d.certs.json"));
    }
}
