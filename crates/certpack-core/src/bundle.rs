//! The credential bundle handed to a device at provisioning time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;
use crate::ids::ClientId;
use crate::marker::MarkerPolicy;

/// CA certificate, private key and client certificate for one client.
///
/// Field contents are never validated: empty or malformed PEM is carried
/// as-is. Serializes to a JSON object with the keys `clientId`, `caCert`,
/// `privateKey` and `clientCert`, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialBundle {
    /// Client the credentials belong to.
    pub client_id: ClientId,

    /// CA certificate (PEM), verbatim.
    pub ca_cert: String,

    /// Client private key (PEM), verbatim.
    pub private_key: String,

    /// Client certificate (PEM), starting at its first certificate header.
    pub client_cert: String,
}

impl CredentialBundle {
    /// Create a bundle from already prepared fields.
    pub fn new(
        client_id: ClientId,
        ca_cert: impl Into<String>,
        private_key: impl Into<String>,
        client_cert: impl Into<String>,
    ) -> Self {
        Self {
            client_id,
            ca_cert: ca_cert.into(),
            private_key: private_key.into(),
            client_cert: client_cert.into(),
        }
    }

    /// Create a bundle from raw file contents, trimming the client
    /// certificate to its first certificate block.
    pub fn assemble(
        client_id: ClientId,
        ca_cert: String,
        private_key: String,
        client_cert: &str,
        policy: MarkerPolicy,
    ) -> Result<Self, CoreError> {
        let client_cert = policy.apply(client_cert)?;
        Ok(Self::new(client_id, ca_cert, private_key, client_cert))
    }

    /// Compact JSON encoding.
    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a bundle previously produced by [`CredentialBundle::to_json`].
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for CredentialBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "clientId: {}", self.client_id)?;
        writeln!(f, "caCert:\n{}", self.ca_cert.trim_end())?;
        writeln!(f, "privateKey:\n{}", self.private_key.trim_end())?;
        write!(f, "clientCert:\n{}", self.client_cert.trim_end())
    }
}
