//! Client identifier newtype and the file names derived from it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied client identifier.
///
/// Kept verbatim: it is both the logical name written into the bundle and
/// the stem of every file name associated with the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    /// Create a new ClientId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Name of the private key file, `<id>.key`.
    pub fn key_file_name(&self) -> String {
        format!("{}.key", self.0)
    }

    /// Name of the client certificate file, `<id>.crt`.
    pub fn cert_file_name(&self) -> String {
        format!("{}.crt", self.0)
    }

    /// Name of the bundle written on output, `<id>.certs.json`.
    pub fn bundle_file_name(&self) -> String {
        format!("{}.certs.json", self.0)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ClientId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ClientId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_file_names() {
        let id = ClientId::new("device42");
        assert_eq!(id.key_file_name(), "device42.key");
        assert_eq!(id.cert_file_name(), "device42.crt");
        assert_eq!(id.bundle_file_name(), "device42.certs.json");
    }

    #[test]
    fn test_id_display() {
        let id = ClientId::from("test-123");
        assert_eq!(format!("{}", id), "test-123");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ClientId::new("device1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"device1\"");
    }
}
