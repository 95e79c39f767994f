//! Locating the leaf certificate inside a client certificate file.
//!
//! Issued certificate files often carry a preamble before the PEM block:
//! `openssl x509 -text` output, stray comments, or an intermediate placed
//! ahead of the leaf. Only the text from the first certificate header
//! onward is kept.

use crate::error::CoreError;

/// Header line that starts a PEM certificate block, including its newline.
pub const CERTIFICATE_MARKER: &str = "-----BEGIN CERTIFICATE-----\n";

/// Byte offset of the first [`CERTIFICATE_MARKER`] in `text`, if any.
pub fn find_certificate_start(text: &str) -> Option<usize> {
    text.find(CERTIFICATE_MARKER)
}

/// Drop everything before the first certificate header.
///
/// Text without a header is returned unchanged.
pub fn trim_to_certificate(text: &str) -> &str {
    match find_certificate_start(text) {
        Some(start) => &text[start..],
        None => text,
    }
}

/// What to do with a client certificate that has no header line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkerPolicy {
    /// Keep the certificate text unchanged.
    #[default]
    Passthrough,
    /// Reject it with [`CoreError::MissingCertificateMarker`].
    Require,
}

impl MarkerPolicy {
    /// Trim `text` to its first certificate, honoring this policy when the
    /// header is absent.
    pub fn apply<'a>(&self, text: &'a str) -> Result<&'a str, CoreError> {
        match (find_certificate_start(text), self) {
            (Some(start), _) => Ok(&text[start..]),
            (None, MarkerPolicy::Passthrough) => Ok(text),
            (None, MarkerPolicy::Require) => Err(CoreError::MissingCertificateMarker),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAF: &str = "-----BEGIN CERTIFICATE-----\nABCD\n-----END CERTIFICATE-----\n";

    #[test]
    fn test_trim_drops_preamble() {
        let input = format!("garbage\n{}", LEAF);
        assert_eq!(trim_to_certificate(&input), LEAF);
    }

    #[test]
    fn test_trim_keeps_text_already_at_header() {
        assert_eq!(trim_to_certificate(LEAF), LEAF);
        assert_eq!(find_certificate_start(LEAF), Some(0));
    }

    #[test]
    fn test_trim_without_header_is_identity() {
        let input = "not a certificate at all\n";
        assert_eq!(find_certificate_start(input), None);
        assert_eq!(trim_to_certificate(input), input);
        assert_eq!(trim_to_certificate(""), "");
    }

    #[test]
    fn test_trim_keeps_from_first_of_several_blocks() {
        let intermediate = "-----BEGIN CERTIFICATE-----\nINTER\n-----END CERTIFICATE-----\n";
        let input = format!("Certificate:\n    Data: ...\n{}{}", intermediate, LEAF);
        assert_eq!(trim_to_certificate(&input), format!("{}{}", intermediate, LEAF));
    }

    #[test]
    fn test_header_needs_trailing_newline() {
        let input = "prefix -----BEGIN CERTIFICATE-----";
        assert_eq!(trim_to_certificate(input), input);

        let crlf = "prefix\r\n-----BEGIN CERTIFICATE-----\r\nABCD\r\n";
        assert_eq!(trim_to_certificate(crlf), crlf);
    }

    #[test]
    fn test_policy_default_is_passthrough() {
        assert_eq!(MarkerPolicy::default(), MarkerPolicy::Passthrough);
    }

    #[test]
    fn test_require_policy_rejects_missing_header() {
        let err = MarkerPolicy::Require.apply("KEY-DATA").unwrap_err();
        assert!(matches!(err, CoreError::MissingCertificateMarker));

        let input = format!("junk\n{}", LEAF);
        assert_eq!(MarkerPolicy::Require.apply(&input).unwrap(), LEAF);
    }

    #[test]
    fn test_passthrough_policy_keeps_missing_header() {
        assert_eq!(MarkerPolicy::Passthrough.apply("CERT").unwrap(), "CERT");
    }
}
