//! PEM labels understood by the normalizer

use serde::{Deserialize, Serialize};

/// The PEM block kinds handled by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PemKind {
    /// `-----BEGIN CERTIFICATE-----`
    Certificate,
    /// `-----BEGIN CERTIFICATE REQUEST-----`
    CertificateRequest,
}

impl PemKind {
    /// Label as it appears between `BEGIN`/`END` and the dashes
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PemKind::Certificate => "CERTIFICATE",
            PemKind::CertificateRequest => "CERTIFICATE REQUEST",
        }
    }

    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            PemKind::Certificate => "-----BEGIN CERTIFICATE-----",
            PemKind::CertificateRequest => "-----BEGIN CERTIFICATE REQUEST-----",
        }
    }

    #[must_use]
    pub fn footer(self) -> &'static str {
        match self {
            PemKind::Certificate => "-----END CERTIFICATE-----",
            PemKind::CertificateRequest => "-----END CERTIFICATE REQUEST-----",
        }
    }

    /// Human readable name used in error messages
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            PemKind::Certificate => "certificate",
            PemKind::CertificateRequest => "csr",
        }
    }
}

impl std::fmt::Display for PemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
