//! Certificate record types

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Descriptive fields decoded from one certificate block.
///
/// Records are recomputed on every call and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    /// Normalized PEM block the record was decoded from
    pub pem: String,
    /// Subject distinguished name
    pub subject: String,
    /// Issuer distinguished name
    pub issuer: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    /// Serial number in decimal, at full precision
    pub serial_number: String,
    /// X.509 structure version, 1-based (v3 is `3`)
    pub version: u32,
    /// `cA` flag of the basic constraints extension, `false` when absent
    #[serde(rename = "isCA")]
    pub is_ca: bool,
}

impl CertificateRecord {
    /// Whether the validity window is well formed
    #[must_use]
    pub fn has_ordered_validity(&self) -> bool {
        self.not_before <= self.not_after
    }
}
