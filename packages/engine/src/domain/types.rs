//! Domain token classification results

use std::net::IpAddr;

use serde::Serialize;

/// A syntactically valid domain, decomposed by public-suffix rules.
///
/// `example.co.uk` with prefix `a.b` splits into suffix `co.uk`, second-level
/// label `example` and third-level-and-beyond labels `a.b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainToken {
    /// ASCII-compatible (punycode) form, wildcard marker removed
    pub ascii: String,
    /// Whether the input carried a leading `*.`
    pub wildcard: bool,
    pub suffix: String,
    pub sld: String,
    /// Dot-joined labels left of the second-level label, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trd: Option<String>,
}

/// Outcome of classifying one token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DomainVerdict {
    ValidDomain(DomainToken),
    #[serde(rename = "validIP")]
    ValidIp { ip: IpAddr },
    Invalid { reason: String },
}

impl DomainVerdict {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !matches!(self, DomainVerdict::Invalid { .. })
    }

    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, DomainVerdict::ValidDomain(token) if token.wildcard)
    }
}

/// One entry of a batch check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainCheck {
    pub token: String,
    #[serde(flatten)]
    pub verdict: DomainVerdict,
}
