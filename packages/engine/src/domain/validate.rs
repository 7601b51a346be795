//! Domain syntax validation
//!
//! Syntax only: nothing here resolves names or talks to the network.

use std::net::IpAddr;

use super::types::{DomainToken, DomainVerdict};
use crate::config::DomainConfig;
use crate::error::constructors::{empty_input, invalid_domain};
use crate::error::{EngineError, EngineResult};

const WILDCARD_PREFIX: &str = "*.";

/// Classifies tokens as IP literal, domain or invalid
#[derive(Debug, Clone, Default)]
pub struct DomainValidator {
    config: DomainConfig,
}

impl DomainValidator {
    #[must_use]
    pub fn new(config: DomainConfig) -> Self {
        Self { config }
    }

    /// Classify a token, folding every failure into [`DomainVerdict::Invalid`]
    #[must_use]
    pub fn classify(&self, text: &str) -> DomainVerdict {
        match self.verify(text) {
            Ok(verdict) => verdict,
            Err(e) => {
                tracing::debug!(token = text, reason = %e, "rejected domain token");
                DomainVerdict::Invalid {
                    reason: e.message().to_string(),
                }
            }
        }
    }

    /// Classify a token, reporting why it is invalid as an error
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for a blank token and `InvalidDomain` for every
    /// other syntax failure.
    pub fn verify(&self, text: &str) -> EngineResult<DomainVerdict> {
        let token = text.trim();
        if token.is_empty() {
            return Err(empty_input("domain"));
        }

        if let Ok(ip) = token.parse::<IpAddr>() {
            return Ok(DomainVerdict::ValidIp { ip });
        }

        self.verify_domain(token).map(DomainVerdict::ValidDomain)
    }

    /// Validate a non-IP token and decompose it by public-suffix rules
    ///
    /// # Errors
    ///
    /// Returns `InvalidDomain` naming the first failed check.
    pub fn verify_domain(&self, token: &str) -> EngineResult<DomainToken> {
        let (wildcard, name) = match token.strip_prefix(WILDCARD_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, token),
        };
        // fully qualified form
        let name = name.strip_suffix('.').unwrap_or(name);

        let ascii = idna::domain_to_ascii(name)
            .map_err(|e| invalid_domain(token, &format!("not representable as IDNA ({e:?})")))?;
        if ascii.ends_with('.') {
            return Err(invalid_domain(token, "empty label before the root"));
        }

        let len = ascii.len();
        if len < self.config.min_length || len > self.config.max_length {
            return Err(invalid_domain(
                token,
                &format!(
                    "length {len} outside {}..={}",
                    self.config.min_length, self.config.max_length
                ),
            ));
        }

        let (suffix, sld, trd) = split_by_public_suffix(&ascii)
            .ok_or_else(|| invalid_domain(token, "no registrable name under a public suffix"))?;

        self.check_label(token, sld)?;
        if let Some(trd) = trd {
            for label in trd.split('.') {
                self.check_label(token, label)?;
            }
        }

        Ok(DomainToken {
            suffix: suffix.to_string(),
            sld: sld.to_string(),
            trd: trd.map(str::to_string),
            wildcard,
            ascii,
        })
    }

    fn check_label(&self, token: &str, label: &str) -> Result<(), EngineError> {
        if label.is_empty() || label.len() > self.config.max_label_length {
            return Err(invalid_domain(
                token,
                &format!("label '{label}' must be 1..={} characters", self.config.max_label_length),
            ));
        }

        if !label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(invalid_domain(
                token,
                &format!("label '{label}' contains invalid characters"),
            ));
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(invalid_domain(
                token,
                &format!("label '{label}' cannot start or end with hyphen"),
            ));
        }

        Ok(())
    }
}

/// Split an ASCII name into (suffix, second-level label, remaining prefix).
/// `None` if the name is itself a public suffix.
fn split_by_public_suffix(ascii: &str) -> Option<(&str, &str, Option<&str>)> {
    let domain = psl::domain(ascii.as_bytes())?;
    let domain_len = domain.as_bytes().len();
    let suffix_len = domain.suffix().as_bytes().len();

    let domain_start = ascii.len().checked_sub(domain_len)?;
    let sld_end = ascii.len().checked_sub(suffix_len + 1)?;

    let suffix = ascii.get(sld_end + 1..)?;
    let sld = ascii.get(domain_start..sld_end)?;
    let trd = match domain_start {
        0 => None,
        start => Some(ascii.get(..start - 1)?),
    };

    Some((suffix, sld, trd))
}

/// Classify one token with the default configuration
#[must_use]
pub fn validate_domain_token(text: &str) -> DomainVerdict {
    DomainValidator::default().classify(text)
}

/// Fallible form of [`validate_domain_token`]
///
/// # Errors
///
/// See [`DomainValidator::verify`].
pub fn verify_domain(text: &str) -> EngineResult<DomainVerdict> {
    DomainValidator::default().verify(text)
}
