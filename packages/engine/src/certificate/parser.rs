//! Certificate decoding
//!
//! PEM envelope decoding goes through the `pem` crate and the DER structure
//! through `x509-parser`; no ASN.1 is parsed by hand here.

use chrono::{DateTime, Utc};
use x509_parser::parse_x509_certificate;
use x509_parser::time::ASN1Time;

use super::types::CertificateRecord;
use crate::error::EngineResult;
use crate::error::constructors::{decode_error, parse_error};
use crate::pem::{PemKind, split_chain};

/// Decode one normalized CERTIFICATE block into its descriptive fields
///
/// # Errors
///
/// Returns `DecodeError` if the PEM envelope is malformed or is not a
/// `CERTIFICATE` block, and `ParseError` if the DER structure is not a
/// well-formed certificate.
pub fn extract_certificate_metadata(pem_text: &str) -> EngineResult<CertificateRecord> {
    let envelope =
        ::pem::parse(pem_text).map_err(|e| decode_error(format!("failed to decode PEM block: {e}")))?;

    let expected = PemKind::Certificate.label();
    if envelope.tag() != expected {
        return Err(decode_error(format!(
            "expected {expected} block, found {}",
            envelope.tag()
        )));
    }

    let (rest, cert) = parse_x509_certificate(envelope.contents())
        .map_err(|e| parse_error(format!("X.509 parsing failed: {e}")))?;
    if !rest.is_empty() {
        return Err(parse_error(format!(
            "{} trailing bytes after certificate",
            rest.len()
        )));
    }

    let is_ca = cert
        .basic_constraints()
        .map_err(|e| parse_error(format!("invalid basic constraints: {e}")))?
        .is_some_and(|ext| ext.value.ca);

    let validity = cert.validity();
    let record = CertificateRecord {
        pem: pem_text.to_string(),
        subject: cert.subject().to_string(),
        issuer: cert.issuer().to_string(),
        not_before: to_utc(&validity.not_before, "notBefore")?,
        not_after: to_utc(&validity.not_after, "notAfter")?,
        serial_number: cert.tbs_certificate.serial.to_string(),
        version: cert.version().0 + 1,
        is_ca,
    };

    tracing::debug!(
        subject = %record.subject,
        serial = %record.serial_number,
        is_ca = record.is_ca,
        "decoded certificate"
    );
    Ok(record)
}

/// Split a certificate chain and decode every block.
///
/// Fails the whole call on the first block that does not decode.
///
/// # Errors
///
/// Any error of [`split_chain`] or [`extract_certificate_metadata`].
pub fn split_chain_with_metadata(text: &str) -> EngineResult<Vec<CertificateRecord>> {
    split_chain(PemKind::Certificate, text)?
        .iter()
        .map(|block| extract_certificate_metadata(block))
        .collect()
}

fn to_utc(time: &ASN1Time, field: &str) -> EngineResult<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(time.timestamp(), 0)
        .ok_or_else(|| parse_error(format!("{field} is outside the representable range")))
}
