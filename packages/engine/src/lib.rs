//! # Certdesk Engine
//!
//! Text normalization, extraction and validation for the three shapes of
//! data exchanged during certificate lifecycle work: PEM certificates and
//! certificate signing requests, JSON payloads embedded in prose, and
//! domain/IP tokens.
//!
//! ## Features
//!
//! - **PEM normalization** of text with literal CRLF, escaped `\r\n`/`\n`
//!   or missing header lines into canonical 64-column PEM
//! - **Chain splitting** that is all-or-nothing and never rescans a block
//! - **Certificate metadata** (subject, issuer, validity, serial, version,
//!   CA flag) decoded with `x509-parser`
//! - **JSON extraction** of the first balanced value with an escape-aware
//!   scanner, then order- and precision-preserving re-serialization
//! - **Domain validation** with IDNA conversion and public-suffix
//!   decomposition, syntax only
//!
//! Every operation is a pure, synchronous transform: no I/O, no shared
//! state, safe to call from any number of threads.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod certificate;
pub mod config;
pub mod domain;
pub mod error;
pub mod json;
pub mod pem;

pub mod prelude;

pub use certificate::{CertificateRecord, extract_certificate_metadata, split_chain_with_metadata};
pub use config::{DomainConfig, EngineConfig, JsonConfig};
pub use domain::{
    DomainCheck, DomainToken, DomainValidator, DomainVerdict, validate_domain_list,
    validate_domain_token, verify_domain,
};
pub use error::{EngineError, EngineResult, ErrorKind};
pub use json::{JsonValue, extract_json, format_json, format_json_with, minify_json};
pub use pem::{
    PemBlock, PemKind, normalize_certificate, normalize_csr, normalize_pem, split_chain,
    toggle_line_escapes,
};
