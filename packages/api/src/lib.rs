//! # Certdesk
//!
//! Operator toolkit for certificate lifecycle paperwork: normalize pasted
//! CSRs and certificates, split and inspect chains, pretty-print or minify
//! JSON dug out of log lines, and sanity-check domain lists.
//!
//! The [`Toolkit`] is the request-serving contract without a server: every
//! route takes a JSON body and answers with the
//! `{"ok":..,"data":..,"error":{"code":..,"message":..}}` envelope. The pure
//! transforms live in [`certdesk_engine`], re-exported here as [`engine`].
//!
//! ```no_run
//! use certdesk::Toolkit;
//!
//! let toolkit = Toolkit::default();
//! let reply = toolkit.dispatch("json/minify", r#"{"json":"log: {\"a\": 1}"}"#);
//! assert_eq!(reply, r#"{"ok":true,"data":{"minified":"{\"a\":1}"}}"#);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod assets;
pub mod config;
pub mod dto;
pub mod envelope;
pub mod routes;
pub mod runs;
pub mod service;

pub use certdesk_engine as engine;

pub use assets::{AssetBundle, AssetError};
pub use config::AppConfig;
pub use envelope::{Envelope, ErrorBody, ErrorCode};
pub use routes::Route;
pub use runs::{RunPath, RunPathError, validate_run_path};
pub use service::Toolkit;

// Engine operations callers reach for most
pub use certdesk_engine::{
    CertificateRecord, DomainCheck, DomainVerdict, EngineConfig, EngineError, ErrorKind,
    PemKind, extract_certificate_metadata, format_json, minify_json, normalize_certificate,
    normalize_csr, normalize_pem, split_chain, split_chain_with_metadata, validate_domain_token,
};
