//! Canonical imports for engine consumers

pub use crate::certificate::{CertificateRecord, extract_certificate_metadata, split_chain_with_metadata};
pub use crate::config::{EngineConfig, Validator};
pub use crate::domain::{DomainCheck, DomainValidator, DomainVerdict, validate_domain_token};
pub use crate::error::{EngineError, EngineResult, ErrorKind};
pub use crate::json::{extract_json, format_json, format_json_with, minify_json};
pub use crate::pem::{PemKind, normalize_pem, split_chain, toggle_line_escapes};
