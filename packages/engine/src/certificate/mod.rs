//! Certificate metadata extraction

pub mod parser;
pub mod types;

pub use parser::{extract_certificate_metadata, split_chain_with_metadata};
pub use types::CertificateRecord;
