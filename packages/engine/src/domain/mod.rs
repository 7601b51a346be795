//! Domain and IP token validation

pub mod list;
pub mod types;
pub mod validate;

pub use list::{split_domain_list, validate_domain_list};
pub use types::{DomainCheck, DomainToken, DomainVerdict};
pub use validate::{DomainValidator, validate_domain_token, verify_domain};
