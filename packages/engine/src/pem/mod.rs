//! PEM normalization
//!
//! Converts certificate and CSR text pasted with any mix of literal CRLF,
//! backslash-escaped `\r\n`/`\n`, or missing header lines into canonical
//! 64-column PEM, and splits concatenated chains block by block.

pub mod chain;
pub mod escape;
pub mod kind;
pub mod normalize;

pub use chain::split_chain;
pub use escape::toggle_line_escapes;
pub use kind::PemKind;
pub use normalize::{
    LINE_WIDTH, PemBlock, normalize_certificate, normalize_csr, normalize_pem,
    unescape_line_endings,
};
