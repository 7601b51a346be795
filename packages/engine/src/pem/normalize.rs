//! Canonical 64-column PEM rendering

use super::kind::PemKind;
use crate::error::EngineResult;
use crate::error::constructors::{empty_body, empty_input};

/// Width of every body line except possibly the last
pub const LINE_WIDTH: usize = 64;

/// A single PEM block with its whitespace-free base64 body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PemBlock {
    kind: PemKind,
    body: String,
}

impl PemBlock {
    /// Build a block from text that has already been through
    /// [`unescape_line_endings`]
    ///
    /// # Errors
    ///
    /// Returns `EmptyBody` if nothing is left once whitespace is stripped.
    pub fn from_unescaped(kind: PemKind, text: &str) -> EngineResult<Self> {
        let body: String = extract_body(kind, text)
            .chars()
            .filter(|c| !matches!(c, ' ' | '\t' | '\n' | '\r'))
            .collect();

        if body.is_empty() {
            return Err(empty_body(kind.describe()));
        }

        Ok(Self { kind, body })
    }

    #[must_use]
    pub fn kind(&self) -> PemKind {
        self.kind
    }

    /// Base64 body without any line breaks
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Render header, body wrapped at [`LINE_WIDTH`], and footer, each line
    /// terminated by `\n`
    #[must_use]
    pub fn to_pem(&self) -> String {
        let header = self.kind.header();
        let footer = self.kind.footer();
        let lines = self.body.len().div_ceil(LINE_WIDTH);
        let mut out =
            String::with_capacity(header.len() + footer.len() + self.body.len() + lines + 2);

        out.push_str(header);
        out.push('\n');
        for (i, ch) in self.body.chars().enumerate() {
            if i > 0 && i % LINE_WIDTH == 0 {
                out.push('\n');
            }
            out.push(ch);
        }
        out.push('\n');
        out.push_str(footer);
        out.push('\n');
        out
    }
}

impl std::fmt::Display for PemBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_pem())
    }
}

/// Turn every line-ending representation into a bare `\n`.
///
/// Order matters for doubly escaped input: the escaped CRLF pair must go
/// before the lone escaped LF, and literal CRLF before bare CR.
#[must_use]
pub fn unescape_line_endings(text: &str) -> String {
    text.replace("\\r\\n", "\n")
        .replace("\\n", "\n")
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}

/// Normalize arbitrarily escaped certificate or CSR text into canonical PEM
///
/// # Errors
///
/// Returns `EmptyInput` for blank input and `EmptyBody` if no base64
/// content remains.
pub fn normalize_pem(kind: PemKind, text: &str) -> EngineResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(empty_input(kind.describe()));
    }

    let block = PemBlock::from_unescaped(kind, &unescape_line_endings(trimmed))?;
    tracing::debug!(
        kind = kind.label(),
        body_len = block.body().len(),
        "normalized PEM block"
    );
    Ok(block.to_pem())
}

/// Shorthand for [`normalize_pem`] with [`PemKind::Certificate`]
///
/// # Errors
///
/// See [`normalize_pem`].
pub fn normalize_certificate(text: &str) -> EngineResult<String> {
    normalize_pem(PemKind::Certificate, text)
}

/// Shorthand for [`normalize_pem`] with [`PemKind::CertificateRequest`]
///
/// # Errors
///
/// See [`normalize_pem`].
pub fn normalize_csr(text: &str) -> EngineResult<String> {
    normalize_pem(PemKind::CertificateRequest, text)
}

/// Text between the first header and the footer after it. Without both
/// markers the whole input is the body.
fn extract_body(kind: PemKind, text: &str) -> &str {
    let header = kind.header();
    let footer = kind.footer();

    let Some(header_at) = text.find(header) else {
        tracing::warn!(kind = kind.label(), "PEM header missing, treating input as body");
        return text;
    };
    let start = header_at + header.len();

    let Some(footer_rel) = text[start..].find(footer) else {
        tracing::warn!(kind = kind.label(), "PEM footer missing, treating input as body");
        return text;
    };

    text[start..start + footer_rel].trim()
}
