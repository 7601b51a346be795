//! Engine error types
//!
//! Every operation returns one of these as a value. Malformed input is an
//! expected outcome, never a panic.

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Error kinds produced by the normalization, extraction and validation engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("input is empty: {0}")]
    EmptyInput(String),
    #[error("PEM body is empty: {0}")]
    EmptyBody(String),
    #[error("incomplete PEM block: {0}")]
    IncompleteBlock(String),
    #[error("no PEM blocks found: {0}")]
    NoBlocksFound(String),
    #[error("PEM decoding failed: {0}")]
    DecodeError(String),
    #[error("certificate parsing failed: {0}")]
    ParseError(String),
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
    #[error("invalid domain: {0}")]
    InvalidDomain(String),
}

/// Fieldless discriminant of [`EngineError`], handy for matching and for
/// mapping onto client-facing codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    EmptyBody,
    IncompleteBlock,
    NoBlocksFound,
    DecodeError,
    ParseError,
    InvalidJson,
    InvalidDomain,
}

impl ErrorKind {
    /// Stable snake-case name, used in logs
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "empty_input",
            ErrorKind::EmptyBody => "empty_body",
            ErrorKind::IncompleteBlock => "incomplete_block",
            ErrorKind::NoBlocksFound => "no_blocks_found",
            ErrorKind::DecodeError => "decode_error",
            ErrorKind::ParseError => "parse_error",
            ErrorKind::InvalidJson => "invalid_json",
            ErrorKind::InvalidDomain => "invalid_domain",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EngineError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::EmptyInput(_) => ErrorKind::EmptyInput,
            EngineError::EmptyBody(_) => ErrorKind::EmptyBody,
            EngineError::IncompleteBlock(_) => ErrorKind::IncompleteBlock,
            EngineError::NoBlocksFound(_) => ErrorKind::NoBlocksFound,
            EngineError::DecodeError(_) => ErrorKind::DecodeError,
            EngineError::ParseError(_) => ErrorKind::ParseError,
            EngineError::InvalidJson(_) => ErrorKind::InvalidJson,
            EngineError::InvalidDomain(_) => ErrorKind::InvalidDomain,
        }
    }

    /// Context message without the kind prefix
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            EngineError::EmptyInput(msg)
            | EngineError::EmptyBody(msg)
            | EngineError::IncompleteBlock(msg)
            | EngineError::NoBlocksFound(msg)
            | EngineError::DecodeError(msg)
            | EngineError::ParseError(msg)
            | EngineError::InvalidJson(msg)
            | EngineError::InvalidDomain(msg) => msg,
        }
    }
}
