//! Error constructor functions
//!
//! Shorthands used across the engine so call sites read as a sentence.

use super::types::EngineError;

pub(crate) fn empty_input(what: &str) -> EngineError {
    EngineError::EmptyInput(format!("{what} is empty"))
}

pub(crate) fn empty_body(label: &str) -> EngineError {
    EngineError::EmptyBody(format!("{label} body is empty after stripping whitespace"))
}

pub(crate) fn incomplete_block(label: &str, offset: usize) -> EngineError {
    EngineError::IncompleteBlock(format!(
        "{label} header at byte {offset} has no matching footer"
    ))
}

pub(crate) fn no_blocks_found(label: &str) -> EngineError {
    EngineError::NoBlocksFound(format!("no {label} blocks found in input"))
}

pub(crate) fn decode_error(reason: impl std::fmt::Display) -> EngineError {
    EngineError::DecodeError(reason.to_string())
}

pub(crate) fn parse_error(reason: impl std::fmt::Display) -> EngineError {
    EngineError::ParseError(reason.to_string())
}

pub(crate) fn invalid_json(reason: impl std::fmt::Display) -> EngineError {
    EngineError::InvalidJson(reason.to_string())
}

pub(crate) fn invalid_domain(domain: &str, reason: &str) -> EngineError {
    EngineError::InvalidDomain(format!("domain ({domain}) is invalid: {reason}"))
}
