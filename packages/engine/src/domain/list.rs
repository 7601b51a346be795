//! Batch checks over operator-pasted domain lists

use super::types::DomainCheck;
use super::validate::DomainValidator;

/// Split a pasted list on commas, or on newlines when there is no comma.
///
/// Pieces are trimmed. Empty pieces are kept so they surface as invalid.
#[must_use]
pub fn split_domain_list(text: &str) -> Vec<&str> {
    let pieces: Vec<&str> = text.split(',').collect();
    let pieces = if pieces.len() < 2 {
        text.split('\n').collect()
    } else {
        pieces
    };

    pieces.into_iter().map(str::trim).collect()
}

impl DomainValidator {
    /// Classify every token of a pasted list, in input order
    #[must_use]
    pub fn check_list(&self, text: &str) -> Vec<DomainCheck> {
        split_domain_list(text)
            .into_iter()
            .map(|token| DomainCheck {
                token: token.to_string(),
                verdict: self.classify(token),
            })
            .collect()
    }
}

/// [`DomainValidator::check_list`] with the default configuration
#[must_use]
pub fn validate_domain_list(text: &str) -> Vec<DomainCheck> {
    DomainValidator::default().check_list(text)
}
