//! Splitting concatenated PEM blocks

use super::kind::PemKind;
use super::normalize::{normalize_pem, unescape_line_endings};
use crate::error::EngineResult;
use crate::error::constructors::{incomplete_block, no_blocks_found};

/// Split text holding zero or more concatenated blocks of one kind into
/// individually normalized PEM blocks, in order of first occurrence.
///
/// The call is all-or-nothing: a header without a footer after it fails the
/// whole split and no partial list is returned.
///
/// # Errors
///
/// Returns `IncompleteBlock` for a header with no footer after it,
/// `NoBlocksFound` if no header occurs at all, or any error of
/// [`normalize_pem`] raised by an individual block.
pub fn split_chain(kind: PemKind, text: &str) -> EngineResult<Vec<String>> {
    let text = unescape_line_endings(text.trim());
    let header = kind.header();
    let footer = kind.footer();

    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(header_rel) = text[cursor..].find(header) {
        let start = cursor + header_rel;
        let body_start = start + header.len();

        let Some(footer_rel) = text[body_start..].find(footer) else {
            return Err(incomplete_block(kind.label(), start));
        };
        let end = body_start + footer_rel + footer.len();

        blocks.push(normalize_pem(kind, &text[start..end])?);
        // never rescan inside a consumed block
        cursor = end;
    }

    if blocks.is_empty() {
        return Err(no_blocks_found(kind.label()));
    }

    tracing::debug!(kind = kind.label(), count = blocks.len(), "split PEM chain");
    Ok(blocks)
}
