//! Pretty-printing and minifying embedded JSON

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::extract::extract_json;
use super::value::JsonValue;
use crate::config::JsonConfig;
use crate::error::EngineResult;
use crate::error::constructors::{empty_input, invalid_json};

/// Pretty-print the first JSON value found in `text`.
///
/// `indent <= 0` falls back to two spaces. Indents above 64 are capped at 64.
///
/// # Errors
///
/// Returns `EmptyInput` for blank input and `InvalidJson` if the extracted
/// text does not parse.
pub fn format_json(text: &str, indent: i64) -> EngineResult<String> {
    format_json_with(text, indent, &JsonConfig::default())
}

/// [`format_json`] with the fallback indent taken from `config`
///
/// # Errors
///
/// See [`format_json`].
pub fn format_json_with(text: &str, indent: i64, config: &JsonConfig) -> EngineResult<String> {
    let value = parse_embedded(text)?;
    let indent = vec![b' '; config.resolve_indent(indent)];

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    value.serialize(&mut serializer).map_err(invalid_json)?;

    finish(buf)
}

/// Re-serialize the first JSON value found in `text` with no whitespace
/// between tokens
///
/// # Errors
///
/// Returns `EmptyInput` for blank input and `InvalidJson` if the extracted
/// text does not parse.
pub fn minify_json(text: &str) -> EngineResult<String> {
    let value = parse_embedded(text)?;
    let buf = serde_json::to_vec(&value).map_err(invalid_json)?;
    finish(buf)
}

fn parse_embedded(text: &str) -> EngineResult<JsonValue> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(empty_input("input"));
    }

    let value = JsonValue::parse(extract_json(trimmed))?;
    tracing::debug!(root = value.type_name(), "parsed embedded JSON");
    Ok(value)
}

fn finish(buf: Vec<u8>) -> EngineResult<String> {
    let mut out = String::from_utf8(buf).map_err(invalid_json)?;
    let kept = out.trim_end_matches('\n').len();
    out.truncate(kept);
    Ok(out)
}
