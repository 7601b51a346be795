//! Embedded JSON extraction and canonical re-serialization

pub mod extract;
pub mod format;
pub mod value;

pub use extract::{BoundaryScanner, Delimiter, ScanState, ScanStep, extract_json, find_json_bounds};
pub use format::{format_json, format_json_with, minify_json};
pub use value::JsonValue;
