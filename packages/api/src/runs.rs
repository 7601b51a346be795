//! Path guard for files produced by the external runner
//!
//! The runner stores each invocation's files under `<base>/<run id>/`. A
//! caller asks for a file by run id and file name; both come straight from
//! the client and are checked here before anything joins them onto a path.

use std::path::Path;

use crate::envelope::ErrorCode;

/// Rejected run file request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunPathError {
    #[error("runId and name are required")]
    MissingSegment,
    #[error("invalid path: {0} contains '..'")]
    Traversal(String),
    #[error("invalid path: {0} contains a backslash")]
    Backslash(String),
    #[error("invalid path: {0} is absolute")]
    Absolute(String),
}

impl RunPathError {
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        ErrorCode::BadRequest
    }
}

/// Validated run file location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPath<'a> {
    pub run_id: &'a str,
    pub name: &'a str,
}

impl RunPath<'_> {
    /// `<run id>/<name>` with forward slashes, for the runner to join onto
    /// its base directory
    #[must_use]
    pub fn relative_path(&self) -> String {
        format!("{}/{}", self.run_id.trim_end_matches('/'), self.name)
    }
}

/// Check both segments of a run file request
///
/// # Errors
///
/// Returns `MissingSegment` if either segment is empty, otherwise the first
/// unsafe construct found in `run_id` then `name`.
pub fn validate_run_path<'a>(run_id: &'a str, name: &'a str) -> Result<RunPath<'a>, RunPathError> {
    if run_id.is_empty() || name.is_empty() {
        return Err(RunPathError::MissingSegment);
    }

    for segment in [run_id, name] {
        check_segment(segment)?;
    }

    Ok(RunPath { run_id, name })
}

fn check_segment(segment: &str) -> Result<(), RunPathError> {
    if segment.contains("..") {
        return Err(RunPathError::Traversal(segment.to_string()));
    }
    if segment.contains('\\') {
        return Err(RunPathError::Backslash(segment.to_string()));
    }
    if segment.starts_with('/') || Path::new(segment).is_absolute() {
        return Err(RunPathError::Absolute(segment.to_string()));
    }
    Ok(())
}
