//! Response envelope shared by every route
//!
//! Success is `{"ok":true,"data":...}`, failure is
//! `{"ok":false,"error":{"code":...,"message":...}}`.

use serde::Serialize;

/// Client-facing error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    BadRequest,
    InvalidCert,
    InvalidCsr,
    InvalidJson,
    NotFound,
    Internal,
}

impl ErrorCode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "bad_request",
            ErrorCode::InvalidCert => "invalid_cert",
            ErrorCode::InvalidCsr => "invalid_csr",
            ErrorCode::InvalidJson => "invalid_json",
            ErrorCode::NotFound => "not_found",
            ErrorCode::Internal => "internal",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error half of the envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

/// Result of one route, ready to serialize
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

// Emitted verbatim if an envelope cannot be serialized
const SERIALIZATION_FAILURE: &str =
    r#"{"ok":false,"error":{"code":"internal","message":"response serialization failed"}}"#;

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn fail(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(ErrorBody {
                code,
                message: message.into(),
            }),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Error code of a failed envelope
    #[must_use]
    pub fn code(&self) -> Option<ErrorCode> {
        self.error.as_ref().map(|e| e.code)
    }

    /// Convert into a `Result`, the shape Rust callers usually want
    ///
    /// # Errors
    ///
    /// Returns the error body of a failed envelope.
    pub fn into_result(self) -> Result<T, ErrorBody> {
        match (self.data, self.error) {
            (Some(data), None) => Ok(data),
            (_, Some(error)) => Err(error),
            (None, None) => Err(ErrorBody {
                code: ErrorCode::Internal,
                message: "envelope carries neither data nor error".to_string(),
            }),
        }
    }
}

impl<T: Serialize> Envelope<T> {
    /// Serialize to the wire form
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to serialize response envelope");
            SERIALIZATION_FAILURE.to_string()
        })
    }
}
