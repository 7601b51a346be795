//! Request and response bodies of the routes

use certdesk_engine::{CertificateRecord, DomainCheck};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A request body with string fields that must be present and non-empty
pub trait RequiredFields {
    /// Name of the first required field that is empty
    fn missing_field(&self) -> Option<&'static str>;
}

fn first_empty(fields: &[(&'static str, &str)]) -> Option<&'static str> {
    fields
        .iter()
        .find(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
}

/// Decode a route body and check its required fields
///
/// # Errors
///
/// Returns the decoder's diagnostic, or `"<field> is required"`.
pub fn decode_request<T>(body: &str) -> Result<T, String>
where
    T: DeserializeOwned + RequiredFields,
{
    let request: T = serde_json::from_str(body).map_err(|e| e.to_string())?;
    match request.missing_field() {
        Some(field) => Err(format!("{field} is required")),
        None => Ok(request),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormatCsrRequest {
    pub csr: String,
}

impl RequiredFields for FormatCsrRequest {
    fn missing_field(&self) -> Option<&'static str> {
        first_empty(&[("csr", self.csr.as_str())])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NormalizeCertRequest {
    pub cert: String,
}

impl RequiredFields for NormalizeCertRequest {
    fn missing_field(&self) -> Option<&'static str> {
        first_empty(&[("cert", self.cert.as_str())])
    }
}

/// Body of `cert/split` and `cert/details`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertChainRequest {
    pub cert_chain: String,
}

impl RequiredFields for CertChainRequest {
    fn missing_field(&self) -> Option<&'static str> {
        first_empty(&[("certChain", self.cert_chain.as_str())])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormatJsonRequest {
    pub json: String,
    /// Spaces per level; `<= 0` or absent means the configured default
    #[serde(default)]
    pub indent: i64,
}

impl RequiredFields for FormatJsonRequest {
    fn missing_field(&self) -> Option<&'static str> {
        first_empty(&[("json", self.json.as_str())])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MinifyJsonRequest {
    pub json: String,
}

impl RequiredFields for MinifyJsonRequest {
    fn missing_field(&self) -> Option<&'static str> {
        first_empty(&[("json", self.json.as_str())])
    }
}

/// One token, or a comma/newline separated list of tokens
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DomainCheckRequest {
    pub domain: String,
}

impl RequiredFields for DomainCheckRequest {
    fn missing_field(&self) -> Option<&'static str> {
        first_empty(&[("domain", self.domain.as_str())])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToggleEscapesRequest {
    pub text: String,
}

impl RequiredFields for ToggleEscapesRequest {
    fn missing_field(&self) -> Option<&'static str> {
        first_empty(&[("text", self.text.as_str())])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PemResponse {
    pub pem: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitCertChainResponse {
    pub certs: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertDetailsResponse {
    pub certs: Vec<CertificateRecord>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatJsonResponse {
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinifyJsonResponse {
    pub minified: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainCheckResponse {
    pub results: Vec<DomainCheck>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextResponse {
    pub text: String,
}

/// Location of a produced run file, relative to the runner's base directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunFileResponse {
    pub run_id: String,
    pub name: String,
    pub relative_path: String,
}
