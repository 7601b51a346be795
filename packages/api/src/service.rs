//! Toolkit service: maps route requests onto engine operations
//!
//! Typed methods return an [`Envelope`]; [`Toolkit::dispatch`] adds request
//! decoding and serialization for callers that only hold a route name and a
//! JSON body.

use std::sync::Arc;

use bytes::Bytes;
use certdesk_engine::config::{ConfigResult, Validator};
use certdesk_engine::pem::{PemKind, normalize_pem, split_chain};
use certdesk_engine::{
    DomainValidator, EngineError, format_json_with, minify_json, split_chain_with_metadata,
    toggle_line_escapes,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::dto::{
    CertChainRequest, CertDetailsResponse, DomainCheckRequest, DomainCheckResponse,
    FormatCsrRequest, FormatJsonRequest, FormatJsonResponse, MinifyJsonRequest,
    MinifyJsonResponse, NormalizeCertRequest, PemResponse, RequiredFields, RunFileResponse,
    SplitCertChainResponse, TextResponse, ToggleEscapesRequest, decode_request,
};
use crate::envelope::{Envelope, ErrorCode};
use crate::routes::Route;
use crate::runs::validate_run_path;

/// Stateless request handler over a shared configuration
#[derive(Debug, Clone)]
pub struct Toolkit {
    config: Arc<AppConfig>,
    domains: DomainValidator,
}

impl Default for Toolkit {
    fn default() -> Self {
        Self::assemble(Arc::new(AppConfig::default()))
    }
}

impl Toolkit {
    /// Build a toolkit over a validated configuration
    ///
    /// # Errors
    ///
    /// Returns the first validation error of `config`.
    pub fn new(config: AppConfig) -> ConfigResult<Self> {
        Self::from_shared(Arc::new(config))
    }

    /// [`Toolkit::new`] over a configuration shared with other handlers
    ///
    /// # Errors
    ///
    /// Returns the first validation error of `config`.
    pub fn from_shared(config: Arc<AppConfig>) -> ConfigResult<Self> {
        if let Err(e) = config.validate() {
            tracing::warn!(error = %e, "rejected toolkit configuration");
            return Err(e);
        }
        Ok(Self::assemble(config))
    }

    fn assemble(config: Arc<AppConfig>) -> Self {
        let domains = DomainValidator::new(config.engine.domain.clone());
        Self { config, domains }
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Preloaded page or template by file name
    #[must_use]
    pub fn asset(&self, name: &str) -> Option<Bytes> {
        self.config.assets.get(name)
    }

    pub fn format_csr(&self, request: &FormatCsrRequest) -> Envelope<PemResponse> {
        respond(
            Route::CsrFormat,
            normalize_pem(PemKind::CertificateRequest, &request.csr).map(|pem| PemResponse { pem }),
        )
    }

    pub fn normalize_cert(&self, request: &NormalizeCertRequest) -> Envelope<PemResponse> {
        respond(
            Route::CertNormalize,
            normalize_pem(PemKind::Certificate, &request.cert).map(|pem| PemResponse { pem }),
        )
    }

    pub fn split_cert_chain(&self, request: &CertChainRequest) -> Envelope<SplitCertChainResponse> {
        respond(
            Route::CertSplit,
            split_chain(PemKind::Certificate, &request.cert_chain).map(|certs| {
                SplitCertChainResponse {
                    count: certs.len(),
                    certs,
                }
            }),
        )
    }

    pub fn cert_details(&self, request: &CertChainRequest) -> Envelope<CertDetailsResponse> {
        respond(
            Route::CertDetails,
            split_chain_with_metadata(&request.cert_chain).map(|certs| CertDetailsResponse {
                count: certs.len(),
                certs,
            }),
        )
    }

    pub fn format_json(&self, request: &FormatJsonRequest) -> Envelope<FormatJsonResponse> {
        respond(
            Route::JsonFormat,
            format_json_with(&request.json, request.indent, &self.config.engine.json)
                .map(|formatted| FormatJsonResponse { formatted }),
        )
    }

    pub fn minify_json(&self, request: &MinifyJsonRequest) -> Envelope<MinifyJsonResponse> {
        respond(
            Route::JsonMinify,
            minify_json(&request.json).map(|minified| MinifyJsonResponse { minified }),
        )
    }

    pub fn check_domains(&self, request: &DomainCheckRequest) -> Envelope<DomainCheckResponse> {
        let results = self.domains.check_list(&request.domain);
        tracing::debug!(
            tokens = results.len(),
            valid = results.iter().filter(|c| c.verdict.is_valid()).count(),
            "checked domain list"
        );
        Envelope::ok(DomainCheckResponse { results })
    }

    pub fn toggle_escapes(&self, request: &ToggleEscapesRequest) -> Envelope<TextResponse> {
        Envelope::ok(TextResponse {
            text: toggle_line_escapes(&request.text),
        })
    }

    /// Check a run file request and report where the runner keeps the file
    pub fn run_file(&self, run_id: &str, name: &str) -> Envelope<RunFileResponse> {
        match validate_run_path(run_id, name) {
            Ok(path) => Envelope::ok(RunFileResponse {
                run_id: path.run_id.to_string(),
                name: path.name.to_string(),
                relative_path: path.relative_path(),
            }),
            Err(e) => {
                tracing::warn!(run_id, name, reason = %e, "rejected run file path");
                Envelope::fail(e.code(), e.to_string())
            }
        }
    }

    /// Serve one route from its raw JSON body and return the serialized envelope
    #[must_use]
    pub fn dispatch(&self, route: &str, body: &str) -> String {
        let Some(parsed) = Route::parse(route) else {
            tracing::debug!(route, "unknown route");
            return Envelope::<()>::fail(ErrorCode::NotFound, format!("no route for '{route}'"))
                .to_json();
        };

        match parsed {
            Route::CsrFormat => self.serve(parsed, body, Self::format_csr),
            Route::CertNormalize => self.serve(parsed, body, Self::normalize_cert),
            Route::CertSplit => self.serve(parsed, body, Self::split_cert_chain),
            Route::CertDetails => self.serve(parsed, body, Self::cert_details),
            Route::JsonFormat => self.serve(parsed, body, Self::format_json),
            Route::JsonMinify => self.serve(parsed, body, Self::minify_json),
            Route::DomainCheck => self.serve(parsed, body, Self::check_domains),
            Route::TextToggleEscapes => self.serve(parsed, body, Self::toggle_escapes),
        }
    }

    fn serve<Req, Resp>(
        &self,
        route: Route,
        body: &str,
        handler: fn(&Self, &Req) -> Envelope<Resp>,
    ) -> String
    where
        Req: DeserializeOwned + RequiredFields,
        Resp: Serialize,
    {
        match decode_request::<Req>(body) {
            Ok(request) => handler(self, &request).to_json(),
            Err(message) => {
                tracing::debug!(%route, %message, "malformed request body");
                Envelope::<Resp>::fail(ErrorCode::BadRequest, message).to_json()
            }
        }
    }
}

fn respond<T>(route: Route, outcome: Result<T, EngineError>) -> Envelope<T> {
    match outcome {
        Ok(data) => Envelope::ok(data),
        Err(e) => {
            tracing::debug!(%route, kind = %e.kind(), error = %e, "request rejected");
            let code = route.failure_code().unwrap_or(ErrorCode::Internal);
            Envelope::fail(code, e.to_string())
        }
    }
}
