//! Route table

use crate::envelope::ErrorCode;

/// Every route the toolkit serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    CsrFormat,
    CertNormalize,
    CertSplit,
    CertDetails,
    JsonFormat,
    JsonMinify,
    DomainCheck,
    TextToggleEscapes,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::CsrFormat,
        Route::CertNormalize,
        Route::CertSplit,
        Route::CertDetails,
        Route::JsonFormat,
        Route::JsonMinify,
        Route::DomainCheck,
        Route::TextToggleEscapes,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Route::CsrFormat => "csr/format",
            Route::CertNormalize => "cert/normalize",
            Route::CertSplit => "cert/split",
            Route::CertDetails => "cert/details",
            Route::JsonFormat => "json/format",
            Route::JsonMinify => "json/minify",
            Route::DomainCheck => "domain/check",
            Route::TextToggleEscapes => "text/toggle-escapes",
        }
    }

    /// Look up a route by path. Surrounding slashes are ignored.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim().trim_matches('/');
        Self::ALL.into_iter().find(|route| route.as_str() == path)
    }

    /// Code reported when the engine rejects the request's content.
    /// `None` for routes whose operation cannot fail.
    #[must_use]
    pub fn failure_code(self) -> Option<ErrorCode> {
        match self {
            Route::CsrFormat => Some(ErrorCode::InvalidCsr),
            Route::CertNormalize | Route::CertSplit | Route::CertDetails => {
                Some(ErrorCode::InvalidCert)
            }
            Route::JsonFormat | Route::JsonMinify => Some(ErrorCode::InvalidJson),
            Route::DomainCheck | Route::TextToggleEscapes => None,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
