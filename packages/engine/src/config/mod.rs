//! Engine configuration
//!
//! Configuration is an explicit immutable value. It is built once by the
//! caller and passed by reference into the operations that need it; nothing
//! in the engine reads configuration through global state.

pub mod validation;

use serde::Deserialize;

pub use validation::{ConfigDefaults, ConfigResult, ConfigValidator, ConfigurationError, Validator};

/// JSON canonicalizer settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JsonConfig {
    /// Indent width used when a caller asks for `indent <= 0`
    pub default_indent: usize,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            default_indent: ConfigDefaults::DEFAULT_JSON_INDENT,
        }
    }
}

impl JsonConfig {
    /// Resolve a caller-supplied indent against the configured default.
    /// Positive indents are capped at [`ConfigDefaults::MAX_JSON_INDENT`].
    #[must_use]
    pub fn resolve_indent(&self, indent: i64) -> usize {
        if indent <= 0 {
            return self.default_indent;
        }

        usize::try_from(indent)
            .map_or(ConfigDefaults::MAX_JSON_INDENT, |n| n.min(ConfigDefaults::MAX_JSON_INDENT))
    }
}

impl Validator for JsonConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_range(
            self.default_indent,
            1,
            ConfigDefaults::MAX_JSON_INDENT,
            "json.default_indent",
        )
    }
}

/// Domain syntax validator settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DomainConfig {
    /// Minimum length of the ASCII-compatible form
    pub min_length: usize,
    /// Maximum length of the ASCII-compatible form
    pub max_length: usize,
    /// Maximum length of a single label
    pub max_label_length: usize,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            min_length: ConfigDefaults::DOMAIN_MIN_LENGTH,
            max_length: ConfigDefaults::DOMAIN_MAX_LENGTH,
            max_label_length: ConfigDefaults::LABEL_MAX_LENGTH,
        }
    }
}

impl Validator for DomainConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_range(
            self.max_label_length,
            1,
            ConfigDefaults::LABEL_MAX_LENGTH,
            "domain.max_label_length",
        )?;

        if self.min_length == 0 {
            return Err(ConfigurationError::InvalidParameter(
                "domain.min_length cannot be zero".to_string(),
            ));
        }

        if self.min_length > self.max_length {
            return Err(ConfigurationError::Conflict(format!(
                "domain.min_length ({}) exceeds domain.max_length ({})",
                self.min_length, self.max_length
            )));
        }

        Ok(())
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub json: JsonConfig,
    pub domain: DomainConfig,
}

impl EngineConfig {
    /// Create configuration that only accepts short, conventional host names
    #[must_use]
    pub fn strict() -> Self {
        Self {
            domain: DomainConfig {
                max_length: 253,
                ..DomainConfig::default()
            },
            ..Self::default()
        }
    }

    /// Load configuration from a JSON document; absent fields keep their defaults
    ///
    /// # Errors
    ///
    /// Returns `Unreadable` if the document is not valid JSON for this shape,
    /// or the validation error of the loaded values.
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        let config: EngineConfig = serde_json::from_str(text)
            .map_err(|e| ConfigurationError::Unreadable(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl Validator for EngineConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.json.validate()?;
        self.domain.validate()
    }
}
