//! Client configuration: embedded TOML defaults + one environment override.

use serde::Deserialize;

use crate::error::{ApiError, Result};

/// Environment variable that points the dashboard at another service origin.
pub const BASE_URL_ENV: &str = "SALESBOARD_API_BASE";

const EMBEDDED: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config/client.toml"));

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin of the analysis service, without a trailing slash.
    pub base_url: String,
    pub report_filename: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            report_filename: "business_insight_report.pdf".to_string(),
        }
    }
}

impl ClientConfig {
    /// Embedded defaults with the environment override applied. Falls back to
    /// [`ClientConfig::default`] if the embedded file is unusable.
    pub fn load() -> Self {
        let base = Self::from_toml_str(EMBEDDED).unwrap_or_else(|err| {
            tracing::warn!("embedded client config rejected ({err}); using defaults");
            Self::default()
        });
        base.with_base_override(base_url_override())
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).map_err(|err| ApiError::Config {
            details: err.to_string(),
        })?;
        config.validated()
    }

    /// Replace the base URL when `value` is a non-blank http(s) origin.
    /// Anything else is logged and the current origin is kept.
    pub fn with_base_override(mut self, value: Option<String>) -> Self {
        self.base_url = self.base_url.trim_end_matches('/').to_string();
        let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
            return self;
        };
        let candidate = Self {
            base_url: url,
            ..self.clone()
        };
        match candidate.validated() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{BASE_URL_ENV} ignored ({err}); keeping {}", self.base_url);
                self
            }
        }
    }

    /// Absolute URL for an `/api/...` path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn validated(mut self) -> Result<Self> {
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ApiError::Config {
                details: format!("base_url must be an http(s) origin, got `{}`", self.base_url),
            });
        }
        if self.report_filename.trim().is_empty() {
            return Err(ApiError::Config {
                details: "report_filename must not be empty".to_string(),
            });
        }
        Ok(self)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn base_url_override() -> Option<String> {
    std::env::var(BASE_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn base_url_override() -> Option<String> {
    option_env!("SALESBOARD_API_BASE").map(str::to_string)
}
