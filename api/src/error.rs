//! Error taxonomy for calls against the analysis service.

use thiserror::Error;

/// Shared `Result` alias for the client.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Everything that can go wrong between issuing a request and holding a
/// usable, mapped response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {details}")]
    Transport {
        endpoint: &'static str,
        details: String,
    },

    #[error("{endpoint} returned {status}: {detail}")]
    ServiceRejection {
        endpoint: &'static str,
        status: u16,
        detail: String,
    },

    #[error("{0}")]
    Application(String),

    #[error("{endpoint} returned no rows")]
    EmptyResult { endpoint: &'static str },

    #[error("could not decode {endpoint} response: {details}")]
    Decode {
        endpoint: &'static str,
        details: String,
    },

    #[error("invalid client configuration: {details}")]
    Config { details: String },
}

/// Coarse classification surfaced to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TransportFailure,
    ServiceRejection,
    ApplicationError,
    EmptyResult,
    Decode,
    Config,
}

impl ApiError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } => ErrorKind::TransportFailure,
            Self::ServiceRejection { .. } => ErrorKind::ServiceRejection,
            Self::Application(_) => ErrorKind::ApplicationError,
            Self::EmptyResult { .. } => ErrorKind::EmptyResult,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Config { .. } => ErrorKind::Config,
        }
    }

    /// The part of the error worth showing to a person: the service's own
    /// wording when it gave one, the full display string otherwise.
    pub fn detail(&self) -> String {
        match self {
            Self::ServiceRejection { detail, .. } => detail.clone(),
            Self::Application(message) => message.clone(),
            other => other.to_string(),
        }
    }

    pub(crate) fn transport(endpoint: &'static str, err: reqwest::Error) -> Self {
        Self::Transport {
            endpoint,
            details: err.to_string(),
        }
    }

    pub(crate) fn decode(endpoint: &'static str, err: serde_json::Error) -> Self {
        Self::Decode {
            endpoint,
            details: err.to_string(),
        }
    }
}

/// Build a [`ApiError::ServiceRejection`] from a non-2xx status and its body.
///
/// The service answers failures with `{"detail": "..."}`; anything else falls
/// back to the raw body, then to the status reason phrase.
pub fn rejection_from(
    endpoint: &'static str,
    status: u16,
    reason: Option<&str>,
    body: &str,
) -> ApiError {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("detail").cloned())
        .map(|detail| match detail {
            serde_json::Value::String(text) => text,
            other => other.to_string(),
        })
        .filter(|text| !text.trim().is_empty())
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| reason.unwrap_or("request rejected").to_string());

    ApiError::ServiceRejection {
        endpoint,
        status,
        detail,
    }
}
