//! Error types for the Code Engine client.

use reqwest::header::HeaderMap;
use serde_json::Value;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced by the client.
///
/// Nothing is retried: every variant reaches the immediate caller as soon as
/// it happens. Argument errors are raised before any request is sent.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was absent or empty.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    /// An argument was present but not usable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A discriminated union was built from a payload whose discriminator
    /// is missing or names no known shape.
    #[error(
        "{family} must be one of its concrete shapes ({}), got {}",
        expected.join(", "),
        found.as_deref().unwrap_or("no discriminator")
    )]
    UnknownVariant {
        family: &'static str,
        found: Option<String>,
        expected: &'static [&'static str],
    },

    /// A payload did not match the model it was decoded into.
    #[error("failed to decode {model}: {source}")]
    Deserialize {
        model: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be encoded.
    #[error("failed to encode request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The service answered with a non-2xx status.
    #[error("API request failed ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        body: Option<Value>,
        headers: HeaderMap,
    },

    /// DNS, TLS, connection or body-read failure in the transport.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid service URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("authentication error: {0}")]
    Auth(String),

    /// A pager was asked for a page after it was exhausted.
    #[error("no more results available")]
    NoMoreResults,
}

impl Error {
    /// HTTP status of an [`Error::Api`], if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for an API error with status 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Build an [`Error::Api`] from a raw response, pulling the message out of
    /// the service's error envelope when there is one.
    pub(crate) fn api(status: u16, headers: HeaderMap, body: &str) -> Self {
        let body: Option<Value> = if body.trim().is_empty() {
            None
        } else {
            serde_json::from_str(body).ok()
        };
        let message = body
            .as_ref()
            .and_then(extract_error_message)
            .unwrap_or_else(|| default_message(status).to_string());

        Error::Api {
            status,
            message,
            body,
            headers,
        }
    }
}

/// Error envelopes seen from IBM Cloud services, most specific first:
/// `{"errors":[{"message":..}]}`, `{"error":..}`, `{"message":..}`,
/// `{"errorMessage":..}`.
fn extract_error_message(body: &Value) -> Option<String> {
    if let Some(message) = body
        .get("errors")
        .and_then(|v| v.as_array())
        .and_then(|errors| errors.first())
        .and_then(|first| first.get("message"))
        .and_then(|v| v.as_str())
    {
        return Some(message.to_string());
    }

    ["error", "message", "errorMessage"]
        .iter()
        .find_map(|key| body.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

fn default_message(status: u16) -> &'static str {
    match status {
        400 => "Bad request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not found",
        409 => "Conflict",
        412 => "Precondition failed",
        429 => "Too many requests",
        500..=599 => "Service unavailable",
        _ => "Unexpected response status",
    }
}
