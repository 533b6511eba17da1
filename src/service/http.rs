//! HTTP transport for Code Engine API calls

use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder, StatusCode};

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Truncate a response body for logging and drop control characters.
pub(crate) fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut end = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..end], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| c.is_control(), "")
}

/// A successful response, body not yet decoded.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// Thin wrapper over `reqwest` that turns non-2xx answers into
/// [`Error::Api`].
#[derive(Clone, Debug)]
pub(crate) struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if config.disable_ssl_verification {
            tracing::warn!("TLS certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an existing `reqwest` client (custom proxies, timeouts, ...).
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// The underlying `reqwest` client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Send a prepared request and read the whole body.
    pub async fn send(&self, request: RequestBuilder, operation_id: &str) -> Result<RawResponse> {
        let response = request.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        if !status.is_success() {
            // Only the sanitized/truncated body is logged
            tracing::error!(
                operation = operation_id,
                "API error: {} - {}",
                status,
                sanitize_for_log(&body)
            );
            return Err(Error::api(status.as_u16(), headers, &body));
        }

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_short_body_unchanged() {
        assert_eq!(sanitize_for_log(r#"{"error":"x"}"#), r#"{"error":"x"}"#);
    }

    #[test]
    fn test_sanitize_truncates_long_body() {
        let body = "a".repeat(500);
        let out = sanitize_for_log(&body);
        assert!(out.starts_with(&"a".repeat(200)));
        assert!(out.contains("[truncated, 500 bytes total]"));
    }

    #[test]
    fn test_sanitize_respects_char_boundaries() {
        let body = "é".repeat(150);
        let out = sanitize_for_log(&body);
        assert!(out.contains("[truncated, 300 bytes total]"));
    }

    #[test]
    fn test_sanitize_strips_control_chars() {
        assert_eq!(sanitize_for_log("line1\nline2\u{1b}[0m"), "line1line2[0m");
    }
}
