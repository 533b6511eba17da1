//! Building one API operation into an HTTP request.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, IF_MATCH};
use reqwest::Method;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::ListOptions;

pub const SERVICE_NAME: &str = "code_engine";
pub const SERVICE_VERSION: &str = "V2";

pub(crate) const ANALYTICS_HEADER: &str = "X-IBMCloud-SDK-Analytics";
pub(crate) const JSON: &str = "application/json";
pub(crate) const MERGE_PATCH_JSON: &str = "application/merge-patch+json";

/// Status, headers and decoded body of a successful call.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    pub status: u16,
    pub headers: HeaderMap,
    pub result: T,
}

impl<T> DetailedResponse<T> {
    pub fn into_result(self) -> T {
        self.result
    }

    /// Value of a response header, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Fails with [`Error::MissingArgument`] when `value` is empty.
pub(crate) fn require<'v>(name: &'static str, value: &'v str) -> Result<&'v str> {
    if value.is_empty() {
        Err(Error::MissingArgument(name))
    } else {
        Ok(value)
    }
}

/// Fill `{name}` placeholders of a path template with percent-escaped
/// arguments. Every argument is required.
pub(crate) fn expand_path(template: &str, args: &[(&'static str, &str)]) -> Result<String> {
    let mut path = template.to_string();
    for &(name, value) in args {
        let value = require(name, value)?;
        path = path.replace(&format!("{{{name}}}"), &urlencoding::encode(value));
    }
    Ok(path)
}

/// One operation, ready to be sent by the client.
#[derive(Debug)]
pub(crate) struct OperationRequest {
    pub operation_id: &'static str,
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl OperationRequest {
    pub fn new(operation_id: &'static str, method: Method, path: String) -> Self {
        let mut headers = HeaderMap::new();
        if method != Method::DELETE {
            headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        }
        let analytics = format!(
            "service_name={SERVICE_NAME};service_version={SERVICE_VERSION};operation_id={operation_id}"
        );
        if let Ok(value) = HeaderValue::from_str(&analytics) {
            headers.insert(HeaderName::from_static("x-ibmcloud-sdk-analytics"), value);
        }
        Self {
            operation_id,
            method,
            path,
            query: Vec::new(),
            headers,
            body: None,
        }
    }

    pub fn get(operation_id: &'static str, path: String) -> Self {
        Self::new(operation_id, Method::GET, path)
    }

    pub fn post(operation_id: &'static str, path: String) -> Self {
        Self::new(operation_id, Method::POST, path)
    }

    pub fn put(operation_id: &'static str, path: String) -> Self {
        Self::new(operation_id, Method::PUT, path)
    }

    pub fn patch(operation_id: &'static str, path: String) -> Self {
        Self::new(operation_id, Method::PATCH, path)
    }

    pub fn delete(operation_id: &'static str, path: String) -> Self {
        Self::new(operation_id, Method::DELETE, path)
    }

    /// Add a query parameter when it is set.
    pub fn query(mut self, name: &'static str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.query.push((name, value.to_string()));
        }
        self
    }

    pub fn list_options(self, options: &ListOptions) -> Self {
        self.query("limit", options.limit)
            .query("start", options.start.as_deref().filter(|s| !s.is_empty()))
    }

    /// JSON body for creates and replaces.
    pub fn json<B: Serialize>(self, body: &B) -> Result<Self> {
        self.body_with(body, JSON)
    }

    /// JSON Merge Patch body for updates.
    pub fn merge_patch<B: Serialize>(self, body: &B) -> Result<Self> {
        self.body_with(body, MERGE_PATCH_JSON)
    }

    fn body_with<B: Serialize>(mut self, body: &B, content_type: &'static str) -> Result<Self> {
        let bytes = serde_json::to_vec(body).map_err(Error::Serialize)?;
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        self.body = Some(bytes);
        Ok(self)
    }

    /// Entity tag for optimistic concurrency; must not be empty.
    pub fn if_match(mut self, if_match: &str) -> Result<Self> {
        let value = require("if_match", if_match)?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::InvalidArgument(format!("if_match: {e}")))?;
        self.headers.insert(IF_MATCH, value);
        Ok(self)
    }
}
