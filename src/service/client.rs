//! Code Engine client
//!
//! Combines configuration, authentication and HTTP transport. Operations
//! themselves live in the per-resource modules next to this one.

use std::sync::Arc;

use futures::future::BoxFuture;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use url::Url;

use super::auth::{
    Authenticator, BearerTokenAuthenticator, NoAuthAuthenticator, AUTHTYPE_BEARER_TOKEN,
    AUTHTYPE_NOAUTH,
};
use super::http::{HttpClient, RawResponse};
use super::request::{DetailedResponse, OperationRequest};
use crate::config::{ClientConfig, ServiceProperties};
use crate::error::{Error, Result};
use crate::models::{ListOptions, Model};
use crate::pager::{Pager, Paginated};

/// Client for the Code Engine v2 API.
///
/// Cloning is cheap; clones share the connection pool and token cache.
#[derive(Clone, Debug)]
pub struct CodeEngineClient {
    config: Arc<ClientConfig>,
    http: HttpClient,
    authenticator: Arc<dyn Authenticator>,
    /// Per-client header overrides, see [`with_headers`](Self::with_headers).
    extra_headers: HeaderMap,
}

impl CodeEngineClient {
    /// Create a new client
    pub fn new<A>(config: ClientConfig, authenticator: A) -> Result<Self>
    where
        A: Authenticator + 'static,
    {
        let http = HttpClient::new(&config)?;
        Self::build(config, Arc::new(authenticator), http)
    }

    /// Create a client that sends through an existing `reqwest` client.
    /// The user agent and TLS settings of `config` are not applied to it.
    pub fn with_http_client<A>(
        config: ClientConfig,
        authenticator: A,
        client: reqwest::Client,
    ) -> Result<Self>
    where
        A: Authenticator + 'static,
    {
        Self::build(config, Arc::new(authenticator), HttpClient::from_client(client))
    }

    fn build(
        config: ClientConfig,
        authenticator: Arc<dyn Authenticator>,
        http: HttpClient,
    ) -> Result<Self> {
        Url::parse(&config.service_url)?;
        Ok(Self {
            config: Arc::new(config),
            http,
            authenticator,
            extra_headers: HeaderMap::new(),
        })
    }

    /// Create a client from external configuration (credentials file or
    /// `<SERVICE>_*` environment variables).
    ///
    /// Only `noauth` and `bearertoken` can be built from configuration;
    /// other authentication types need [`CodeEngineClient::new`] with an
    /// explicit authenticator.
    pub fn from_environment(service_name: &str) -> Result<Self> {
        let properties = ServiceProperties::load(service_name);
        Self::from_properties(&properties)
    }

    pub fn from_properties(properties: &ServiceProperties) -> Result<Self> {
        let config = ClientConfig::default().apply_properties(properties);
        let auth_type = properties
            .auth_type()
            .or_else(|| properties.bearer_token().map(|_| AUTHTYPE_BEARER_TOKEN.to_string()));

        match auth_type.as_deref() {
            Some(AUTHTYPE_NOAUTH) => Self::new(config, NoAuthAuthenticator),
            Some(AUTHTYPE_BEARER_TOKEN) => {
                let token = properties.bearer_token().ok_or_else(|| {
                    Error::Config("auth type bearertoken requires BEARER_TOKEN".to_string())
                })?;
                Self::new(config, BearerTokenAuthenticator::new(token)?)
            }
            Some(other) => Err(Error::Config(format!(
                "auth type `{other}` cannot be configured externally, pass an authenticator to CodeEngineClient::new"
            ))),
            None => Err(Error::Config(
                "no authentication configured (set AUTH_TYPE)".to_string(),
            )),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn service_url(&self) -> &str {
        &self.config.service_url
    }

    pub fn authenticator(&self) -> &dyn Authenticator {
        self.authenticator.as_ref()
    }

    /// A clone whose requests also carry `headers`, overriding configured
    /// headers of the same name.
    pub fn with_headers(&self, headers: HeaderMap) -> Self {
        let mut client = self.clone();
        for (name, value) in headers.iter() {
            client.extra_headers.insert(name.clone(), value.clone());
        }
        client
    }

    /// Send an operation and decode its body as `T`.
    pub(crate) async fn execute<T: Model>(
        &self,
        request: OperationRequest,
    ) -> Result<DetailedResponse<T>> {
        let raw = self.dispatch(request).await?;
        let value = serde_json::from_str(&raw.body).map_err(|source| Error::Deserialize {
            model: T::NAME,
            source,
        })?;
        Ok(DetailedResponse {
            status: raw.status.as_u16(),
            headers: raw.headers,
            result: T::from_value(value)?,
        })
    }

    /// Send an operation whose response has no body.
    pub(crate) async fn execute_empty(
        &self,
        request: OperationRequest,
    ) -> Result<DetailedResponse<()>> {
        let raw = self.dispatch(request).await?;
        Ok(DetailedResponse {
            status: raw.status.as_u16(),
            headers: raw.headers,
            result: (),
        })
    }

    /// Pager whose pages come from `list`, called with the page options.
    pub(crate) fn paged<'a, L, F>(&'a self, limit: Option<i64>, mut list: F) -> Pager<'a, L::Item>
    where
        L: Paginated + 'a,
        F: FnMut(ListOptions) -> BoxFuture<'a, Result<DetailedResponse<L>>> + Send + 'a,
    {
        Pager::new(move |start| {
            let response = list(ListOptions { limit, start });
            Box::pin(async move { response.await.map(|response| response.result.into_page()) })
        })
    }

    async fn dispatch(&self, request: OperationRequest) -> Result<RawResponse> {
        let url = self.url(&request.path, &request.query)?;
        tracing::debug!(operation = request.operation_id, "{} {}", request.method, url);

        let mut headers = request.headers;
        if let Some(authorization) = self.authenticator.authorization().await? {
            let value = HeaderValue::from_str(&authorization)
                .map_err(|e| Error::Auth(format!("invalid authorization header: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }
        for (name, value) in self.config.headers.iter().chain(self.extra_headers.iter()) {
            headers.insert(name.clone(), value.clone());
        }

        let mut builder = self
            .http
            .inner()
            .request(request.method, url)
            .headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        self.http.send(builder, request.operation_id).await
    }

    fn url(&self, path: &str, query: &[(&'static str, String)]) -> Result<Url> {
        let base = self.config.service_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{path}"))?;

        let version = self.config.version.as_deref().filter(|v| !v.is_empty());
        if version.is_some() || !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            if let Some(version) = version {
                pairs.append_pair("version", version);
            }
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }
}
