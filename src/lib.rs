//! Client library for the IBM Cloud Code Engine v2 API.
//!
//! [`CodeEngineClient`] exposes one async method per API operation. Each
//! returns a [`DetailedResponse`] holding the HTTP status, the response
//! headers and the decoded model. List operations also have a `*_pager`
//! constructor returning a [`Pager`].

pub mod config;
pub mod error;
pub mod models;
pub mod pager;
pub mod service;

pub use config::{service_url_for_region, ClientConfig, ServiceProperties, DEFAULT_SERVICE_URL, DEFAULT_VERSION};
pub use error::{Error, Result};
pub use models::*;
pub use pager::{Page, Pager, Paginated};
pub use service::auth::{
    AccessToken, Authenticator, BearerTokenAuthenticator, CachingAuthenticator,
    NoAuthAuthenticator, TokenProvider,
};
pub use service::{CodeEngineClient, DetailedResponse};
