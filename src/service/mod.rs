//! Code Engine API interaction module
//!
//! # Module Structure
//!
//! - [`auth`] - authenticators that supply the `Authorization` header
//! - [`client`] - the [`CodeEngineClient`] and request dispatch
//! - [`request`] - per-operation request building and [`DetailedResponse`]
//! - one module per resource group with its operations and pagers
//!
//! # Example
//!
//! ```no_run
//! use codeengine::{BearerTokenAuthenticator, ClientConfig, CodeEngineClient, ListOptions};
//!
//! async fn example() -> codeengine::Result<()> {
//!     let auth = BearerTokenAuthenticator::new("eyJraWQi...")?;
//!     let client = CodeEngineClient::new(ClientConfig::new().with_region("eu-de")?, auth)?;
//!     let apps = client.list_apps("my-project-id", &ListOptions::new()).await?;
//!     for app in apps.result.apps {
//!         println!("{} {:?}", app.name, app.status);
//!     }
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
mod http;
pub mod request;

mod apps;
mod bindings;
mod builds;
mod config_maps;
mod destinations;
mod domain_mappings;
mod functions;
mod jobs;
mod projects;
mod secrets;

pub use client::CodeEngineClient;
pub use request::DetailedResponse;
