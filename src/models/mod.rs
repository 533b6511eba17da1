//! Typed request and response bodies of the Code Engine v2 API.
//!
//! Required fields are plain values and optional ones are `Option`s that are
//! left out of the JSON when unset. Decoding a payload that lacks a required
//! field fails with [`Error::Deserialize`] naming the model and the field.

#[macro_use]
mod macros;

pub mod app;
pub mod binding;
pub mod build;
pub mod common;
pub mod config_map;
pub mod destination;
pub mod domain_mapping;
pub mod env;
pub mod function;
pub mod job;
pub mod open_record;
pub mod project;
pub mod secret;

pub use app::*;
pub use binding::*;
pub use build::*;
pub use common::*;
pub use config_map::*;
pub use destination::*;
pub use domain_mapping::*;
pub use env::*;
pub use function::*;
pub use job::*;
pub use open_record::{AdditionalProperties, OpenRecord};
pub use project::*;
pub use secret::*;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Conversion between a model and its untyped JSON form.
pub trait Model: Serialize + DeserializeOwned {
    /// Type name used in decode errors.
    const NAME: &'static str;

    fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|source| Error::Deserialize {
            model: Self::NAME,
            source,
        })
    }

    fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(Error::Serialize)
    }
}
