//! Records with a few named fields plus an open set of string properties.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// The open tail of a record, in insertion order.
pub type AdditionalProperties = IndexMap<String, String>;

/// A record that carries arbitrary string-valued properties next to its
/// named fields. On the wire both sit in the same JSON object.
pub trait OpenRecord {
    /// Keys owned by named fields. They can never be additional properties.
    const NAMED_FIELDS: &'static [&'static str];

    fn additional_properties(&self) -> &AdditionalProperties;

    #[doc(hidden)]
    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties;

    fn additional_property(&self, key: &str) -> Option<&str> {
        self.additional_properties().get(key).map(String::as_str)
    }

    /// Replace the whole additional-property set.
    ///
    /// The previous set is discarded only when the new one is valid; on error
    /// the record is left untouched.
    fn set_additional_properties(&mut self, properties: AdditionalProperties) -> Result<()> {
        if let Some(key) = properties
            .keys()
            .find(|key| Self::NAMED_FIELDS.contains(&key.as_str()))
        {
            return Err(Error::InvalidArgument(format!(
                "`{key}` is a named field and cannot be set as an additional property"
            )));
        }
        *self.additional_properties_mut() = properties;
        Ok(())
    }

    /// Like [`set_additional_properties`](Self::set_additional_properties),
    /// from untyped JSON. Every value must be a string.
    fn set_additional_properties_json(&mut self, properties: Map<String, Value>) -> Result<()> {
        let properties = string_properties(properties)?;
        self.set_additional_properties(properties)
    }
}

pub(crate) fn string_properties(properties: Map<String, Value>) -> Result<AdditionalProperties> {
    properties
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(value) => Ok((key, value)),
            other => Err(Error::InvalidArgument(format!(
                "additional property `{key}` must be a string, got {}",
                json_type_name(&other)
            ))),
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
