//! Allowed outbound destinations of a project.
//!
//! Each family is tagged by its `type` field. Only `cidr_block` exists today;
//! anything else is refused with [`Error::UnknownVariant`].

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{ListFirstMetadata, ListNextMetadata};
use crate::error::{Error, Result};

/// Legal values of the `type` discriminator.
pub const DESTINATION_TYPES: &[&str] = &["cidr_block"];

string_enum! {
    pub enum AllowedOutboundDestinationStatus {
        Ready => "ready",
        Failed => "failed",
        Deploying => "deploying",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CidrBlockDestination {
    /// IPv4 range in CIDR notation, e.g. `10.0.0.0/24`.
    pub cidr_block: String,
    pub entity_tag: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AllowedOutboundDestinationStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CidrBlockDestinationPrototype {
    pub cidr_block: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CidrBlockDestinationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AllowedOutboundDestination {
    #[serde(rename = "cidr_block")]
    CidrBlock(CidrBlockDestination),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AllowedOutboundDestinationPrototype {
    #[serde(rename = "cidr_block")]
    CidrBlock(CidrBlockDestinationPrototype),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AllowedOutboundDestinationPatch {
    #[serde(rename = "cidr_block")]
    CidrBlock(CidrBlockDestinationPatch),
}

impl AllowedOutboundDestination {
    pub fn name(&self) -> &str {
        match self {
            Self::CidrBlock(destination) => &destination.name,
        }
    }

    pub fn entity_tag(&self) -> &str {
        match self {
            Self::CidrBlock(destination) => &destination.entity_tag,
        }
    }
}

impl AllowedOutboundDestinationPrototype {
    pub fn cidr_block(name: impl Into<String>, cidr_block: impl Into<String>) -> Self {
        Self::CidrBlock(CidrBlockDestinationPrototype {
            cidr_block: cidr_block.into(),
            name: name.into(),
        })
    }
}

impl AllowedOutboundDestinationPatch {
    pub fn cidr_block(cidr_block: impl Into<String>) -> Self {
        Self::CidrBlock(CidrBlockDestinationPatch {
            cidr_block: Some(cidr_block.into()),
        })
    }
}

/// Reads the `type` discriminator and decodes the matching shape.
fn dispatch<T: DeserializeOwned>(family: &'static str, value: Value) -> Result<T> {
    let found = value.get("type").and_then(Value::as_str).map(str::to_string);
    match found.as_deref() {
        Some("cidr_block") => serde_json::from_value(value).map_err(|source| {
            Error::Deserialize {
                model: family,
                source,
            }
        }),
        _ => Err(Error::UnknownVariant {
            family,
            found,
            expected: DESTINATION_TYPES,
        }),
    }
}

macro_rules! tagged_family {
    ($family:ident, $shape:ident) => {
        impl<'de> Deserialize<'de> for $family {
            fn deserialize<D: Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let value = Value::deserialize(deserializer)?;
                dispatch::<$shape>(stringify!($family), value)
                    .map(Self::CidrBlock)
                    .map_err(de::Error::custom)
            }
        }

        impl From<$shape> for $family {
            fn from(shape: $shape) -> Self {
                Self::CidrBlock(shape)
            }
        }
    };
}

tagged_family!(AllowedOutboundDestination, CidrBlockDestination);
tagged_family!(AllowedOutboundDestinationPrototype, CidrBlockDestinationPrototype);
tagged_family!(AllowedOutboundDestinationPatch, CidrBlockDestinationPatch);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowedOutboundDestinationList {
    pub allowed_outbound_destinations: Vec<AllowedOutboundDestination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<ListFirstMetadata>,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<ListNextMetadata>,
}

impl_model!(
    CidrBlockDestination,
    CidrBlockDestinationPrototype,
    CidrBlockDestinationPatch,
    AllowedOutboundDestinationList,
);

// The families keep the typed `UnknownVariant` error instead of a serde
// message, so they implement `Model` by hand.
macro_rules! family_model {
    ($($family:ident),+) => {
        $(
            impl super::Model for $family {
                const NAME: &'static str = stringify!($family);

                fn from_value(value: Value) -> Result<Self> {
                    dispatch(stringify!($family), value).map(Self::CidrBlock)
                }
            }
        )+
    };
}

family_model!(
    AllowedOutboundDestination,
    AllowedOutboundDestinationPrototype,
    AllowedOutboundDestinationPatch
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Model;
    use serde_json::json;

    #[test]
    fn test_cidr_block_round_trip() {
        let value = json!({
            "type": "cidr_block",
            "cidr_block": "10.0.0.0/24",
            "entity_tag": "2385407409",
            "name": "internal"
        });
        let destination = AllowedOutboundDestination::from_value(value.clone()).unwrap();
        assert_eq!(destination.name(), "internal");
        assert_eq!(destination.to_value().unwrap(), value);
    }

    #[test]
    fn test_missing_type_is_unknown_variant() {
        let err = AllowedOutboundDestination::from_value(json!({
            "cidr_block": "10.0.0.0/24",
            "entity_tag": "1",
            "name": "internal"
        }))
        .unwrap_err();
        match err {
            Error::UnknownVariant {
                family,
                found,
                expected,
            } => {
                assert_eq!(family, "AllowedOutboundDestination");
                assert_eq!(found, None);
                assert_eq!(expected, &["cidr_block"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_type_message_lists_shapes() {
        let err = AllowedOutboundDestinationPrototype::from_value(json!({
            "type": "private_path",
            "name": "x"
        }))
        .unwrap_err();
        let text = err.to_string();
        assert!(text.contains("private_path"), "{text}");
        assert!(text.contains("cidr_block"), "{text}");
    }

    #[test]
    fn test_list_decodes_members_through_dispatch() {
        let list = AllowedOutboundDestinationList::from_value(json!({
            "limit": 50,
            "allowed_outbound_destinations": [
                {"type": "cidr_block", "cidr_block": "10.0.0.0/8", "entity_tag": "1", "name": "a"}
            ]
        }))
        .unwrap();
        assert_eq!(list.allowed_outbound_destinations.len(), 1);

        assert!(AllowedOutboundDestinationList::from_value(json!({
            "limit": 50,
            "allowed_outbound_destinations": [{"type": "vpe", "name": "b"}]
        }))
        .is_err());
    }

    #[test]
    fn test_patch_serializes_tag() {
        let patch = AllowedOutboundDestinationPatch::cidr_block("10.1.0.0/16");
        assert_eq!(
            patch.to_value().unwrap(),
            json!({"type": "cidr_block", "cidr_block": "10.1.0.0/16"})
        );
    }
}
