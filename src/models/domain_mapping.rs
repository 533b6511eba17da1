//! Custom domains routed to apps.

use serde::{Deserialize, Serialize};

use super::binding::ComponentRef;
use super::common::{ListFirstMetadata, ListNextMetadata};

string_enum! {
    pub enum DomainMappingStatus {
        Ready => "ready",
        Failed => "failed",
        Deploying => "deploying",
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DomainMappingStatusDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainMapping {
    /// Target for the CNAME record the user has to create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cname_target: Option<String>,
    pub component: ComponentRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub entity_tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The fully qualified domain name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DomainMappingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<DomainMappingStatusDetails>,
    pub tls_secret: String,
    /// `false` for the system-managed mappings of an app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_managed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainMappingList {
    pub domain_mappings: Vec<DomainMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<ListFirstMetadata>,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<ListNextMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainMappingPrototype {
    pub component: ComponentRef,
    pub name: String,
    pub tls_secret: String,
}

impl DomainMappingPrototype {
    pub fn new(
        component: ComponentRef,
        name: impl Into<String>,
        tls_secret: impl Into<String>,
    ) -> Self {
        Self {
            component,
            name: name.into(),
            tls_secret: tls_secret.into(),
        }
    }
}

/// Merge-patch body of an update-domain-mapping request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DomainMappingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_secret: Option<String>,
}

impl_model!(
    DomainMapping,
    DomainMappingList,
    DomainMappingPrototype,
    DomainMappingPatch,
    DomainMappingStatusDetails,
);
