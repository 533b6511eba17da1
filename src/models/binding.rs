//! Service bindings and component references.

use serde::{Deserialize, Serialize};

use super::common::{ListFirstMetadata, ListNextMetadata};

string_enum! {
    pub enum ComponentResourceType {
        App => "app_v2",
        Job => "job_v2",
    }
}

/// Points at an app or job in the same project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRef {
    pub name: String,
    pub resource_type: ComponentResourceType,
}

impl ComponentRef {
    pub fn app(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_type: ComponentResourceType::App,
        }
    }

    pub fn job(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_type: ComponentResourceType::Job,
        }
    }
}

string_enum! {
    pub enum BindingStatus {
        Active => "active",
        Deleting => "deleting",
        Failed => "failed",
    }
}

/// Injects a service-access secret into a component's environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    pub component: ComponentRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Prefix of the injected environment variables.
    pub prefix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    pub secret_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BindingStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingList {
    pub bindings: Vec<Binding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<ListFirstMetadata>,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<ListNextMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingPrototype {
    pub component: ComponentRef,
    pub prefix: String,
    pub secret_name: String,
}

impl BindingPrototype {
    pub fn new(
        component: ComponentRef,
        prefix: impl Into<String>,
        secret_name: impl Into<String>,
    ) -> Self {
        Self {
            component,
            prefix: prefix.into(),
            secret_name: secret_name.into(),
        }
    }
}

impl_model!(ComponentRef, Binding, BindingList, BindingPrototype);
