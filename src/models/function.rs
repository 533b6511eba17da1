//! Functions and the runtimes they can use.

use serde::{Deserialize, Serialize};

use super::app::ManagedDomainMappings;
use super::common::{ListFirstMetadata, ListNextMetadata};
use super::env::{EnvVar, EnvVarPrototype};

string_enum! {
    pub enum FunctionStatus {
        Offline => "offline",
        Deploying => "deploying",
        Ready => "ready",
        Failed => "failed",
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FunctionStatusDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A Code Engine function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    /// Whether `code_reference` points to a binary (base64 or image) rather
    /// than source.
    pub code_binary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_main: Option<String>,
    pub code_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_env_variables: Option<Vec<EnvVar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_internal: Option<String>,
    pub entity_tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub managed_domain_mappings: ManagedDomainMappings,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    pub run_env_variables: Vec<EnvVar>,
    /// Runtime id, for example `nodejs-20`.
    pub runtime: String,
    pub scale_concurrency: i64,
    pub scale_cpu_limit: String,
    pub scale_down_delay: i64,
    pub scale_max_execution_time: i64,
    pub scale_memory_limit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FunctionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<FunctionStatusDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<ListFirstMetadata>,
    pub functions: Vec<Function>,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<ListNextMetadata>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FunctionPrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_binary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_main: Option<String>,
    pub code_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_domain_mappings: Option<ManagedDomainMappings>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_env_variables: Option<Vec<EnvVarPrototype>>,
    pub runtime: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_concurrency: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_cpu_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_down_delay: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_max_execution_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_memory_limit: Option<String>,
}

impl FunctionPrototype {
    pub fn new(
        code_reference: impl Into<String>,
        name: impl Into<String>,
        runtime: impl Into<String>,
    ) -> Self {
        Self {
            code_reference: code_reference.into(),
            name: name.into(),
            runtime: runtime.into(),
            ..Default::default()
        }
    }
}

/// Merge-patch body of an update-function request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FunctionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_binary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_main: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_domain_mappings: Option<ManagedDomainMappings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_env_variables: Option<Vec<EnvVarPrototype>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_concurrency: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_cpu_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_down_delay: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_max_execution_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_memory_limit: Option<String>,
}

/// A language runtime available to functions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FunctionRuntime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimized: Option<bool>,
}

/// Not paginated: the service returns every runtime at once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FunctionRuntimeList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_runtimes: Option<Vec<FunctionRuntime>>,
}

impl_model!(
    Function,
    FunctionList,
    FunctionPrototype,
    FunctionPatch,
    FunctionStatusDetails,
    FunctionRuntime,
    FunctionRuntimeList,
);
