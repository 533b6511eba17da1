//! Apps, their revisions and running instances.

use serde::{Deserialize, Serialize};

use super::common::{ListFirstMetadata, ListNextMetadata};
use super::env::{EnvVar, EnvVarPrototype, Probe, VolumeMount, VolumeMountPrototype};

string_enum! {
    /// Which system-managed domain mappings an app gets.
    pub enum ManagedDomainMappings {
        Local => "local",
        LocalPrivate => "local_private",
        LocalPublic => "local_public",
    }
}

string_enum! {
    /// Service account the workload's pods run under.
    pub enum RunServiceAccount {
        Default => "default",
        Manager => "manager",
        Reader => "reader",
        Writer => "writer",
        None => "none",
    }
}

string_enum! {
    pub enum AppStatus {
        Ready => "ready",
        Deploying => "deploying",
        Failed => "failed",
        Warning => "warning",
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppStatusDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_created_revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_ready_revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A Code Engine app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    /// Build that produced the image, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_run: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_env_variables: Option<Vec<EnvVar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_internal: Option<String>,
    /// Version marker for `If-Match` on update.
    pub entity_tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_port: Option<i64>,
    pub image_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_secret: Option<String>,
    pub managed_domain_mappings: ManagedDomainMappings,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probe_liveness: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probe_readiness: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    pub run_arguments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_as_user: Option<i64>,
    pub run_commands: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_compute_resource_token_enabled: Option<bool>,
    pub run_env_variables: Vec<EnvVar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_service_account: Option<RunServiceAccount>,
    pub run_volume_mounts: Vec<VolumeMount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_concurrency: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_concurrency_target: Option<i64>,
    pub scale_cpu_limit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_down_delay: Option<i64>,
    pub scale_ephemeral_storage_limit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_initial_instances: Option<i64>,
    pub scale_max_instances: i64,
    pub scale_memory_limit: String,
    pub scale_min_instances: i64,
    pub scale_request_timeout: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<AppStatusDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppList {
    pub apps: Vec<App>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<ListFirstMetadata>,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<ListNextMetadata>,
}

/// Body of a create-app request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppPrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_port: Option<i64>,
    pub image_reference: String,
    /// Registry secret used to pull `image_reference`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_domain_mappings: Option<ManagedDomainMappings>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probe_liveness: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probe_readiness: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_arguments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_as_user: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_commands: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_compute_resource_token_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_env_variables: Option<Vec<EnvVarPrototype>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_service_account: Option<RunServiceAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_volume_mounts: Option<Vec<VolumeMountPrototype>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_concurrency: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_concurrency_target: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_cpu_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_down_delay: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_ephemeral_storage_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_initial_instances: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_max_instances: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_memory_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_min_instances: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_request_timeout: Option<i64>,
}

impl AppPrototype {
    pub fn new(image_reference: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            image_reference: image_reference.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Merge-patch body of an update-app request. Only set fields change.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_domain_mappings: Option<ManagedDomainMappings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probe_liveness: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probe_readiness: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_arguments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_as_user: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_commands: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_compute_resource_token_enabled: Option<bool>,
    /// Replaces the whole list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_env_variables: Option<Vec<EnvVarPrototype>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_service_account: Option<RunServiceAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_volume_mounts: Option<Vec<VolumeMountPrototype>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_concurrency: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_concurrency_target: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_cpu_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_down_delay: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_ephemeral_storage_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_initial_instances: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_max_instances: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_memory_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_min_instances: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_request_timeout: Option<i64>,
}

string_enum! {
    pub enum AppRevisionStatus {
        Ready => "ready",
        Loading => "loading",
        Warning => "warning",
        Failed => "failed",
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppRevisionStatusDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_instances: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Immutable snapshot of an app's configuration, created on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppRevision {
    pub app_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_env_variables: Option<Vec<EnvVar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_port: Option<i64>,
    pub image_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_secret: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probe_liveness: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probe_readiness: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    pub run_arguments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_as_user: Option<i64>,
    pub run_commands: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_compute_resource_token_enabled: Option<bool>,
    pub run_env_variables: Vec<EnvVar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_service_account: Option<RunServiceAccount>,
    pub run_volume_mounts: Vec<VolumeMount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_concurrency: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_concurrency_target: Option<i64>,
    pub scale_cpu_limit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_down_delay: Option<i64>,
    pub scale_ephemeral_storage_limit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_initial_instances: Option<i64>,
    pub scale_max_instances: i64,
    pub scale_memory_limit: String,
    pub scale_min_instances: i64,
    pub scale_request_timeout: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppRevisionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<AppRevisionStatusDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppRevisionList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<ListFirstMetadata>,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<ListNextMetadata>,
    pub revisions: Vec<AppRevision>,
}

string_enum! {
    pub enum AppInstanceStatus {
        Pending => "pending",
        Running => "running",
        Succeeded => "succeeded",
        Failed => "failed",
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerStatusDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_state: Option<ContainerStatusDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_observed_state: Option<ContainerStatusDetails>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppInstanceStatusDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restarts: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_container: Option<ContainerStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_container: Option<ContainerStatus>,
}

/// A running instance of an app revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppInstance {
    pub app_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    pub revision_name: String,
    pub scale_cpu_limit: String,
    pub scale_ephemeral_storage_limit: String,
    pub scale_memory_limit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppInstanceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<AppInstanceStatusDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppInstanceList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<ListFirstMetadata>,
    pub instances: Vec<AppInstance>,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<ListNextMetadata>,
}

impl_model!(
    App,
    AppList,
    AppPrototype,
    AppPatch,
    AppStatusDetails,
    AppRevision,
    AppRevisionList,
    AppRevisionStatusDetails,
    AppInstance,
    AppInstanceList,
    AppInstanceStatusDetails,
    ContainerStatus,
    ContainerStatusDetails,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Model;
    use serde_json::json;

    fn app_json() -> serde_json::Value {
        json!({
            "entity_tag": "2385407409",
            "image_reference": "icr.io/codeengine/helloworld",
            "managed_domain_mappings": "local_public",
            "name": "my-app",
            "run_arguments": [],
            "run_commands": [],
            "run_env_variables": [
                {"type": "literal", "name": "LOG_LEVEL", "value": "info"}
            ],
            "run_volume_mounts": [],
            "scale_cpu_limit": "1",
            "scale_ephemeral_storage_limit": "400M",
            "scale_max_instances": 10,
            "scale_memory_limit": "4G",
            "scale_min_instances": 0,
            "scale_request_timeout": 300,
            "status": "ready",
            "status_details": {
                "latest_created_revision": "my-app-00001",
                "latest_ready_revision": "my-app-00001"
            }
        })
    }

    #[test]
    fn test_app_roundtrip_keeps_empty_lists() {
        let value = app_json();
        let app = App::from_value(value.clone()).unwrap();
        assert_eq!(app.status, Some(AppStatus::Ready));
        assert!(app.run_arguments.is_empty());
        assert_eq!(app.to_value().unwrap(), value);
    }

    #[test]
    fn test_app_requires_entity_tag() {
        let mut value = app_json();
        value.as_object_mut().unwrap().remove("entity_tag");
        let err = App::from_value(value).unwrap_err();
        assert!(err.to_string().contains("entity_tag"));
    }

    #[test]
    fn test_app_prototype_only_required_keys() {
        let value = AppPrototype::new("icr.io/codeengine/helloworld", "my-app")
            .to_value()
            .unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["image_reference", "name"]);
    }

    #[test]
    fn test_patch_distinguishes_empty_from_unset() {
        let patch = AppPatch {
            run_commands: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(patch.to_value().unwrap(), json!({"run_commands": []}));
        assert_eq!(AppPatch::default().to_value().unwrap(), json!({}));
    }
}
