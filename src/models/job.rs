//! Batch jobs and their runs.
//!
//! `run_mode = daemon` jobs do not accept `scale_retry_limit` or
//! `scale_max_execution_time`; the service rejects such requests, this client
//! passes them through unchanged.

use serde::{Deserialize, Serialize};

use super::app::RunServiceAccount;
use super::common::{ListFirstMetadata, ListNextMetadata};
use super::env::{EnvVar, EnvVarPrototype, VolumeMount, VolumeMountPrototype};

string_enum! {
    pub enum JobRunMode {
        Task => "task",
        Daemon => "daemon",
    }
}

/// A Code Engine job definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_run: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_env_variables: Option<Vec<EnvVar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub entity_tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub image_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_secret: Option<String>,
    pub name: String,
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
    pub run_mode: JobRunMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_service_account: Option<RunServiceAccount>,
    pub run_volume_mounts: Vec<VolumeMount>,
    /// Array indices to run, e.g. `0-5,7`.
    pub scale_array_spec: String,
    pub scale_cpu_limit: String,
    pub scale_ephemeral_storage_limit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_max_execution_time: Option<i64>,
    pub scale_memory_limit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_retry_limit: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<ListFirstMetadata>,
    pub jobs: Vec<Job>,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<ListNextMetadata>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobPrototype {
    pub image_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_secret: Option<String>,
    pub name: String,
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
    pub run_mode: Option<JobRunMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_service_account: Option<RunServiceAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_volume_mounts: Option<Vec<VolumeMountPrototype>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_array_spec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_cpu_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_ephemeral_storage_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_max_execution_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_memory_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_retry_limit: Option<i64>,
}

impl JobPrototype {
    pub fn new(image_reference: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            image_reference: image_reference.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Merge-patch body of an update-job request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_secret: Option<String>,
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
    pub run_mode: Option<JobRunMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_service_account: Option<RunServiceAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_volume_mounts: Option<Vec<VolumeMountPrototype>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_array_spec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_cpu_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_ephemeral_storage_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_max_execution_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_memory_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_retry_limit: Option<i64>,
}

string_enum! {
    pub enum JobRunStatus {
        Failed => "failed",
        Completed => "completed",
        Running => "running",
        Pending => "pending",
    }
}

/// Per-index counters of a job run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobRunStatusDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_indices: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_indices: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_indices: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub succeeded: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub succeeded_indices: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown: Option<i64>,
}

/// One execution of a job, optionally with overridden settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRun {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_env_variables: Option<Vec<EnvVar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    pub name: String,
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
    pub run_mode: Option<JobRunMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_service_account: Option<RunServiceAccount>,
    pub run_volume_mounts: Vec<VolumeMount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_array_size_variable_override: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_array_spec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_cpu_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_ephemeral_storage_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_max_execution_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_memory_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_retry_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobRunStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<JobRunStatusDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRunList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<ListFirstMetadata>,
    pub job_runs: Vec<JobRun>,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<ListNextMetadata>,
}

/// Body of a create-job-run request.
///
/// Either reference an existing job with `job_name` (other fields override
/// its settings for this run) or give a standalone `image_reference`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobRunPrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
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
    pub run_mode: Option<JobRunMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_service_account: Option<RunServiceAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_volume_mounts: Option<Vec<VolumeMountPrototype>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_array_size_variable_override: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_array_spec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_cpu_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_ephemeral_storage_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_max_execution_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_memory_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_retry_limit: Option<i64>,
}

impl JobRunPrototype {
    /// Run an existing job with its stored settings.
    pub fn for_job(job_name: impl Into<String>) -> Self {
        Self {
            job_name: Some(job_name.into()),
            ..Default::default()
        }
    }
}

impl_model!(
    Job,
    JobList,
    JobPrototype,
    JobPatch,
    JobRun,
    JobRunList,
    JobRunPrototype,
    JobRunStatusDetails,
);
