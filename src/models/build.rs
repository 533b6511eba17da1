//! Build configurations and build runs.

use serde::{Deserialize, Serialize};

use super::common::{ListFirstMetadata, ListNextMetadata};

string_enum! {
    pub enum BuildSourceType {
        Git => "git",
        Local => "local",
    }
}

string_enum! {
    pub enum BuildStrategyType {
        Dockerfile => "dockerfile",
        Buildpacks => "buildpacks",
    }
}

string_enum! {
    pub enum BuildStatus {
        Ready => "ready",
        Failed => "failed",
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BuildStatusDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// How to turn source code into a container image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Build {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub entity_tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub output_image: String,
    /// Registry secret used to push `output_image`.
    pub output_secret: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_context_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_secret: Option<String>,
    pub source_type: BuildSourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BuildStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<BuildStatusDetails>,
    pub strategy_size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_spec_file: Option<String>,
    pub strategy_type: BuildStrategyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildList {
    pub builds: Vec<Build>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<ListFirstMetadata>,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<ListNextMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildPrototype {
    pub name: String,
    pub output_image: String,
    pub output_secret: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_context_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<BuildSourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_spec_file: Option<String>,
    pub strategy_type: BuildStrategyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
}

impl BuildPrototype {
    pub fn new(
        name: impl Into<String>,
        output_image: impl Into<String>,
        output_secret: impl Into<String>,
        strategy_type: BuildStrategyType,
    ) -> Self {
        Self {
            name: name.into(),
            output_image: output_image.into(),
            output_secret: output_secret.into(),
            source_context_dir: None,
            source_revision: None,
            source_secret: None,
            source_type: None,
            source_url: None,
            strategy_size: None,
            strategy_spec_file: None,
            strategy_type,
            timeout: None,
        }
    }
}

/// Merge-patch body of an update-build request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BuildPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_context_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<BuildSourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_spec_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_type: Option<BuildStrategyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
}

string_enum! {
    pub enum BuildRunStatus {
        Succeeded => "succeeded",
        Running => "running",
        Pending => "pending",
        Failed => "failed",
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BuildRunStatusDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<String>,
    /// Digest of the pushed image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_digest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
}

/// One execution of a build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildRun {
    pub build_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_context_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<BuildSourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BuildRunStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<BuildRunStatusDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_spec_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_type: Option<BuildStrategyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildRunList {
    pub build_runs: Vec<BuildRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<ListFirstMetadata>,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<ListNextMetadata>,
}

/// Body of a create-build-run request; either `build_name` or a complete
/// standalone build description.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BuildRunPrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_context_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<BuildSourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_spec_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_type: Option<BuildStrategyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
}

impl BuildRunPrototype {
    pub fn for_build(build_name: impl Into<String>) -> Self {
        Self {
            build_name: Some(build_name.into()),
            ..Default::default()
        }
    }
}

impl_model!(
    Build,
    BuildList,
    BuildPrototype,
    BuildPatch,
    BuildStatusDetails,
    BuildRun,
    BuildRunList,
    BuildRunPrototype,
    BuildRunStatusDetails,
);
