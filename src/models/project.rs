//! Projects: the top-level grouping of every other resource.

use serde::{Deserialize, Serialize};

use super::common::{ListFirstMetadata, ListNextMetadata};

string_enum! {
    /// Lifecycle state of a project.
    pub enum ProjectStatus {
        Active => "active",
        Inactive => "inactive",
        PendingRemoval => "pending_removal",
        HardDeleting => "hard_deleting",
        HardDeletionFailed => "hard_deletion_failed",
        HardDeleted => "hard_deleted",
        Deleting => "deleting",
        DeleteFailed => "delete_failed",
        SoftDeleted => "soft_deleted",
        Preparing => "preparing",
        Creating => "creating",
        CreationFailed => "creation_failed",
    }
}

/// A Code Engine project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub id: String,
    /// Unique within the account.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub resource_group_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

/// One page of projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<ListFirstMetadata>,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<ListNextMetadata>,
    pub projects: Vec<Project>,
}

/// Body of a create-project request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectPrototype {
    pub name: String,
    /// Defaults to the account's default resource group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ProjectPrototype {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_resource_group_id(mut self, id: impl Into<String>) -> Self {
        self.resource_group_id = Some(id.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}

/// Egress IP addresses used by workloads of a project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectEgressIPAddresses {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<Vec<String>>,
}

string_enum! {
    pub enum ProjectDomainStatus {
        Ready => "ready",
        Unknown => "unknown",
    }
}

string_enum! {
    pub enum ProjectEnablement {
        Enabled => "enabled",
        Disabled => "disabled",
    }
}

/// Health of the project's networking and control plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStatusDetails {
    pub domain: ProjectDomainStatus,
    pub project: ProjectEnablement,
    /// Set when the project has no virtual private endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpe_not_enabled: Option<bool>,
}

impl_model!(
    Project,
    ProjectList,
    ProjectPrototype,
    ProjectEgressIPAddresses,
    ProjectStatusDetails,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Model;
    use serde_json::json;

    #[test]
    fn test_project_list_roundtrip() {
        let value = json!({
            "limit": 2,
            "first": {"href": "https://api.example.com/v2/projects?limit=2"},
            "next": {
                "href": "https://api.example.com/v2/projects?limit=2&start=abc",
                "start": "abc"
            },
            "projects": [{
                "id": "15314cc3-85b4-4338-903f-c28cdee6d005",
                "name": "my-project",
                "resource_group_id": "b91e849cedb04e7e92bd68c040c672dc",
                "region": "us-east",
                "status": "active",
                "created_at": "2022-09-13T11:41:35+02:00"
            }]
        });

        let list = ProjectList::from_value(value.clone()).unwrap();
        assert_eq!(list.projects[0].status, Some(ProjectStatus::Active));
        assert_eq!(list.to_value().unwrap(), value);
    }

    #[test]
    fn test_missing_required_field_names_model_and_field() {
        let err = Project::from_value(json!({"id": "x", "name": "p"})).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("Project"), "{text}");
        assert!(text.contains("resource_group_id"), "{text}");
    }

    #[test]
    fn test_unknown_status_roundtrips() {
        let value = json!({
            "id": "x",
            "name": "p",
            "resource_group_id": "rg",
            "status": "migrating"
        });
        let project = Project::from_value(value.clone()).unwrap();
        assert_eq!(
            project.status,
            Some(ProjectStatus::Other("migrating".to_string()))
        );
        assert_eq!(project.to_value().unwrap(), value);
    }

    #[test]
    fn test_prototype_omits_unset_fields() {
        let value = ProjectPrototype::new("my-project").to_value().unwrap();
        assert_eq!(value, json!({"name": "my-project"}));
    }
}
