//! Projects, their egress IPs and status details

use super::client::CodeEngineClient;
use super::request::{expand_path, require, DetailedResponse, OperationRequest};
use crate::error::Result;
use crate::models::{
    ListOptions, Project, ProjectEgressIPAddresses, ProjectList, ProjectPrototype,
    ProjectStatusDetails,
};
use crate::pager::Pager;

impl CodeEngineClient {
    /// List all projects in the current account.
    pub async fn list_projects(
        &self,
        options: &ListOptions,
    ) -> Result<DetailedResponse<ProjectList>> {
        let request =
            OperationRequest::get("list_projects", "/projects".to_string()).list_options(options);
        self.execute(request).await
    }

    pub fn projects_pager(&self, limit: Option<i64>) -> Pager<'_, Project> {
        self.paged(limit, move |options| {
            Box::pin(async move { self.list_projects(&options).await })
        })
    }

    /// Create a project. Provisioning continues asynchronously on the
    /// service side; watch `status` of the returned project.
    pub async fn create_project(
        &self,
        prototype: &ProjectPrototype,
    ) -> Result<DetailedResponse<Project>> {
        require("name", &prototype.name)?;
        let request =
            OperationRequest::post("create_project", "/projects".to_string()).json(prototype)?;
        self.execute(request).await
    }

    pub async fn get_project(&self, id: &str) -> Result<DetailedResponse<Project>> {
        let path = expand_path("/projects/{id}", &[("id", id)])?;
        self.execute(OperationRequest::get("get_project", path)).await
    }

    /// Delete a project and everything in it.
    pub async fn delete_project(&self, id: &str) -> Result<DetailedResponse<()>> {
        let path = expand_path("/projects/{id}", &[("id", id)])?;
        self.execute_empty(OperationRequest::delete("delete_project", path))
            .await
    }

    pub async fn get_project_egress_ips(
        &self,
        project_id: &str,
    ) -> Result<DetailedResponse<ProjectEgressIPAddresses>> {
        let path = expand_path("/projects/{project_id}/egress_ips", &[("project_id", project_id)])?;
        self.execute(OperationRequest::get("get_project_egress_ips", path))
            .await
    }

    pub async fn get_project_status_details(
        &self,
        project_id: &str,
    ) -> Result<DetailedResponse<ProjectStatusDetails>> {
        let path = expand_path(
            "/projects/{project_id}/status_details",
            &[("project_id", project_id)],
        )?;
        self.execute(OperationRequest::get("get_project_status_details", path))
            .await
    }
}
