//! Service bindings

use super::client::CodeEngineClient;
use super::request::{expand_path, require, DetailedResponse, OperationRequest};
use crate::error::Result;
use crate::models::{Binding, BindingList, BindingPrototype, ListOptions};
use crate::pager::Pager;

const BINDINGS: &str = "/projects/{project_id}/bindings";
const BINDING: &str = "/projects/{project_id}/bindings/{id}";

impl CodeEngineClient {
    pub async fn list_bindings(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<DetailedResponse<BindingList>> {
        let path = expand_path(BINDINGS, &[("project_id", project_id)])?;
        self.execute(OperationRequest::get("list_bindings", path).list_options(options))
            .await
    }

    pub fn bindings_pager(&self, project_id: &str, limit: Option<i64>) -> Pager<'_, Binding> {
        let project_id = project_id.to_string();
        self.paged(limit, move |options| {
            let project_id = project_id.clone();
            Box::pin(async move { self.list_bindings(&project_id, &options).await })
        })
    }

    /// Bind a service-access secret to an app or job.
    pub async fn create_binding(
        &self,
        project_id: &str,
        prototype: &BindingPrototype,
    ) -> Result<DetailedResponse<Binding>> {
        let path = expand_path(BINDINGS, &[("project_id", project_id)])?;
        require("component.name", &prototype.component.name)?;
        require("prefix", &prototype.prefix)?;
        require("secret_name", &prototype.secret_name)?;
        let request = OperationRequest::post("create_binding", path).json(prototype)?;
        self.execute(request).await
    }

    pub async fn get_binding(&self, project_id: &str, id: &str) -> Result<DetailedResponse<Binding>> {
        let path = expand_path(BINDING, &[("project_id", project_id), ("id", id)])?;
        self.execute(OperationRequest::get("get_binding", path)).await
    }

    pub async fn delete_binding(&self, project_id: &str, id: &str) -> Result<DetailedResponse<()>> {
        let path = expand_path(BINDING, &[("project_id", project_id), ("id", id)])?;
        self.execute_empty(OperationRequest::delete("delete_binding", path))
            .await
    }
}
