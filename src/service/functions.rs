//! Functions and function runtimes

use super::client::CodeEngineClient;
use super::request::{expand_path, require, DetailedResponse, OperationRequest};
use crate::error::Result;
use crate::models::{
    Function, FunctionList, FunctionPatch, FunctionPrototype, FunctionRuntimeList, ListOptions,
};
use crate::pager::Pager;

const FUNCTIONS: &str = "/projects/{project_id}/functions";
const FUNCTION: &str = "/projects/{project_id}/functions/{name}";

impl CodeEngineClient {
    /// Runtimes functions can be deployed with. Not project scoped.
    pub async fn list_function_runtimes(&self) -> Result<DetailedResponse<FunctionRuntimeList>> {
        let request = OperationRequest::get("list_function_runtimes", "/function_runtimes".to_string());
        self.execute(request).await
    }

    pub async fn list_functions(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<DetailedResponse<FunctionList>> {
        let path = expand_path(FUNCTIONS, &[("project_id", project_id)])?;
        self.execute(OperationRequest::get("list_functions", path).list_options(options))
            .await
    }

    pub fn functions_pager(&self, project_id: &str, limit: Option<i64>) -> Pager<'_, Function> {
        let project_id = project_id.to_string();
        self.paged(limit, move |options| {
            let project_id = project_id.clone();
            Box::pin(async move { self.list_functions(&project_id, &options).await })
        })
    }

    pub async fn create_function(
        &self,
        project_id: &str,
        prototype: &FunctionPrototype,
    ) -> Result<DetailedResponse<Function>> {
        let path = expand_path(FUNCTIONS, &[("project_id", project_id)])?;
        require("code_reference", &prototype.code_reference)?;
        require("name", &prototype.name)?;
        require("runtime", &prototype.runtime)?;
        let request = OperationRequest::post("create_function", path).json(prototype)?;
        self.execute(request).await
    }

    pub async fn get_function(
        &self,
        project_id: &str,
        name: &str,
    ) -> Result<DetailedResponse<Function>> {
        let path = expand_path(FUNCTION, &[("project_id", project_id), ("name", name)])?;
        self.execute(OperationRequest::get("get_function", path)).await
    }

    pub async fn delete_function(
        &self,
        project_id: &str,
        name: &str,
    ) -> Result<DetailedResponse<()>> {
        let path = expand_path(FUNCTION, &[("project_id", project_id), ("name", name)])?;
        self.execute_empty(OperationRequest::delete("delete_function", path))
            .await
    }

    pub async fn update_function(
        &self,
        project_id: &str,
        name: &str,
        if_match: &str,
        patch: &FunctionPatch,
    ) -> Result<DetailedResponse<Function>> {
        let path = expand_path(FUNCTION, &[("project_id", project_id), ("name", name)])?;
        let request = OperationRequest::patch("update_function", path)
            .if_match(if_match)?
            .merge_patch(patch)?;
        self.execute(request).await
    }
}
