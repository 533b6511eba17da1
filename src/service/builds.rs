//! Builds and build runs

use super::client::CodeEngineClient;
use super::request::{expand_path, require, DetailedResponse, OperationRequest};
use crate::error::Result;
use crate::models::{
    Build, BuildList, BuildPatch, BuildPrototype, BuildRun, BuildRunList, BuildRunPrototype,
    ListOptions,
};
use crate::pager::Pager;

const BUILDS: &str = "/projects/{project_id}/builds";
const BUILD: &str = "/projects/{project_id}/builds/{name}";
const BUILD_RUNS: &str = "/projects/{project_id}/build_runs";
const BUILD_RUN: &str = "/projects/{project_id}/build_runs/{name}";

impl CodeEngineClient {
    pub async fn list_builds(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<DetailedResponse<BuildList>> {
        let path = expand_path(BUILDS, &[("project_id", project_id)])?;
        self.execute(OperationRequest::get("list_builds", path).list_options(options))
            .await
    }

    pub fn builds_pager(&self, project_id: &str, limit: Option<i64>) -> Pager<'_, Build> {
        let project_id = project_id.to_string();
        self.paged(limit, move |options| {
            let project_id = project_id.clone();
            Box::pin(async move { self.list_builds(&project_id, &options).await })
        })
    }

    pub async fn create_build(
        &self,
        project_id: &str,
        prototype: &BuildPrototype,
    ) -> Result<DetailedResponse<Build>> {
        let path = expand_path(BUILDS, &[("project_id", project_id)])?;
        require("name", &prototype.name)?;
        require("output_image", &prototype.output_image)?;
        require("output_secret", &prototype.output_secret)?;
        let request = OperationRequest::post("create_build", path).json(prototype)?;
        self.execute(request).await
    }

    pub async fn get_build(&self, project_id: &str, name: &str) -> Result<DetailedResponse<Build>> {
        let path = expand_path(BUILD, &[("project_id", project_id), ("name", name)])?;
        self.execute(OperationRequest::get("get_build", path)).await
    }

    pub async fn delete_build(&self, project_id: &str, name: &str) -> Result<DetailedResponse<()>> {
        let path = expand_path(BUILD, &[("project_id", project_id), ("name", name)])?;
        self.execute_empty(OperationRequest::delete("delete_build", path))
            .await
    }

    pub async fn update_build(
        &self,
        project_id: &str,
        name: &str,
        if_match: &str,
        patch: &BuildPatch,
    ) -> Result<DetailedResponse<Build>> {
        let path = expand_path(BUILD, &[("project_id", project_id), ("name", name)])?;
        let request = OperationRequest::patch("update_build", path)
            .if_match(if_match)?
            .merge_patch(patch)?;
        self.execute(request).await
    }

    /// List build runs, optionally only those of `build_name`.
    pub async fn list_build_runs(
        &self,
        project_id: &str,
        build_name: Option<&str>,
        options: &ListOptions,
    ) -> Result<DetailedResponse<BuildRunList>> {
        let path = expand_path(BUILD_RUNS, &[("project_id", project_id)])?;
        let request = OperationRequest::get("list_build_runs", path)
            .query("build_name", build_name.filter(|name| !name.is_empty()))
            .list_options(options);
        self.execute(request).await
    }

    pub fn build_runs_pager(
        &self,
        project_id: &str,
        build_name: Option<&str>,
        limit: Option<i64>,
    ) -> Pager<'_, BuildRun> {
        let project_id = project_id.to_string();
        let build_name = build_name.map(str::to_string);
        self.paged(limit, move |options| {
            let (project_id, build_name) = (project_id.clone(), build_name.clone());
            Box::pin(async move {
                self.list_build_runs(&project_id, build_name.as_deref(), &options)
                    .await
            })
        })
    }

    pub async fn create_build_run(
        &self,
        project_id: &str,
        prototype: &BuildRunPrototype,
    ) -> Result<DetailedResponse<BuildRun>> {
        let path = expand_path(BUILD_RUNS, &[("project_id", project_id)])?;
        let request = OperationRequest::post("create_build_run", path).json(prototype)?;
        self.execute(request).await
    }

    pub async fn get_build_run(
        &self,
        project_id: &str,
        name: &str,
    ) -> Result<DetailedResponse<BuildRun>> {
        let path = expand_path(BUILD_RUN, &[("project_id", project_id), ("name", name)])?;
        self.execute(OperationRequest::get("get_build_run", path)).await
    }

    pub async fn delete_build_run(
        &self,
        project_id: &str,
        name: &str,
    ) -> Result<DetailedResponse<()>> {
        let path = expand_path(BUILD_RUN, &[("project_id", project_id), ("name", name)])?;
        self.execute_empty(OperationRequest::delete("delete_build_run", path))
            .await
    }
}
