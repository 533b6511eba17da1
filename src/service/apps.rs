//! Apps, app revisions and app instances

use super::client::CodeEngineClient;
use super::request::{expand_path, require, DetailedResponse, OperationRequest};
use crate::error::Result;
use crate::models::{
    App, AppInstance, AppInstanceList, AppList, AppPatch, AppPrototype, AppRevision,
    AppRevisionList, ListOptions,
};
use crate::pager::Pager;

const APPS: &str = "/projects/{project_id}/apps";
const APP: &str = "/projects/{project_id}/apps/{name}";
const REVISIONS: &str = "/projects/{project_id}/apps/{app_name}/revisions";
const REVISION: &str = "/projects/{project_id}/apps/{app_name}/revisions/{name}";
const INSTANCES: &str = "/projects/{project_id}/apps/{app_name}/instances";

impl CodeEngineClient {
    pub async fn list_apps(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<DetailedResponse<AppList>> {
        let path = expand_path(APPS, &[("project_id", project_id)])?;
        self.execute(OperationRequest::get("list_apps", path).list_options(options))
            .await
    }

    pub fn apps_pager(&self, project_id: &str, limit: Option<i64>) -> Pager<'_, App> {
        let project_id = project_id.to_string();
        self.paged(limit, move |options| {
            let project_id = project_id.clone();
            Box::pin(async move { self.list_apps(&project_id, &options).await })
        })
    }

    pub async fn create_app(
        &self,
        project_id: &str,
        prototype: &AppPrototype,
    ) -> Result<DetailedResponse<App>> {
        let path = expand_path(APPS, &[("project_id", project_id)])?;
        require("image_reference", &prototype.image_reference)?;
        require("name", &prototype.name)?;
        let request = OperationRequest::post("create_app", path).json(prototype)?;
        self.execute(request).await
    }

    pub async fn get_app(&self, project_id: &str, name: &str) -> Result<DetailedResponse<App>> {
        let path = expand_path(APP, &[("project_id", project_id), ("name", name)])?;
        self.execute(OperationRequest::get("get_app", path)).await
    }

    pub async fn delete_app(&self, project_id: &str, name: &str) -> Result<DetailedResponse<()>> {
        let path = expand_path(APP, &[("project_id", project_id), ("name", name)])?;
        self.execute_empty(OperationRequest::delete("delete_app", path))
            .await
    }

    /// Merge-patch an app. `if_match` is the `entity_tag` the change is
    /// based on; the service answers 412 when the app moved on since.
    pub async fn update_app(
        &self,
        project_id: &str,
        name: &str,
        if_match: &str,
        patch: &AppPatch,
    ) -> Result<DetailedResponse<App>> {
        let path = expand_path(APP, &[("project_id", project_id), ("name", name)])?;
        let request = OperationRequest::patch("update_app", path)
            .if_match(if_match)?
            .merge_patch(patch)?;
        self.execute(request).await
    }

    pub async fn list_app_revisions(
        &self,
        project_id: &str,
        app_name: &str,
        options: &ListOptions,
    ) -> Result<DetailedResponse<AppRevisionList>> {
        let path = expand_path(REVISIONS, &[("project_id", project_id), ("app_name", app_name)])?;
        self.execute(OperationRequest::get("list_app_revisions", path).list_options(options))
            .await
    }

    pub fn app_revisions_pager(
        &self,
        project_id: &str,
        app_name: &str,
        limit: Option<i64>,
    ) -> Pager<'_, AppRevision> {
        let (project_id, app_name) = (project_id.to_string(), app_name.to_string());
        self.paged(limit, move |options| {
            let (project_id, app_name) = (project_id.clone(), app_name.clone());
            Box::pin(async move {
                self.list_app_revisions(&project_id, &app_name, &options)
                    .await
            })
        })
    }

    pub async fn get_app_revision(
        &self,
        project_id: &str,
        app_name: &str,
        name: &str,
    ) -> Result<DetailedResponse<AppRevision>> {
        let path = expand_path(
            REVISION,
            &[("project_id", project_id), ("app_name", app_name), ("name", name)],
        )?;
        self.execute(OperationRequest::get("get_app_revision", path))
            .await
    }

    pub async fn delete_app_revision(
        &self,
        project_id: &str,
        app_name: &str,
        name: &str,
    ) -> Result<DetailedResponse<()>> {
        let path = expand_path(
            REVISION,
            &[("project_id", project_id), ("app_name", app_name), ("name", name)],
        )?;
        self.execute_empty(OperationRequest::delete("delete_app_revision", path))
            .await
    }

    pub async fn list_app_instances(
        &self,
        project_id: &str,
        app_name: &str,
        options: &ListOptions,
    ) -> Result<DetailedResponse<AppInstanceList>> {
        let path = expand_path(INSTANCES, &[("project_id", project_id), ("app_name", app_name)])?;
        self.execute(OperationRequest::get("list_app_instances", path).list_options(options))
            .await
    }

    pub fn app_instances_pager(
        &self,
        project_id: &str,
        app_name: &str,
        limit: Option<i64>,
    ) -> Pager<'_, AppInstance> {
        let (project_id, app_name) = (project_id.to_string(), app_name.to_string());
        self.paged(limit, move |options| {
            let (project_id, app_name) = (project_id.clone(), app_name.clone());
            Box::pin(async move {
                self.list_app_instances(&project_id, &app_name, &options)
                    .await
            })
        })
    }
}
