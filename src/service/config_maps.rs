//! Config maps

use super::client::CodeEngineClient;
use super::request::{expand_path, require, DetailedResponse, OperationRequest};
use crate::error::Result;
use crate::models::{ConfigMap, ConfigMapList, ConfigMapPrototype, ConfigMapReplace, ListOptions};
use crate::pager::Pager;

const CONFIG_MAPS: &str = "/projects/{project_id}/config_maps";
const CONFIG_MAP: &str = "/projects/{project_id}/config_maps/{name}";

impl CodeEngineClient {
    pub async fn list_config_maps(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<DetailedResponse<ConfigMapList>> {
        let path = expand_path(CONFIG_MAPS, &[("project_id", project_id)])?;
        self.execute(OperationRequest::get("list_config_maps", path).list_options(options))
            .await
    }

    pub fn config_maps_pager(&self, project_id: &str, limit: Option<i64>) -> Pager<'_, ConfigMap> {
        let project_id = project_id.to_string();
        self.paged(limit, move |options| {
            let project_id = project_id.clone();
            Box::pin(async move { self.list_config_maps(&project_id, &options).await })
        })
    }

    pub async fn create_config_map(
        &self,
        project_id: &str,
        prototype: &ConfigMapPrototype,
    ) -> Result<DetailedResponse<ConfigMap>> {
        let path = expand_path(CONFIG_MAPS, &[("project_id", project_id)])?;
        require("name", &prototype.name)?;
        let request = OperationRequest::post("create_config_map", path).json(prototype)?;
        self.execute(request).await
    }

    pub async fn get_config_map(
        &self,
        project_id: &str,
        name: &str,
    ) -> Result<DetailedResponse<ConfigMap>> {
        let path = expand_path(CONFIG_MAP, &[("project_id", project_id), ("name", name)])?;
        self.execute(OperationRequest::get("get_config_map", path)).await
    }

    /// Replace the data of a config map. Keys missing from `replacement`
    /// are removed.
    pub async fn replace_config_map(
        &self,
        project_id: &str,
        name: &str,
        if_match: &str,
        replacement: &ConfigMapReplace,
    ) -> Result<DetailedResponse<ConfigMap>> {
        let path = expand_path(CONFIG_MAP, &[("project_id", project_id), ("name", name)])?;
        let request = OperationRequest::put("replace_config_map", path)
            .if_match(if_match)?
            .json(replacement)?;
        self.execute(request).await
    }

    pub async fn delete_config_map(
        &self,
        project_id: &str,
        name: &str,
    ) -> Result<DetailedResponse<()>> {
        let path = expand_path(CONFIG_MAP, &[("project_id", project_id), ("name", name)])?;
        self.execute_empty(OperationRequest::delete("delete_config_map", path))
            .await
    }
}
