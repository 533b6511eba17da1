//! Domain mappings

use super::client::CodeEngineClient;
use super::request::{expand_path, require, DetailedResponse, OperationRequest};
use crate::error::Result;
use crate::models::{
    DomainMapping, DomainMappingList, DomainMappingPatch, DomainMappingPrototype, ListOptions,
};
use crate::pager::Pager;

const DOMAIN_MAPPINGS: &str = "/projects/{project_id}/domain_mappings";
const DOMAIN_MAPPING: &str = "/projects/{project_id}/domain_mappings/{name}";

impl CodeEngineClient {
    pub async fn list_domain_mappings(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<DetailedResponse<DomainMappingList>> {
        let path = expand_path(DOMAIN_MAPPINGS, &[("project_id", project_id)])?;
        let request = OperationRequest::get("list_domain_mappings", path).list_options(options);
        self.execute(request).await
    }

    pub fn domain_mappings_pager(
        &self,
        project_id: &str,
        limit: Option<i64>,
    ) -> Pager<'_, DomainMapping> {
        let project_id = project_id.to_string();
        self.paged(limit, move |options| {
            let project_id = project_id.clone();
            Box::pin(async move { self.list_domain_mappings(&project_id, &options).await })
        })
    }

    pub async fn create_domain_mapping(
        &self,
        project_id: &str,
        prototype: &DomainMappingPrototype,
    ) -> Result<DetailedResponse<DomainMapping>> {
        let path = expand_path(DOMAIN_MAPPINGS, &[("project_id", project_id)])?;
        require("name", &prototype.name)?;
        require("tls_secret", &prototype.tls_secret)?;
        let request = OperationRequest::post("create_domain_mapping", path).json(prototype)?;
        self.execute(request).await
    }

    pub async fn get_domain_mapping(
        &self,
        project_id: &str,
        name: &str,
    ) -> Result<DetailedResponse<DomainMapping>> {
        let path = expand_path(DOMAIN_MAPPING, &[("project_id", project_id), ("name", name)])?;
        self.execute(OperationRequest::get("get_domain_mapping", path))
            .await
    }

    pub async fn delete_domain_mapping(
        &self,
        project_id: &str,
        name: &str,
    ) -> Result<DetailedResponse<()>> {
        let path = expand_path(DOMAIN_MAPPING, &[("project_id", project_id), ("name", name)])?;
        self.execute_empty(OperationRequest::delete("delete_domain_mapping", path))
            .await
    }

    pub async fn update_domain_mapping(
        &self,
        project_id: &str,
        name: &str,
        if_match: &str,
        patch: &DomainMappingPatch,
    ) -> Result<DetailedResponse<DomainMapping>> {
        let path = expand_path(DOMAIN_MAPPING, &[("project_id", project_id), ("name", name)])?;
        let request = OperationRequest::patch("update_domain_mapping", path)
            .if_match(if_match)?
            .merge_patch(patch)?;
        self.execute(request).await
    }
}
