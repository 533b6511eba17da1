//! Allowed outbound destinations

use super::client::CodeEngineClient;
use super::request::{expand_path, DetailedResponse, OperationRequest};
use crate::error::Result;
use crate::models::{
    AllowedOutboundDestination, AllowedOutboundDestinationList,
    AllowedOutboundDestinationPatch, AllowedOutboundDestinationPrototype, ListOptions,
};
use crate::pager::Pager;

const COLLECTION: &str = "/projects/{project_id}/allowed_outbound_destinations";
const MEMBER: &str = "/projects/{project_id}/allowed_outbound_destinations/{name}";

impl CodeEngineClient {
    pub async fn list_allowed_outbound_destinations(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<DetailedResponse<AllowedOutboundDestinationList>> {
        let path = expand_path(COLLECTION, &[("project_id", project_id)])?;
        let request = OperationRequest::get("list_allowed_outbound_destinations", path)
            .list_options(options);
        self.execute(request).await
    }

    pub fn allowed_outbound_destinations_pager(
        &self,
        project_id: &str,
        limit: Option<i64>,
    ) -> Pager<'_, AllowedOutboundDestination> {
        let project_id = project_id.to_string();
        self.paged(limit, move |options| {
            let project_id = project_id.clone();
            Box::pin(async move {
                self.list_allowed_outbound_destinations(&project_id, &options)
                    .await
            })
        })
    }

    pub async fn create_allowed_outbound_destination(
        &self,
        project_id: &str,
        prototype: &AllowedOutboundDestinationPrototype,
    ) -> Result<DetailedResponse<AllowedOutboundDestination>> {
        let path = expand_path(COLLECTION, &[("project_id", project_id)])?;
        let request =
            OperationRequest::post("create_allowed_outbound_destination", path).json(prototype)?;
        self.execute(request).await
    }

    pub async fn get_allowed_outbound_destination(
        &self,
        project_id: &str,
        name: &str,
    ) -> Result<DetailedResponse<AllowedOutboundDestination>> {
        let path = expand_path(MEMBER, &[("project_id", project_id), ("name", name)])?;
        self.execute(OperationRequest::get("get_allowed_outbound_destination", path))
            .await
    }

    pub async fn delete_allowed_outbound_destination(
        &self,
        project_id: &str,
        name: &str,
    ) -> Result<DetailedResponse<()>> {
        let path = expand_path(MEMBER, &[("project_id", project_id), ("name", name)])?;
        self.execute_empty(OperationRequest::delete(
            "delete_allowed_outbound_destination",
            path,
        ))
        .await
    }

    pub async fn update_allowed_outbound_destination(
        &self,
        project_id: &str,
        name: &str,
        if_match: &str,
        patch: &AllowedOutboundDestinationPatch,
    ) -> Result<DetailedResponse<AllowedOutboundDestination>> {
        let path = expand_path(MEMBER, &[("project_id", project_id), ("name", name)])?;
        let request = OperationRequest::patch("update_allowed_outbound_destination", path)
            .if_match(if_match)?
            .merge_patch(patch)?;
        self.execute(request).await
    }
}
