//! Secrets

use super::client::CodeEngineClient;
use super::request::{expand_path, require, DetailedResponse, OperationRequest};
use crate::error::Result;
use crate::models::{ListOptions, Secret, SecretList, SecretPrototype, SecretReplace};
use crate::pager::Pager;

const SECRETS: &str = "/projects/{project_id}/secrets";
const SECRET: &str = "/projects/{project_id}/secrets/{name}";

impl CodeEngineClient {
    pub async fn list_secrets(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<DetailedResponse<SecretList>> {
        let path = expand_path(SECRETS, &[("project_id", project_id)])?;
        self.execute(OperationRequest::get("list_secrets", path).list_options(options))
            .await
    }

    pub fn secrets_pager(&self, project_id: &str, limit: Option<i64>) -> Pager<'_, Secret> {
        let project_id = project_id.to_string();
        self.paged(limit, move |options| {
            let project_id = project_id.clone();
            Box::pin(async move { self.list_secrets(&project_id, &options).await })
        })
    }

    pub async fn create_secret(
        &self,
        project_id: &str,
        prototype: &SecretPrototype,
    ) -> Result<DetailedResponse<Secret>> {
        let path = expand_path(SECRETS, &[("project_id", project_id)])?;
        require("name", &prototype.name)?;
        require("format", prototype.format.as_str())?;
        let request = OperationRequest::post("create_secret", path).json(prototype)?;
        self.execute(request).await
    }

    pub async fn get_secret(&self, project_id: &str, name: &str) -> Result<DetailedResponse<Secret>> {
        let path = expand_path(SECRET, &[("project_id", project_id), ("name", name)])?;
        self.execute(OperationRequest::get("get_secret", path)).await
    }

    /// Replace format and data of a secret as a whole.
    pub async fn replace_secret(
        &self,
        project_id: &str,
        name: &str,
        if_match: &str,
        replacement: &SecretReplace,
    ) -> Result<DetailedResponse<Secret>> {
        let path = expand_path(SECRET, &[("project_id", project_id), ("name", name)])?;
        require("format", replacement.format.as_str())?;
        let request = OperationRequest::put("replace_secret", path)
            .if_match(if_match)?
            .json(replacement)?;
        self.execute(request).await
    }

    pub async fn delete_secret(&self, project_id: &str, name: &str) -> Result<DetailedResponse<()>> {
        let path = expand_path(SECRET, &[("project_id", project_id), ("name", name)])?;
        self.execute_empty(OperationRequest::delete("delete_secret", path))
            .await
    }
}
