//! Jobs and job runs

use super::client::CodeEngineClient;
use super::request::{expand_path, require, DetailedResponse, OperationRequest};
use crate::error::Result;
use crate::models::{
    Job, JobList, JobPatch, JobPrototype, JobRun, JobRunList, JobRunPrototype, ListOptions,
};
use crate::pager::Pager;

const JOBS: &str = "/projects/{project_id}/jobs";
const JOB: &str = "/projects/{project_id}/jobs/{name}";
const JOB_RUNS: &str = "/projects/{project_id}/job_runs";
const JOB_RUN: &str = "/projects/{project_id}/job_runs/{name}";

impl CodeEngineClient {
    pub async fn list_jobs(
        &self,
        project_id: &str,
        options: &ListOptions,
    ) -> Result<DetailedResponse<JobList>> {
        let path = expand_path(JOBS, &[("project_id", project_id)])?;
        self.execute(OperationRequest::get("list_jobs", path).list_options(options))
            .await
    }

    pub fn jobs_pager(&self, project_id: &str, limit: Option<i64>) -> Pager<'_, Job> {
        let project_id = project_id.to_string();
        self.paged(limit, move |options| {
            let project_id = project_id.clone();
            Box::pin(async move { self.list_jobs(&project_id, &options).await })
        })
    }

    pub async fn create_job(
        &self,
        project_id: &str,
        prototype: &JobPrototype,
    ) -> Result<DetailedResponse<Job>> {
        let path = expand_path(JOBS, &[("project_id", project_id)])?;
        require("image_reference", &prototype.image_reference)?;
        require("name", &prototype.name)?;
        let request = OperationRequest::post("create_job", path).json(prototype)?;
        self.execute(request).await
    }

    pub async fn get_job(&self, project_id: &str, name: &str) -> Result<DetailedResponse<Job>> {
        let path = expand_path(JOB, &[("project_id", project_id), ("name", name)])?;
        self.execute(OperationRequest::get("get_job", path)).await
    }

    pub async fn delete_job(&self, project_id: &str, name: &str) -> Result<DetailedResponse<()>> {
        let path = expand_path(JOB, &[("project_id", project_id), ("name", name)])?;
        self.execute_empty(OperationRequest::delete("delete_job", path))
            .await
    }

    pub async fn update_job(
        &self,
        project_id: &str,
        name: &str,
        if_match: &str,
        patch: &JobPatch,
    ) -> Result<DetailedResponse<Job>> {
        let path = expand_path(JOB, &[("project_id", project_id), ("name", name)])?;
        let request = OperationRequest::patch("update_job", path)
            .if_match(if_match)?
            .merge_patch(patch)?;
        self.execute(request).await
    }

    /// List job runs, optionally only those of `job_name`.
    pub async fn list_job_runs(
        &self,
        project_id: &str,
        job_name: Option<&str>,
        options: &ListOptions,
    ) -> Result<DetailedResponse<JobRunList>> {
        let path = expand_path(JOB_RUNS, &[("project_id", project_id)])?;
        let request = OperationRequest::get("list_job_runs", path)
            .query("job_name", job_name.filter(|name| !name.is_empty()))
            .list_options(options);
        self.execute(request).await
    }

    pub fn job_runs_pager(
        &self,
        project_id: &str,
        job_name: Option<&str>,
        limit: Option<i64>,
    ) -> Pager<'_, JobRun> {
        let project_id = project_id.to_string();
        let job_name = job_name.map(str::to_string);
        self.paged(limit, move |options| {
            let (project_id, job_name) = (project_id.clone(), job_name.clone());
            Box::pin(async move {
                self.list_job_runs(&project_id, job_name.as_deref(), &options)
                    .await
            })
        })
    }

    /// Submit a job run, either of an existing job (`job_name`) or of an
    /// image given inline.
    pub async fn create_job_run(
        &self,
        project_id: &str,
        prototype: &JobRunPrototype,
    ) -> Result<DetailedResponse<JobRun>> {
        let path = expand_path(JOB_RUNS, &[("project_id", project_id)])?;
        let request = OperationRequest::post("create_job_run", path).json(prototype)?;
        self.execute(request).await
    }

    pub async fn get_job_run(
        &self,
        project_id: &str,
        name: &str,
    ) -> Result<DetailedResponse<JobRun>> {
        let path = expand_path(JOB_RUN, &[("project_id", project_id), ("name", name)])?;
        self.execute(OperationRequest::get("get_job_run", path)).await
    }

    pub async fn delete_job_run(
        &self,
        project_id: &str,
        name: &str,
    ) -> Result<DetailedResponse<()>> {
        let path = expand_path(JOB_RUN, &[("project_id", project_id), ("name", name)])?;
        self.execute_empty(OperationRequest::delete("delete_job_run", path))
            .await
    }
}
