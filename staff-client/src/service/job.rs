//! Job remote access service

use async_trait::async_trait;
use shared::models::add_job_to_collection_if_missing;
use shared::{Job, Page, QueryOptions};

use super::JOBS_URL;
use crate::http::HttpClient;
use crate::{ClientError, ClientResult};

/// Job API
#[async_trait]
pub trait JobApi: Send + Sync {
    async fn create(&self, job: &Job) -> ClientResult<Job>;
    async fn update(&self, job: &Job) -> ClientResult<Job>;
    async fn partial_update(&self, job: &Job) -> ClientResult<Job>;
    async fn find(&self, id: i64) -> ClientResult<Job>;
    async fn query(&self, options: &QueryOptions) -> ClientResult<Page<Job>>;
    async fn delete(&self, id: i64) -> ClientResult<()>;

    fn add_job_to_collection_if_missing(
        &self,
        collection: &[Job],
        candidates: &[Option<&Job>],
    ) -> Vec<Job> {
        add_job_to_collection_if_missing(collection, candidates)
    }
}

/// Job service backed by an [`HttpClient`]
#[derive(Debug, Clone)]
pub struct JobService<H> {
    http: H,
}

impl<H: HttpClient> JobService<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    fn item_url(job: &Job) -> ClientResult<String> {
        job.id
            .map(|id| format!("{}/{}", JOBS_URL, id))
            .ok_or(ClientError::MissingIdentifier("Job"))
    }
}

#[async_trait]
impl<H: HttpClient> JobApi for JobService<H> {
    async fn create(&self, job: &Job) -> ClientResult<Job> {
        self.http.post(JOBS_URL, job).await
    }

    async fn update(&self, job: &Job) -> ClientResult<Job> {
        let url = Self::item_url(job)?;
        self.http.put(&url, job).await
    }

    async fn partial_update(&self, job: &Job) -> ClientResult<Job> {
        let url = Self::item_url(job)?;
        self.http.patch(&url, job).await
    }

    async fn find(&self, id: i64) -> ClientResult<Job> {
        self.http.get(&format!("{}/{}", JOBS_URL, id)).await
    }

    async fn query(&self, options: &QueryOptions) -> ClientResult<Page<Job>> {
        self.http.get_page(JOBS_URL, &options.to_query_pairs()).await
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("{}/{}", JOBS_URL, id)).await
    }
}
