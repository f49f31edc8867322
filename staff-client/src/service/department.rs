//! Department remote access service
//!
//! The employee screens only need `query` (for the picker) and `find`, but
//! the full CRUD set is exposed for the department feature.

use async_trait::async_trait;
use shared::models::add_department_to_collection_if_missing;
use shared::{Department, Page, QueryOptions};

use super::DEPARTMENTS_URL;
use crate::http::HttpClient;
use crate::{ClientError, ClientResult};

/// Department API
#[async_trait]
pub trait DepartmentApi: Send + Sync {
    async fn create(&self, department: &Department) -> ClientResult<Department>;
    async fn update(&self, department: &Department) -> ClientResult<Department>;
    async fn partial_update(&self, department: &Department) -> ClientResult<Department>;
    async fn find(&self, id: i64) -> ClientResult<Department>;
    async fn query(&self, options: &QueryOptions) -> ClientResult<Page<Department>>;
    async fn delete(&self, id: i64) -> ClientResult<()>;

    fn add_department_to_collection_if_missing(
        &self,
        collection: &[Department],
        candidates: &[Option<&Department>],
    ) -> Vec<Department> {
        add_department_to_collection_if_missing(collection, candidates)
    }
}

/// Department service backed by an [`HttpClient`]
#[derive(Debug, Clone)]
pub struct DepartmentService<H> {
    http: H,
}

impl<H: HttpClient> DepartmentService<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    fn item_url(department: &Department) -> ClientResult<String> {
        department
            .id
            .map(|id| format!("{}/{}", DEPARTMENTS_URL, id))
            .ok_or(ClientError::MissingIdentifier("Department"))
    }
}

#[async_trait]
impl<H: HttpClient> DepartmentApi for DepartmentService<H> {
    async fn create(&self, department: &Department) -> ClientResult<Department> {
        self.http.post(DEPARTMENTS_URL, department).await
    }

    async fn update(&self, department: &Department) -> ClientResult<Department> {
        let url = Self::item_url(department)?;
        self.http.put(&url, department).await
    }

    async fn partial_update(&self, department: &Department) -> ClientResult<Department> {
        let url = Self::item_url(department)?;
        self.http.patch(&url, department).await
    }

    async fn find(&self, id: i64) -> ClientResult<Department> {
        self.http.get(&format!("{}/{}", DEPARTMENTS_URL, id)).await
    }

    async fn query(&self, options: &QueryOptions) -> ClientResult<Page<Department>> {
        self.http
            .get_page(DEPARTMENTS_URL, &options.to_query_pairs())
            .await
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("{}/{}", DEPARTMENTS_URL, id)).await
    }
}
