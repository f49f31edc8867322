//! Employee remote access service

use async_trait::async_trait;
use shared::models::add_employee_to_collection_if_missing;
use shared::{Department, Employee, Page, QueryOptions};

use super::{DEPARTMENTS_URL, EMPLOYEES_URL};
use crate::http::HttpClient;
use crate::{ClientError, ClientResult};

/// Employee API
///
/// Views depend on this trait rather than on [`EmployeeService`] so they can
/// be driven by an in-memory backend.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// POST a new employee; the response carries the assigned id
    async fn create(&self, employee: &Employee) -> ClientResult<Employee>;
    /// PUT the full record
    async fn update(&self, employee: &Employee) -> ClientResult<Employee>;
    /// PATCH only the fields that are set
    async fn partial_update(&self, employee: &Employee) -> ClientResult<Employee>;
    async fn find(&self, id: i64) -> ClientResult<Employee>;
    async fn find_department_by_id(&self, id: i64) -> ClientResult<Department>;
    /// Unpaginated list of a department's employees
    async fn find_by_department(&self, department_id: i64) -> ClientResult<Vec<Employee>>;
    async fn employees_without_departments(&self) -> ClientResult<Vec<Employee>>;
    /// Free-text search; matching is decided by the backend
    async fn find_by_string(&self, text: &str) -> ClientResult<Vec<Employee>>;
    async fn salary_greater_than(&self, salary: i64) -> ClientResult<Vec<Employee>>;
    async fn query(&self, options: &QueryOptions) -> ClientResult<Page<Employee>>;
    async fn delete(&self, id: i64) -> ClientResult<()>;

    fn add_employee_to_collection_if_missing(
        &self,
        collection: &[Employee],
        candidates: &[Option<&Employee>],
    ) -> Vec<Employee> {
        add_employee_to_collection_if_missing(collection, candidates)
    }
}

/// Employee service backed by an [`HttpClient`]
#[derive(Debug, Clone)]
pub struct EmployeeService<H> {
    http: H,
}

impl<H: HttpClient> EmployeeService<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    fn item_url(employee: &Employee) -> ClientResult<String> {
        employee
            .id
            .map(|id| format!("{}/{}", EMPLOYEES_URL, id))
            .ok_or(ClientError::MissingIdentifier("Employee"))
    }

    /// Search text as a single path segment. Empty and dot-only text would
    /// resolve to another endpoint, so it is rejected.
    fn search_url(text: &str) -> ClientResult<String> {
        if matches!(text, "" | "." | "..") {
            return Err(ClientError::Validation(format!(
                "search text {:?} cannot be used as a path segment",
                text
            )));
        }
        Ok(format!(
            "{}/search/{}",
            EMPLOYEES_URL,
            urlencoding::encode(text)
        ))
    }
}

#[async_trait]
impl<H: HttpClient> EmployeeApi for EmployeeService<H> {
    async fn create(&self, employee: &Employee) -> ClientResult<Employee> {
        tracing::debug!(email = ?employee.email, "Creating employee");
        self.http.post(EMPLOYEES_URL, employee).await
    }

    async fn update(&self, employee: &Employee) -> ClientResult<Employee> {
        let url = Self::item_url(employee)?;
        tracing::debug!(id = ?employee.id, "Updating employee");
        self.http.put(&url, employee).await
    }

    async fn partial_update(&self, employee: &Employee) -> ClientResult<Employee> {
        let url = Self::item_url(employee)?;
        tracing::debug!(id = ?employee.id, "Partially updating employee");
        self.http.patch(&url, employee).await
    }

    async fn find(&self, id: i64) -> ClientResult<Employee> {
        self.http.get(&format!("{}/{}", EMPLOYEES_URL, id)).await
    }

    async fn find_department_by_id(&self, id: i64) -> ClientResult<Department> {
        self.http.get(&format!("{}/{}", DEPARTMENTS_URL, id)).await
    }

    async fn find_by_department(&self, department_id: i64) -> ClientResult<Vec<Employee>> {
        self.http
            .get(&format!("{}/report/{}", EMPLOYEES_URL, department_id))
            .await
    }

    async fn employees_without_departments(&self) -> ClientResult<Vec<Employee>> {
        self.http
            .get(&format!("{}/withoutdepartments/", EMPLOYEES_URL))
            .await
    }

    async fn find_by_string(&self, text: &str) -> ClientResult<Vec<Employee>> {
        let url = Self::search_url(text)?;
        self.http.get(&url).await
    }

    async fn salary_greater_than(&self, salary: i64) -> ClientResult<Vec<Employee>> {
        self.http
            .get(&format!("{}/salarygreaterthan/{}", EMPLOYEES_URL, salary))
            .await
    }

    async fn query(&self, options: &QueryOptions) -> ClientResult<Page<Employee>> {
        self.http
            .get_page(EMPLOYEES_URL, &options.to_query_pairs())
            .await
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        tracing::debug!(id, "Deleting employee");
        self.http.delete(&format!("{}/{}", EMPLOYEES_URL, id)).await
    }
}
