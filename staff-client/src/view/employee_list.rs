//! Employee list view
//!
//! Paginated, sortable employee list with three alternative load strategies
//! (by department, without department, free-text search). After the first
//! page arrives the department catalog is fetched once and used to fill in
//! department names on the listed employees.
//!
//! [`EmployeeListState`] holds everything the screen renders and changes only
//! through [`EmployeeListState::apply`]. [`EmployeeListView`] pairs that state
//! with the services and runs one request per operation.

use shared::{Department, Employee, Page, PageLinks, QueryOptions, sort_keys};

use super::sequence::{RequestSeq, RequestToken};
use super::{DepartmentFilter, DialogOutcome};
use crate::config::ITEMS_PER_PAGE;
use crate::service::{DepartmentApi, EmployeeApi};

/// Message logged when an employee load fails
pub const LOAD_FAILED_MESSAGE: &str = "Employee query failed";

/// Outcome of one request, fed back into [`EmployeeListState::apply`]
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// A page from the pageable list endpoint
    PageLoaded {
        token: RequestToken,
        page: Page<Employee>,
    },
    /// An unpaginated result (by department, without department, search)
    ListLoaded {
        token: RequestToken,
        items: Vec<Employee>,
    },
    LoadFailed {
        token: RequestToken,
    },
    DepartmentsLoaded {
        token: RequestToken,
        departments: Vec<Department>,
    },
    DepartmentsFailed {
        token: RequestToken,
    },
}

/// Render state of the employee list
#[derive(Debug, Clone)]
pub struct EmployeeListState {
    pub employees: Vec<Employee>,
    pub is_loading: bool,
    pub items_per_page: u32,
    pub links: PageLinks,
    /// Zero-based page index
    pub page: u32,
    pub predicate: String,
    pub ascending: bool,
    pub search: String,
    /// Department catalog used for name labelling
    pub departments: Vec<Department>,
    departments_requested: bool,
    seq: RequestSeq,
    department_seq: RequestSeq,
}

impl Default for EmployeeListState {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

impl EmployeeListState {
    pub fn new(items_per_page: u32) -> Self {
        let mut links = PageLinks::new();
        links.insert("last".to_string(), 0);
        Self {
            employees: Vec::new(),
            is_loading: false,
            items_per_page,
            links,
            page: 0,
            predicate: "id".to_string(),
            ascending: true,
            search: String::new(),
            departments: Vec::new(),
            departments_requested: false,
            seq: RequestSeq::new(),
            department_seq: RequestSeq::new(),
        }
    }

    /// Sort keys for the current predicate and direction
    pub fn sort(&self) -> Vec<String> {
        sort_keys(&self.predicate, self.ascending)
    }

    /// Options for the current page
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions::all()
            .paginate(self.page, self.items_per_page)
            .sorted_by(self.sort())
    }

    /// Start a load that appends to the current list
    pub fn begin_load(&mut self) -> RequestToken {
        self.is_loading = true;
        self.seq.issue()
    }

    /// Start a load that replaces the list: page 0, empty list
    pub fn begin_fresh_load(&mut self) -> RequestToken {
        self.page = 0;
        self.employees.clear();
        self.begin_load()
    }

    /// Start the department catalog fetch
    pub fn begin_department_load(&mut self) -> RequestToken {
        self.departments_requested = true;
        self.department_seq.issue()
    }

    /// Whether the department catalog still has to be fetched
    pub fn needs_departments(&self) -> bool {
        !self.departments_requested
    }

    /// Apply a request outcome. Returns `false` when the event was stale and
    /// therefore ignored.
    pub fn apply(&mut self, event: ListEvent) -> bool {
        match event {
            ListEvent::PageLoaded { token, page } => {
                if !self.seq.is_current(token) {
                    return self.discard(token);
                }
                self.is_loading = false;
                self.links = page.links;
                self.employees.extend(page.items);
                self.label_departments();
            }
            ListEvent::ListLoaded { token, items } => {
                if !self.seq.is_current(token) {
                    return self.discard(token);
                }
                self.is_loading = false;
                self.employees.extend(items);
                self.label_departments();
            }
            ListEvent::LoadFailed { token } => {
                if !self.seq.is_current(token) {
                    return self.discard(token);
                }
                self.is_loading = false;
            }
            ListEvent::DepartmentsLoaded { token, departments } => {
                if !self.department_seq.is_current(token) {
                    return self.discard(token);
                }
                self.departments = departments;
                self.label_departments();
            }
            ListEvent::DepartmentsFailed { token } => {
                if !self.department_seq.is_current(token) {
                    return self.discard(token);
                }
                // Allow a later load to try again
                self.departments_requested = false;
            }
        }
        true
    }

    fn discard(&self, token: RequestToken) -> bool {
        tracing::debug!(token = token.value(), "Discarding stale response");
        false
    }

    /// Fill department names from the cached catalog, matching by id.
    /// Employees whose department is not in the catalog keep what they have.
    pub fn label_departments(&mut self) {
        if self.departments.is_empty() {
            return;
        }
        for employee in &mut self.employees {
            let Some(department) = employee.department.as_mut() else {
                continue;
            };
            let Some(id) = department.id else {
                continue;
            };
            if let Some(name) = self
                .departments
                .iter()
                .find(|d| d.id == Some(id))
                .and_then(|d| d.department_name.clone())
            {
                department.department_name = Some(name);
            }
        }
    }

    /// Selector entries: all, without department, then each known department
    pub fn department_options(&self) -> Vec<DepartmentFilter> {
        let mut options = vec![
            DepartmentFilter::AllDepartments,
            DepartmentFilter::WithoutDepartment,
        ];
        options.extend(
            self.departments
                .iter()
                .filter_map(|d| d.id)
                .map(DepartmentFilter::Department),
        );
        options
    }
}

/// Employee list view
pub struct EmployeeListView<E, D> {
    employee_service: E,
    department_service: D,
    state: EmployeeListState,
}

impl<E: EmployeeApi, D: DepartmentApi> EmployeeListView<E, D> {
    pub fn new(employee_service: E, department_service: D, items_per_page: u32) -> Self {
        Self {
            employee_service,
            department_service,
            state: EmployeeListState::new(items_per_page),
        }
    }

    pub fn state(&self) -> &EmployeeListState {
        &self.state
    }

    pub fn employees(&self) -> &[Employee] {
        &self.state.employees
    }

    /// Row identity for list rendering
    pub fn track_id(&self, employee: &Employee) -> Option<i64> {
        employee.id
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.state.search = text.into();
    }

    pub async fn init(&mut self) {
        self.load_all().await;
    }

    /// Fetch the current page and append it
    pub async fn load_all(&mut self) {
        let token = self.state.begin_load();
        self.fetch_page(token).await;
    }

    /// Zero the page, clear the list and reload
    pub async fn reset(&mut self) {
        let token = self.state.begin_fresh_load();
        self.fetch_page(token).await;
    }

    pub async fn load_page(&mut self, page: u32) {
        self.state.page = page;
        self.load_all().await;
    }

    /// Change the ordering and reload from the first page
    pub async fn sort_by(&mut self, predicate: impl Into<String>, ascending: bool) {
        self.state.predicate = predicate.into();
        self.state.ascending = ascending;
        self.reset().await;
    }

    pub async fn load_by_department(&mut self, filter: DepartmentFilter) {
        let result = match filter {
            DepartmentFilter::AllDepartments => {
                self.reset().await;
                return;
            }
            DepartmentFilter::WithoutDepartment => {
                let token = self.state.begin_fresh_load();
                (token, self.employee_service.employees_without_departments().await)
            }
            DepartmentFilter::Department(id) => {
                let token = self.state.begin_fresh_load();
                (token, self.employee_service.find_by_department(id).await)
            }
        };
        self.finish_list(filter, result);
    }

    /// Search with the current search text
    pub async fn go_search(&mut self) {
        let token = self.state.begin_fresh_load();
        let result = self.employee_service.find_by_string(&self.state.search).await;
        match result {
            Ok(items) => {
                tracing::debug!(search = %self.state.search, count = items.len(), "Search loaded");
                self.state.apply(ListEvent::ListLoaded { token, items });
            }
            Err(e) => {
                tracing::error!(error = %e, "{}", LOAD_FAILED_MESSAGE);
                self.state.apply(ListEvent::LoadFailed { token });
            }
        }
    }

    /// Fetch the department catalog used for name labelling
    pub async fn load_departments(&mut self) {
        let token = self.state.begin_department_load();
        match self.department_service.query(&QueryOptions::all()).await {
            Ok(page) => {
                tracing::debug!(count = page.items.len(), "Departments loaded");
                self.state.apply(ListEvent::DepartmentsLoaded {
                    token,
                    departments: page.items,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "Department query failed");
                self.state.apply(ListEvent::DepartmentsFailed { token });
            }
        }
    }

    /// Handle the delete confirmation dialog's outcome.
    ///
    /// On `Deleted` the record is removed and the list reloaded; any other
    /// outcome leaves everything untouched. Returns whether the list was
    /// reloaded.
    pub async fn delete(&mut self, employee: &Employee, outcome: DialogOutcome) -> bool {
        if outcome != DialogOutcome::Deleted {
            return false;
        }
        let Some(id) = employee.id else {
            tracing::warn!("Cannot delete an employee without identifier");
            return false;
        };
        if let Err(e) = self.employee_service.delete(id).await {
            tracing::error!(id, error = %e, "Employee delete failed");
            return false;
        }
        tracing::info!(id, "Employee deleted");
        self.reset().await;
        true
    }

    async fn fetch_page(&mut self, token: RequestToken) {
        let options = self.state.query_options();
        match self.employee_service.query(&options).await {
            Ok(page) => {
                tracing::debug!(page = self.state.page, count = page.items.len(), "Employees loaded");
                let applied = self.state.apply(ListEvent::PageLoaded { token, page });
                if applied && self.state.needs_departments() {
                    self.load_departments().await;
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "{}", LOAD_FAILED_MESSAGE);
                self.state.apply(ListEvent::LoadFailed { token });
            }
        }
    }

    fn finish_list(
        &mut self,
        filter: DepartmentFilter,
        (token, result): (RequestToken, crate::ClientResult<Vec<Employee>>),
    ) {
        match result {
            Ok(items) => {
                tracing::debug!(filter = %filter, count = items.len(), "Employees loaded");
                self.state.apply(ListEvent::ListLoaded { token, items });
            }
            Err(e) => {
                tracing::error!(filter = %filter, error = %e, "{}", LOAD_FAILED_MESSAGE);
                self.state.apply(ListEvent::LoadFailed { token });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: i64, department: Option<i64>) -> Employee {
        Employee {
            id: Some(id),
            department: department.map(Department::reference),
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let state = EmployeeListState::new(20);
        assert_eq!(state.page, 0);
        assert_eq!(state.predicate, "id");
        assert!(state.ascending);
        assert_eq!(state.links.get("last"), Some(&0));
        assert_eq!(state.sort(), vec!["id,asc"]);
    }

    #[test]
    fn test_query_options_follow_state() {
        let mut state = EmployeeListState::new(10);
        state.page = 3;
        state.predicate = "salary".into();
        state.ascending = false;

        let options = state.query_options();
        assert_eq!(options.page, Some(3));
        assert_eq!(options.size, Some(10));
        assert_eq!(options.sort, vec!["salary,desc", "id"]);
    }

    #[test]
    fn test_page_loaded_appends() {
        let mut state = EmployeeListState::new(2);
        let token = state.begin_load();
        let mut links = PageLinks::new();
        links.insert("next".into(), 1);

        assert!(state.apply(ListEvent::PageLoaded {
            token,
            page: Page::new(vec![employee(1, None), employee(2, None)], links, Some(4)),
        }));
        assert!(!state.is_loading);
        assert_eq!(state.links.get("next"), Some(&1));

        state.page = 1;
        let token = state.begin_load();
        state.apply(ListEvent::PageLoaded {
            token,
            page: Page::single(vec![employee(3, None)]),
        });
        let ids: Vec<_> = state.employees.iter().filter_map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = EmployeeListState::new(20);
        let stale = state.begin_fresh_load();
        let current = state.begin_fresh_load();

        assert!(state.apply(ListEvent::ListLoaded {
            token: current,
            items: vec![employee(5, None)],
        }));
        assert!(!state.apply(ListEvent::ListLoaded {
            token: stale,
            items: vec![employee(1, None), employee(2, None)],
        }));
        assert!(!state.apply(ListEvent::LoadFailed { token: stale }));

        assert_eq!(state.employees.len(), 1);
        assert_eq!(state.employees[0].id, Some(5));
    }

    #[test]
    fn test_failure_clears_loading_and_keeps_partial_state() {
        let mut state = EmployeeListState::new(20);
        state.employees.push(employee(1, None));
        let token = state.begin_load();
        assert!(state.is_loading);

        state.apply(ListEvent::LoadFailed { token });
        assert!(!state.is_loading);
        assert_eq!(state.employees.len(), 1);
    }

    #[test]
    fn test_departments_label_loaded_employees() {
        let mut state = EmployeeListState::new(20);
        let token = state.begin_load();
        state.apply(ListEvent::ListLoaded {
            token,
            items: vec![employee(1, Some(10)), employee(2, Some(99)), employee(3, None)],
        });

        let token = state.begin_department_load();
        assert!(!state.needs_departments());
        state.apply(ListEvent::DepartmentsLoaded {
            token,
            departments: vec![Department::new(10, "Sales"), Department::new(11, "Eng")],
        });

        let names: Vec<_> = state
            .employees
            .iter()
            .map(|e| e.department.as_ref().and_then(|d| d.department_name.clone()))
            .collect();
        assert_eq!(names, vec![Some("Sales".to_string()), None, None]);
    }

    #[test]
    fn test_department_failure_allows_retry() {
        let mut state = EmployeeListState::new(20);
        let token = state.begin_department_load();
        state.apply(ListEvent::DepartmentsFailed { token });
        assert!(state.needs_departments());
    }

    #[test]
    fn test_department_options() {
        let mut state = EmployeeListState::new(20);
        state.departments = vec![Department::new(2, "Eng"), Department::new(4, "Ops")];

        assert_eq!(
            state.department_options(),
            vec![
                DepartmentFilter::AllDepartments,
                DepartmentFilter::WithoutDepartment,
                DepartmentFilter::Department(2),
                DepartmentFilter::Department(4),
            ]
        );
    }
}
