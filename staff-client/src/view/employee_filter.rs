//! Employee filter view
//!
//! Loads the employees of a single fixed department on init. No paging, no
//! department-name labelling.

use shared::Employee;

use super::Navigation;
use super::employee_list::LOAD_FAILED_MESSAGE;
use super::sequence::RequestSeq;
use crate::service::EmployeeApi;

/// Department loaded by [`EmployeeFilterView::init`]
pub const DEFAULT_FILTER_DEPARTMENT_ID: i64 = 1;

pub struct EmployeeFilterView<E> {
    employee_service: E,
    department_id: i64,
    employees: Vec<Employee>,
    seq: RequestSeq,
}

impl<E: EmployeeApi> EmployeeFilterView<E> {
    pub fn new(employee_service: E) -> Self {
        Self::for_department(employee_service, DEFAULT_FILTER_DEPARTMENT_ID)
    }

    pub fn for_department(employee_service: E, department_id: i64) -> Self {
        Self {
            employee_service,
            department_id,
            employees: Vec::new(),
            seq: RequestSeq::new(),
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn department_id(&self) -> i64 {
        self.department_id
    }

    pub async fn init(&mut self) {
        self.load_by_department().await;
    }

    /// Append the department's employees to the list
    pub async fn load_by_department(&mut self) {
        let token = self.seq.issue();
        let result = self
            .employee_service
            .find_by_department(self.department_id)
            .await;
        if !self.seq.is_current(token) {
            return;
        }
        match result {
            Ok(items) => {
                self.employees.extend(items);
                tracing::info!(
                    department_id = self.department_id,
                    count = self.employees.len(),
                    "Filtered employees loaded"
                );
            }
            Err(e) => {
                tracing::error!(department_id = self.department_id, error = %e, "{}", LOAD_FAILED_MESSAGE);
            }
        }
    }

    pub fn previous_state(&self) -> Navigation {
        Navigation::Back
    }
}
