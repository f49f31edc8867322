//! Employee create/update view
//!
//! Edits one employee through a flat form and keeps the department picker's
//! option list populated. `save` creates when the form has no id and updates
//! otherwise.

use shared::{Department, Employee, Identifiable, QueryOptions};

use super::Navigation;
use super::sequence::RequestSeq;
use crate::ClientError;
use crate::service::{DepartmentApi, EmployeeApi};

/// Editable fields of an employee
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForm {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub salary: Option<i64>,
    pub department: Option<Department>,
}

impl EmployeeForm {
    /// Copy the editable fields of `employee` into the form
    pub fn patch(&mut self, employee: &Employee) {
        self.id = employee.id;
        self.first_name = employee.first_name.clone();
        self.last_name = employee.last_name.clone();
        self.email = employee.email.clone();
        self.phone_number = employee.phone_number.clone();
        self.salary = employee.salary;
        self.department = employee.department.clone();
    }

    /// Build the employee to submit. Jobs are not edited here and are left
    /// unset.
    pub fn to_employee(&self) -> Employee {
        Employee {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            salary: self.salary,
            jobs: None,
            department: self.department.clone(),
        }
    }
}

/// Result of [`EmployeeUpdateView::save`]
#[derive(Debug)]
pub enum SaveOutcome {
    /// Persisted; the caller should navigate as instructed
    Saved {
        employee: Employee,
        navigation: Navigation,
    },
    /// The request failed. The form keeps its values.
    Failed(ClientError),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

pub struct EmployeeUpdateView<E, D> {
    employee_service: E,
    department_service: D,
    form: EmployeeForm,
    is_saving: bool,
    departments_shared_collection: Vec<Department>,
    department_seq: RequestSeq,
}

impl<E: EmployeeApi, D: DepartmentApi> EmployeeUpdateView<E, D> {
    pub fn new(employee_service: E, department_service: D) -> Self {
        Self {
            employee_service,
            department_service,
            form: EmployeeForm::default(),
            is_saving: false,
            departments_shared_collection: Vec::new(),
            department_seq: RequestSeq::new(),
        }
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EmployeeForm {
        &mut self.form
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    /// Options for the department picker
    pub fn departments_shared_collection(&self) -> &[Department] {
        &self.departments_shared_collection
    }

    pub fn track_department_by_id(&self, department: &Department) -> Option<i64> {
        department.identifier()
    }

    /// Populate the form from the routed employee (new or existing) and
    /// load the picker options.
    pub async fn init(&mut self, employee: &Employee) {
        self.update_form(employee);
        self.load_relationships_options().await;
    }

    pub fn update_form(&mut self, employee: &Employee) {
        self.form.patch(employee);
        self.departments_shared_collection = self
            .department_service
            .add_department_to_collection_if_missing(
                &self.departments_shared_collection,
                &[employee.department.as_ref()],
            );
    }

    /// Fetch the department catalog, keeping the current selection visible
    pub async fn load_relationships_options(&mut self) {
        let token = self.department_seq.issue();
        let result = self.department_service.query(&QueryOptions::all()).await;
        if !self.department_seq.is_current(token) {
            return;
        }
        match result {
            Ok(page) => {
                self.departments_shared_collection = self
                    .department_service
                    .add_department_to_collection_if_missing(
                        &page.items,
                        &[self.form.department.as_ref()],
                    );
            }
            Err(e) => {
                tracing::warn!(error = %e, "Department query failed");
            }
        }
    }

    /// Submit the form: create without id, update with id
    pub async fn save(&mut self) -> SaveOutcome {
        self.is_saving = true;
        let employee = self.form.to_employee();
        let result = if employee.id.is_some() {
            self.employee_service.update(&employee).await
        } else {
            self.employee_service.create(&employee).await
        };
        self.is_saving = false;

        match result {
            Ok(saved) => {
                tracing::info!(id = ?saved.id, "Employee saved");
                SaveOutcome::Saved {
                    employee: saved,
                    navigation: self.previous_state(),
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "Employee save failed");
                SaveOutcome::Failed(e)
            }
        }
    }

    pub fn previous_state(&self) -> Navigation {
        Navigation::Back
    }
}
