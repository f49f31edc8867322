//! Employee Model

use serde::{Deserialize, Serialize};

use super::{Department, Identifiable, Job, add_to_collection_if_missing};

/// Employee entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Absent until the backend persists the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Vec<Job>>,
    /// Department reference; may carry only the id when fetched standalone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
}

impl Employee {
    /// Display name, "first last" with missing parts skipped
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Identifier of the referenced department, if any
    pub fn department_id(&self) -> Option<i64> {
        self.department.as_ref().and_then(|d| d.id)
    }
}

impl Identifiable for Employee {
    fn identifier(&self) -> Option<i64> {
        self.id
    }
}

/// Prepend employees that are not yet in `collection` (dedup by id)
pub fn add_employee_to_collection_if_missing(
    collection: &[Employee],
    candidates: &[Option<&Employee>],
) -> Vec<Employee> {
    add_to_collection_if_missing(collection, candidates.iter().copied())
}
