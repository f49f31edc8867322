//! Department Model
//!
//! Only the fields the employee screens read. The department feature owns the
//! full shape.

use serde::{Deserialize, Serialize};

use super::{Identifiable, add_to_collection_if_missing};

/// Department entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
}

impl Department {
    pub fn new(id: i64, department_name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            department_name: Some(department_name.into()),
        }
    }

    /// Reference carrying only the identifier
    pub fn reference(id: i64) -> Self {
        Self {
            id: Some(id),
            department_name: None,
        }
    }
}

impl Identifiable for Department {
    fn identifier(&self) -> Option<i64> {
        self.id
    }
}

/// Prepend departments that are not yet in `collection` (dedup by id)
pub fn add_department_to_collection_if_missing(
    collection: &[Department],
    candidates: &[Option<&Department>],
) -> Vec<Department> {
    add_to_collection_if_missing(collection, candidates.iter().copied())
}
