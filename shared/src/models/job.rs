//! Job Model

use serde::{Deserialize, Serialize};

use super::{Employee, Identifiable, add_to_collection_if_missing};

/// Job entity
///
/// `employee` is a back-reference for display only. The client never infers
/// ownership from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_hours: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<Box<Employee>>,
}

impl Identifiable for Job {
    fn identifier(&self) -> Option<i64> {
        self.id
    }
}

/// Prepend jobs that are not yet in `collection` (dedup by id)
pub fn add_job_to_collection_if_missing(
    collection: &[Job],
    candidates: &[Option<&Job>],
) -> Vec<Job> {
    add_to_collection_if_missing(collection, candidates.iter().copied())
}
