//! Shared types for the staff administration client
//!
//! Entity models, list query options and pagination metadata used by
//! `staff-client` and by anything else that talks to the employee backend.
//! Nothing in here performs I/O.

pub mod models;
pub mod pagination;
pub mod request;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Department, Employee, Identifiable, Job};
pub use pagination::{LinkParseError, Page, PageLinks, parse_links};
pub use request::{QueryOptions, SortOrder, sort_keys};
