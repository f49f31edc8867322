//! Staff Client - employee administration client
//!
//! Typed access to the employee, department and job REST endpoints, plus the
//! view-models behind the employee list, filter and edit screens.

pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod routes;
pub mod service;
pub mod view;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use routes::{ENTITY_ROUTES, EntityRoute};
pub use service::{
    DepartmentApi, DepartmentService, EmployeeApi, EmployeeService, JobApi, JobService,
};

// Re-export shared types for convenience
pub use shared::{Department, Employee, Job, Page, PageLinks, QueryOptions};
