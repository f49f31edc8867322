//! Remote access services
//!
//! One service per backend entity. Each call issues exactly one request and
//! resolves once; nothing is cached or retried here.

pub mod department;
pub mod employee;
pub mod job;

pub use department::{DepartmentApi, DepartmentService};
pub use employee::{EmployeeApi, EmployeeService};
pub use job::{JobApi, JobService};

/// Employee resource path
pub const EMPLOYEES_URL: &str = "api/employees";
/// Department resource path
pub const DEPARTMENTS_URL: &str = "api/departments";
/// Job resource path
pub const JOBS_URL: &str = "api/jobs";
