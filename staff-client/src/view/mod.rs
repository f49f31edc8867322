//! Employee views
//!
//! Headless view-models: each one owns its render state and talks to the
//! backend only through the service traits. Rendering, dialogs and routing
//! are left to the embedding application.

pub mod employee_filter;
pub mod employee_list;
pub mod employee_update;
pub mod sequence;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use employee_filter::EmployeeFilterView;
pub use employee_list::{EmployeeListState, EmployeeListView, ListEvent};
pub use employee_update::{EmployeeForm, EmployeeUpdateView, SaveOutcome};
pub use sequence::{RequestSeq, RequestToken};

/// Which employees the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepartmentFilter {
    /// Regular paginated list
    AllDepartments,
    /// Employees with no department assigned
    WithoutDepartment,
    /// Employees of one department
    Department(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown department selector: {0}")]
pub struct InvalidSelector(pub String);

impl FromStr for DepartmentFilter {
    type Err = InvalidSelector;

    /// Accepts the selector values used by the list screen: `All`, `wd`
    /// or a department id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "All" => Ok(Self::AllDepartments),
            "wd" => Ok(Self::WithoutDepartment),
            other => other
                .parse::<i64>()
                .map(Self::Department)
                .map_err(|_| InvalidSelector(s.to_string())),
        }
    }
}

impl fmt::Display for DepartmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllDepartments => f.write_str("All"),
            Self::WithoutDepartment => f.write_str("wd"),
            Self::Department(id) => write!(f, "{}", id),
        }
    }
}

/// How the delete confirmation dialog was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Deleted,
    Dismissed,
}

/// Navigation request emitted by a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Return to the previous screen
    Back,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_filter_from_str() {
        assert_eq!("All".parse::<DepartmentFilter>(), Ok(DepartmentFilter::AllDepartments));
        assert_eq!("wd".parse::<DepartmentFilter>(), Ok(DepartmentFilter::WithoutDepartment));
        assert_eq!(" 3 ".parse::<DepartmentFilter>(), Ok(DepartmentFilter::Department(3)));
        assert_eq!(
            "sales".parse::<DepartmentFilter>(),
            Err(InvalidSelector("sales".to_string()))
        );
    }

    #[test]
    fn test_department_filter_display_roundtrip() {
        for filter in [
            DepartmentFilter::AllDepartments,
            DepartmentFilter::WithoutDepartment,
            DepartmentFilter::Department(12),
        ] {
            assert_eq!(filter.to_string().parse::<DepartmentFilter>(), Ok(filter));
        }
    }
}
