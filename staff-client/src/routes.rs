//! Entity routes
//!
//! Declarative table of the entity feature paths. Navigation itself belongs
//! to the embedding application.

/// Top-level entity feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRoute {
    Department,
    Employee,
    Job,
}

/// All entity routes in declaration order
pub const ENTITY_ROUTES: [EntityRoute; 3] = [
    EntityRoute::Department,
    EntityRoute::Employee,
    EntityRoute::Job,
];

impl EntityRoute {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Department => "department",
            Self::Employee => "employee",
            Self::Job => "job",
        }
    }

    pub fn page_title(&self) -> &'static str {
        match self {
            Self::Department => "Departments",
            Self::Employee => "Employees",
            Self::Job => "Jobs",
        }
    }

    /// Route owning `path`, matched on its first segment
    /// (`employee/3/edit` resolves to [`EntityRoute::Employee`]).
    pub fn resolve(path: &str) -> Option<Self> {
        let first = path.trim_start_matches('/').split('/').next()?;
        ENTITY_ROUTES.into_iter().find(|r| r.path() == first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(EntityRoute::resolve("employee"), Some(EntityRoute::Employee));
        assert_eq!(EntityRoute::resolve("/job/7/view"), Some(EntityRoute::Job));
        assert_eq!(EntityRoute::resolve("department/new"), Some(EntityRoute::Department));
        assert_eq!(EntityRoute::resolve("employees"), None);
        assert_eq!(EntityRoute::resolve(""), None);
    }

    #[test]
    fn test_titles() {
        let titles: Vec<_> = ENTITY_ROUTES.iter().map(|r| r.page_title()).collect();
        assert_eq!(titles, vec!["Departments", "Employees", "Jobs"]);
    }
}
