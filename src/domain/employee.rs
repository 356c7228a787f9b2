//! Domain entities: core data structures

use std::fmt;

/// A member of the organization.
///
/// Identity attributes are fixed at construction; hierarchy membership
/// lives in [`OrgTree`](crate::domain::OrgTree), not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Display name, e.g., "John"
    pub name: String,
    /// Department or title, e.g., "Head Sales"
    pub role: String,
    /// Annual salary, non-negative by type
    pub salary: u32,
}

impl Employee {
    pub fn new(name: impl Into<String>, role: impl Into<String>, salary: u32) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            salary,
        }
    }

    /// Formatted single-line projection of this employee.
    ///
    /// Pure and deterministic: no I/O, no mutation.
    pub fn describe(&self) -> String {
        format!(
            "Employee :[ Name : {}, dept : {}, salary : {} ]",
            self.name, self.role, self.salary
        )
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
