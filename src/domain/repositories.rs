//! Store trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::DomainError;

/// Department view returned by the association service.
///
/// `manager` is read from the department record (the department owns the
/// one-to-one manager reference). `workers` and `freelancers` are derived at
/// read time by querying the employee store; they are never persisted on the
/// department record itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: Option<i32>,
    pub title: String,
    #[serde(default)]
    pub manager: Option<Employee>,
    #[serde(default)]
    pub workers: Vec<Employee>,
    #[serde(default)]
    pub freelancers: Vec<Employee>,
}

/// Employee view.
///
/// The association fields are excluded from serialized output: the embedded
/// employees inside a serialized `Department` carry no department references,
/// so encoding a department/employee graph terminates after one hop no matter
/// how large the graph is. Equality ignores associations as well, so a value
/// carrying only an id and name compares equal to a fully loaded one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: Option<i32>,
    pub name: String,
    /// Mirror of `Department.manager`. Derived at read time from the
    /// department store; not independently settable.
    #[serde(skip_serializing, default)]
    pub managed_department_id: Option<i32>,
    /// Owning side of the worker relationship.
    #[serde(skip_serializing, default)]
    pub worker_department_id: Option<i32>,
    /// Owning side of the freelance relationship.
    #[serde(skip_serializing, default)]
    pub freelance_department_ids: Vec<i32>,
}

// Equality is id + title, ignoring association fields, so partially loaded
// instances compare equal to fully loaded ones.
impl PartialEq for Department {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.title == other.title
    }
}

impl Eq for Department {}

impl Hash for Department {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.title.hash(state);
    }
}

// Equality is id + name, ignoring association fields.
impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
    }
}

/// Store trait for Department entities
#[async_trait]
pub trait DepartmentStore: Send + Sync {
    /// Find a department by id. The returned view has `manager` populated
    /// from the stored reference; `workers`/`freelancers` are left empty and
    /// derived by the service layer.
    async fn find_by_id(&self, id: i32) -> Result<Option<Department>, DomainError>;

    /// Insert-or-update; assigns an id on first insert. Persists `title` and
    /// the manager reference only, never the derived collections.
    async fn save(&self, department: Department) -> Result<Department, DomainError>;

    /// Reverse manager lookup. Matches on the stored manager id column only,
    /// never on full entity equality.
    async fn find_by_manager_id(&self, employee_id: i32)
        -> Result<Option<Department>, DomainError>;
}

/// Store trait for Employee entities
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Find an employee by id, with the owning association fields populated
    /// and `managed_department_id` derived from the department store's data.
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, DomainError>;

    /// Insert-or-update; assigns an id on first insert. Persists `name` and
    /// `worker_department_id`. Freelance memberships are persisted through
    /// [`EmployeeStore::add_freelance_department`]; `managed_department_id`
    /// is derived and never written.
    async fn save(&self, employee: Employee) -> Result<Employee, DomainError>;

    /// Employees whose worker department is `department_id`.
    async fn find_workers(&self, department_id: i32) -> Result<Vec<Employee>, DomainError>;

    /// Employees holding a freelance membership for `department_id`.
    async fn find_freelancers(&self, department_id: i32) -> Result<Vec<Employee>, DomainError>;

    /// Owner-side add of a freelance membership. Idempotent: adding an
    /// existing membership is a no-op.
    async fn add_freelance_department(
        &self,
        employee_id: i32,
        department_id: i32,
    ) -> Result<(), DomainError>;
}
