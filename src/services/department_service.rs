//! Department Service - association logic between departments and employees
//!
//! Every relationship has exactly one owning side. The manager reference is
//! owned by the department record; worker and freelance references are owned
//! by the employee side. Mutations write the owning side only, and the
//! department's collection views are re-derived from the employee store on
//! every read. All lookups happen before any write, so a failed precondition
//! leaves both stores untouched.

use std::sync::Arc;

use crate::domain::{Department, DepartmentStore, DomainError, Employee, EmployeeStore};

#[derive(Clone)]
pub struct DepartmentService {
    departments: Arc<dyn DepartmentStore>,
    employees: Arc<dyn EmployeeStore>,
}

impl DepartmentService {
    pub fn new(departments: Arc<dyn DepartmentStore>, employees: Arc<dyn EmployeeStore>) -> Self {
        Self {
            departments,
            employees,
        }
    }

    pub async fn create_department(&self, title: &str) -> Result<Department, DomainError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::Validation(
                "department title must not be empty".to_string(),
            ));
        }

        self.departments
            .save(Department {
                id: None,
                title: title.to_string(),
                manager: None,
                workers: Vec::new(),
                freelancers: Vec::new(),
            })
            .await
    }

    /// Department by id, with `workers` and `freelancers` freshly computed
    /// from the employee store.
    pub async fn get_department(&self, id: i32) -> Result<Department, DomainError> {
        let dept = self
            .departments
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound)?;

        self.with_derived(dept).await
    }

    /// Sets the department's manager reference. The employee record is not
    /// written: `managed_department` on the employee side is a derived read,
    /// and persisting it would create a second source of truth.
    pub async fn assign_manager(
        &self,
        department_id: i32,
        employee_id: i32,
    ) -> Result<Department, DomainError> {
        let mut dept = self
            .departments
            .find_by_id(department_id)
            .await?
            .ok_or(DomainError::NotFound)?;
        let employee = self
            .employees
            .find_by_id(employee_id)
            .await?
            .ok_or(DomainError::NotFound)?;

        dept.manager = Some(employee);
        let dept = self.departments.save(dept).await?;

        self.with_derived(dept).await
    }

    /// Reverse lookup: the department managed by the given employee. Queries
    /// the owning side's store by manager id; the employee record itself is
    /// never loaded.
    pub async fn manager_of(&self, employee_id: i32) -> Result<Department, DomainError> {
        let dept = self
            .departments
            .find_by_manager_id(employee_id)
            .await?
            .ok_or(DomainError::NotFound)?;

        self.with_derived(dept).await
    }

    /// Moves the employee into the department's worker set by writing the
    /// owning reference on the employee record. The department record itself
    /// is not written; its worker list is derived.
    pub async fn assign_worker(
        &self,
        department_id: i32,
        employee_id: i32,
    ) -> Result<Department, DomainError> {
        let dept = self
            .departments
            .find_by_id(department_id)
            .await?
            .ok_or(DomainError::NotFound)?;
        let mut employee = self
            .employees
            .find_by_id(employee_id)
            .await?
            .ok_or(DomainError::NotFound)?;

        employee.worker_department_id = dept.id;
        let employee = self.employees.save(employee).await?;

        // Mirror the new membership into the returned snapshot. Set
        // semantics: the employee appears at most once.
        let mut dept = self.with_derived(dept).await?;
        if !dept.workers.iter().any(|w| w.id == employee.id) {
            dept.workers.push(employee);
        }

        Ok(dept)
    }

    /// Adds a freelance membership on the owning (employee) side. Adding the
    /// same membership twice is a no-op.
    pub async fn assign_freelancer(
        &self,
        department_id: i32,
        employee_id: i32,
    ) -> Result<Department, DomainError> {
        let dept = self
            .departments
            .find_by_id(department_id)
            .await?
            .ok_or(DomainError::NotFound)?;
        let employee: Employee = self
            .employees
            .find_by_id(employee_id)
            .await?
            .ok_or(DomainError::NotFound)?;

        self.employees
            .add_freelance_department(employee_id, department_id)
            .await?;

        let mut dept = self.with_derived(dept).await?;
        if !dept.freelancers.iter().any(|f| f.id == employee.id) {
            dept.freelancers.push(employee);
        }

        Ok(dept)
    }

    /// Fills the derived collection views. Never persisted back.
    async fn with_derived(&self, mut dept: Department) -> Result<Department, DomainError> {
        if let Some(id) = dept.id {
            dept.workers = self.employees.find_workers(id).await?;
            dept.freelancers = self.employees.find_freelancers(id).await?;
        }
        Ok(dept)
    }
}
