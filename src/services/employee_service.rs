//! Employee Service - creation and lookup

use std::sync::Arc;

use crate::domain::{DomainError, Employee, EmployeeStore};

#[derive(Clone)]
pub struct EmployeeService {
    employees: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(employees: Arc<dyn EmployeeStore>) -> Self {
        Self { employees }
    }

    pub async fn create_employee(&self, name: &str) -> Result<Employee, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation(
                "employee name must not be empty".to_string(),
            ));
        }

        self.employees
            .save(Employee {
                id: None,
                name: name.to_string(),
                managed_department_id: None,
                worker_department_id: None,
                freelance_department_ids: Vec::new(),
            })
            .await
    }

    /// Employee by id. The store fills `managed_department_id` as a derived
    /// read from the department side.
    pub async fn get_employee(&self, id: i32) -> Result<Employee, DomainError> {
        self.employees
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound)
    }
}
