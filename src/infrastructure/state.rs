//! Application state containing the services and their stores

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{DepartmentStore, EmployeeStore};
use crate::infrastructure::{SeaOrmDepartmentStore, SeaOrmEmployeeStore};
use crate::services::{DepartmentService, EmployeeService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub departments: DepartmentService,
    pub employees: EmployeeService,
}

impl AppState {
    /// Create a new AppState with SeaORM-backed stores
    pub fn new(db: DatabaseConnection) -> Self {
        let department_store: Arc<dyn DepartmentStore> =
            Arc::new(SeaOrmDepartmentStore::new(db.clone()));
        let employee_store: Arc<dyn EmployeeStore> = Arc::new(SeaOrmEmployeeStore::new(db));

        Self {
            departments: DepartmentService::new(department_store, employee_store.clone()),
            employees: EmployeeService::new(employee_store),
        }
    }
}
