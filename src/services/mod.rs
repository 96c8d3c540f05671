//! Services Layer
//!
//! Pure business logic, called from the Axum handlers. Services talk to the
//! abstract stores only, never to SeaORM directly.

pub mod department_service;
pub mod employee_service;

pub use department_service::DepartmentService;
pub use employee_service::EmployeeService;
