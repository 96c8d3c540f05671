//! Store implementations using SeaORM

pub mod department_repository;
pub mod employee_repository;

pub use department_repository::SeaOrmDepartmentStore;
pub use employee_repository::SeaOrmEmployeeStore;
