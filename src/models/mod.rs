pub mod department;
pub mod employee;
pub mod freelancer_department;
