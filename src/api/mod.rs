pub mod department;
pub mod employee;
pub mod health;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Departments
        .route("/departments", post(department::create_department))
        .route("/departments/:id", get(department::get_department))
        .route(
            "/departments/manager/:employee_id",
            get(department::manager_of),
        )
        .route(
            "/departments/:id/manager/:employee_id",
            put(department::assign_manager),
        )
        .route(
            "/departments/:id/worker/:employee_id",
            put(department::assign_worker),
        )
        .route(
            "/departments/:id/freelancers/:employee_id",
            put(department::assign_freelancer),
        )
        // Employees
        .route("/employees", post(employee::create_employee))
        .route("/employees/:id", get(employee::get_employee))
        .with_state(state)
}

/// Map a domain failure onto an HTTP response
pub(crate) fn error_response(err: DomainError) -> Response {
    let status = match &err {
        DomainError::NotFound => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
