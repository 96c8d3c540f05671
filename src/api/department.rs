use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use super::error_response;
use crate::infrastructure::AppState;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateDepartmentRequest {
    title: String,
}

#[utoipa::path(
    post,
    path = "/api/departments",
    responses(
        (status = 201, description = "Department created"),
        (status = 400, description = "Empty title")
    )
)]
pub async fn create_department(
    State(state): State<AppState>,
    Json(payload): Json<CreateDepartmentRequest>,
) -> impl IntoResponse {
    match state.departments.create_department(&payload.title).await {
        Ok(dept) => (StatusCode::CREATED, Json(dept)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    responses(
        (status = 200, description = "Department with freshly derived workers and freelancers"),
        (status = 404, description = "Department not found")
    )
)]
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.departments.get_department(id).await {
        Ok(dept) => (StatusCode::OK, Json(dept)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/departments/{id}/manager/{employee_id}",
    responses(
        (status = 200, description = "Manager assigned"),
        (status = 404, description = "Department or employee not found")
    )
)]
pub async fn assign_manager(
    State(state): State<AppState>,
    Path((id, employee_id)): Path<(i32, i32)>,
) -> impl IntoResponse {
    match state.departments.assign_manager(id, employee_id).await {
        Ok(dept) => (StatusCode::OK, Json(dept)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/departments/manager/{employee_id}",
    responses(
        (status = 200, description = "Department managed by this employee"),
        (status = 404, description = "Employee manages no department")
    )
)]
pub async fn manager_of(
    State(state): State<AppState>,
    Path(employee_id): Path<i32>,
) -> impl IntoResponse {
    match state.departments.manager_of(employee_id).await {
        Ok(dept) => (StatusCode::OK, Json(dept)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/departments/{id}/worker/{employee_id}",
    responses(
        (status = 200, description = "Worker assigned"),
        (status = 404, description = "Department or employee not found")
    )
)]
pub async fn assign_worker(
    State(state): State<AppState>,
    Path((id, employee_id)): Path<(i32, i32)>,
) -> impl IntoResponse {
    match state.departments.assign_worker(id, employee_id).await {
        Ok(dept) => (StatusCode::OK, Json(dept)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/departments/{id}/freelancers/{employee_id}",
    responses(
        (status = 200, description = "Freelancer assigned"),
        (status = 404, description = "Department or employee not found")
    )
)]
pub async fn assign_freelancer(
    State(state): State<AppState>,
    Path((id, employee_id)): Path<(i32, i32)>,
) -> impl IntoResponse {
    match state.departments.assign_freelancer(id, employee_id).await {
        Ok(dept) => (StatusCode::OK, Json(dept)).into_response(),
        Err(e) => error_response(e),
    }
}
