use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use super::error_response;
use crate::infrastructure::AppState;

#[derive(Deserialize)]
pub struct CreateEmployeeRequest {
    name: String,
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<CreateEmployeeRequest>,
) -> impl IntoResponse {
    match state.employees.create_employee(&payload.name).await {
        Ok(employee) => (StatusCode::CREATED, Json(employee)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_employee(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.employees.get_employee(id).await {
        Ok(employee) => (StatusCode::OK, Json(employee)).into_response(),
        Err(e) => error_response(e),
    }
}
