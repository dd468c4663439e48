//! `/employees` endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use entity::employees::{self, Draft, EmployeeFields};
use platform_api::{ApiError, ApiResult};
use platform_db::DbError;
use sea_orm::DbErr;
use tracing::{info, instrument};

use crate::http::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/{id}",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
}

#[instrument(name = "employees.list", skip_all)]
async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<employees::Model>>> {
    let records = state.employees.find_all().await?;
    Ok(Json(records))
}

#[instrument(name = "employees.get", skip(state))]
async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<employees::Model>> {
    state
        .employees
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[instrument(name = "employees.create", skip_all)]
async fn create_employee(
    State(state): State<AppState>,
    Json(fields): Json<EmployeeFields>,
) -> ApiResult<(StatusCode, Json<employees::Model>)> {
    let saved = state.employees.save(Draft::new(fields)).await?;
    info!(employee_id = saved.id, "employee created");
    Ok((StatusCode::CREATED, Json(saved)))
}

#[instrument(name = "employees.update", skip(state, fields))]
async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(fields): Json<EmployeeFields>,
) -> ApiResult<Json<employees::Model>> {
    let Some(existing) = state.employees.find_by_id(id).await? else {
        return Err(ApiError::NotFound);
    };
    let mut draft = Draft::from(existing);
    draft.overwrite(fields);
    // The row may have been deleted since the lookup.
    let updated = match state.employees.save(draft).await {
        Err(DbError::Query(DbErr::RecordNotUpdated)) => return Err(ApiError::NotFound),
        saved => saved?,
    };
    info!(employee_id = updated.id, "employee updated");
    Ok(Json(updated))
}

#[instrument(name = "employees.delete", skip(state))]
async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if !state.employees.exists_by_id(id).await? {
        return Err(ApiError::NotFound);
    }
    state.employees.delete_by_id(id).await?;
    info!(employee_id = id, "employee deleted");
    Ok(StatusCode::NO_CONTENT)
}
