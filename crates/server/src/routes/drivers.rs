use axum::{extract::State, http::StatusCode, Json};
use service::fleet::{domain::DriverInput, views::{CarView, DriverView}};
use tracing::info;

use crate::{errors::{ApiError, ApiJson, ApiPath}, state::AppState};

#[utoipa::path(
    get, path = "/api/drivers", tag = "drivers", operation_id = "list_drivers",
    responses((status = 200, description = "All drivers", body = [DriverView]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<DriverView>>, ApiError> {
    Ok(Json(state.fleet.list_drivers().await?))
}

#[utoipa::path(
    get, path = "/api/drivers/{id}", tag = "drivers", operation_id = "get_driver",
    params(("id" = i32, Path, description = "Driver ID")),
    responses(
        (status = 200, description = "OK", body = DriverView),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<DriverView>, ApiError> {
    Ok(Json(state.fleet.get_driver(id).await?))
}

#[utoipa::path(
    post, path = "/api/drivers", tag = "drivers", operation_id = "create_driver",
    request_body = DriverInput,
    responses(
        (status = 200, description = "Created", body = DriverView),
        (status = 400, description = "Validation Error", body = crate::errors::ErrorBody)
    )
)]
pub async fn create(State(state): State<AppState>, ApiJson(input): ApiJson<DriverInput>) -> Result<Json<DriverView>, ApiError> {
    let created = state.fleet.create_driver(input).await?;
    info!(id = created.id, "created driver");
    Ok(Json(created))
}

#[utoipa::path(
    put, path = "/api/drivers/{id}", tag = "drivers", operation_id = "update_driver",
    params(("id" = i32, Path, description = "Driver ID")),
    request_body = DriverInput,
    responses(
        (status = 200, description = "Updated", body = DriverView),
        (status = 400, description = "Validation Error", body = crate::errors::ErrorBody),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn update(State(state): State<AppState>, ApiPath(id): ApiPath<i32>, ApiJson(input): ApiJson<DriverInput>) -> Result<Json<DriverView>, ApiError> {
    Ok(Json(state.fleet.update_driver(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/drivers/{id}", tag = "drivers", operation_id = "delete_driver",
    params(("id" = i32, Path, description = "Driver ID")),
    responses((status = 200, description = "Deleted, or already absent"))
)]
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<StatusCode, ApiError> {
    state.fleet.delete_driver(id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    get, path = "/api/drivers/{id}/cars", tag = "drivers", operation_id = "list_driver_cars",
    params(("id" = i32, Path, description = "Driver ID")),
    responses((status = 200, description = "Cars assigned to the driver", body = [CarView]))
)]
pub async fn cars(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<Vec<CarView>>, ApiError> {
    Ok(Json(state.fleet.driver_cars(id).await?))
}
