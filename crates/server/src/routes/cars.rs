use axum::{extract::State, http::StatusCode, Json};
use service::fleet::{domain::CarInput, views::{CarRecord, CarView}};
use tracing::info;

use crate::{errors::{ApiError, ApiJson, ApiPath}, state::AppState};

#[utoipa::path(
    get, path = "/api/cars", tag = "cars", operation_id = "list_cars",
    responses((status = 200, description = "All cars with driver and type names", body = [CarView]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CarView>>, ApiError> {
    Ok(Json(state.fleet.list_cars().await?))
}

#[utoipa::path(
    get, path = "/api/cars/{id}", tag = "cars", operation_id = "get_car",
    params(("id" = i32, Path, description = "Car ID")),
    responses(
        (status = 200, description = "OK", body = CarView),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<CarView>, ApiError> {
    Ok(Json(state.fleet.get_car(id).await?))
}

#[utoipa::path(
    post, path = "/api/cars", tag = "cars", operation_id = "create_car",
    request_body = CarInput,
    responses(
        (status = 200, description = "Created", body = CarRecord),
        (status = 400, description = "Validation Error", body = crate::errors::ErrorBody),
        (status = 404, description = "Referenced driver or car type not found", body = crate::errors::ErrorBody)
    )
)]
pub async fn create(State(state): State<AppState>, ApiJson(input): ApiJson<CarInput>) -> Result<Json<CarRecord>, ApiError> {
    let created = state.fleet.create_car(input).await?;
    info!(id = created.id, brand = %created.brand, model = %created.model, "created car");
    Ok(Json(created))
}

#[utoipa::path(
    put, path = "/api/cars/{id}", tag = "cars", operation_id = "update_car",
    params(("id" = i32, Path, description = "Car ID")),
    request_body = CarInput,
    responses(
        (status = 200, description = "Updated; driver assignment unchanged", body = CarRecord),
        (status = 400, description = "Validation Error", body = crate::errors::ErrorBody),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn update(State(state): State<AppState>, ApiPath(id): ApiPath<i32>, ApiJson(input): ApiJson<CarInput>) -> Result<Json<CarRecord>, ApiError> {
    Ok(Json(state.fleet.update_car(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/cars/{id}", tag = "cars", operation_id = "delete_car",
    params(("id" = i32, Path, description = "Car ID")),
    responses((status = 200, description = "Deleted, or already absent"))
)]
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<StatusCode, ApiError> {
    state.fleet.delete_car(id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    post, path = "/api/cars/{id}/driver/{driver_id}", tag = "cars", operation_id = "assign_driver",
    params(
        ("id" = i32, Path, description = "Car ID"),
        ("driver_id" = i32, Path, description = "Driver ID")
    ),
    responses(
        (status = 200, description = "Driver assigned", body = CarView),
        (status = 404, description = "Car or driver not found", body = crate::errors::ErrorBody)
    )
)]
pub async fn assign_driver(State(state): State<AppState>, ApiPath((car_id, driver_id)): ApiPath<(i32, i32)>) -> Result<Json<CarView>, ApiError> {
    Ok(Json(state.fleet.assign_driver(car_id, driver_id).await?))
}

#[utoipa::path(
    delete, path = "/api/cars/{id}/driver", tag = "cars", operation_id = "remove_driver",
    params(("id" = i32, Path, description = "Car ID")),
    responses(
        (status = 200, description = "Driver cleared", body = CarView),
        (status = 404, description = "Car not found", body = crate::errors::ErrorBody)
    )
)]
pub async fn remove_driver(State(state): State<AppState>, ApiPath(car_id): ApiPath<i32>) -> Result<Json<CarView>, ApiError> {
    Ok(Json(state.fleet.remove_driver(car_id).await?))
}
