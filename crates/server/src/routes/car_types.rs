use axum::{extract::State, http::StatusCode, Json};
use service::fleet::{domain::CarTypeInput, views::CarTypeView};

use crate::{errors::{ApiError, ApiJson, ApiPath}, state::AppState};

#[utoipa::path(
    get, path = "/api/car-types", tag = "car-types", operation_id = "list_car_types",
    responses((status = 200, description = "All car types", body = [CarTypeView]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CarTypeView>>, ApiError> {
    Ok(Json(state.fleet.list_car_types().await?))
}

#[utoipa::path(
    get, path = "/api/car-types/{id}", tag = "car-types", operation_id = "get_car_type",
    params(("id" = i32, Path, description = "Car type ID")),
    responses(
        (status = 200, description = "OK", body = CarTypeView),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<CarTypeView>, ApiError> {
    Ok(Json(state.fleet.get_car_type(id).await?))
}

#[utoipa::path(
    post, path = "/api/car-types", tag = "car-types", operation_id = "create_car_type",
    request_body = CarTypeInput,
    responses(
        (status = 200, description = "Created", body = CarTypeView),
        (status = 400, description = "Validation Error", body = crate::errors::ErrorBody)
    )
)]
pub async fn create(State(state): State<AppState>, ApiJson(input): ApiJson<CarTypeInput>) -> Result<Json<CarTypeView>, ApiError> {
    Ok(Json(state.fleet.create_car_type(input).await?))
}

#[utoipa::path(
    put, path = "/api/car-types/{id}", tag = "car-types", operation_id = "update_car_type",
    params(("id" = i32, Path, description = "Car type ID")),
    request_body = CarTypeInput,
    responses(
        (status = 200, description = "Updated", body = CarTypeView),
        (status = 400, description = "Validation Error", body = crate::errors::ErrorBody),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn update(State(state): State<AppState>, ApiPath(id): ApiPath<i32>, ApiJson(input): ApiJson<CarTypeInput>) -> Result<Json<CarTypeView>, ApiError> {
    Ok(Json(state.fleet.update_car_type(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/car-types/{id}", tag = "car-types", operation_id = "delete_car_type",
    params(("id" = i32, Path, description = "Car type ID")),
    responses((status = 200, description = "Deleted, or already absent"))
)]
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<StatusCode, ApiError> {
    state.fleet.delete_car_type(id).await?;
    Ok(StatusCode::OK)
}
