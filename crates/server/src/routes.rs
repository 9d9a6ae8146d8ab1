use axum::{
    routing::{get, post},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod car_types;
pub mod cars;
pub mod drivers;

/// Every fleet endpoint lives under this prefix.
pub const API_PREFIX: &str = "/api";

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn fleet_routes() -> Router<AppState> {
    Router::new()
        .route("/drivers", get(drivers::list).post(drivers::create))
        .route("/drivers/:id", get(drivers::get).put(drivers::update).delete(drivers::delete))
        .route("/drivers/:id/cars", get(drivers::cars))
        .route("/cars", get(cars::list).post(cars::create))
        .route("/cars/:id", get(cars::get).put(cars::update).delete(cars::delete))
        .route("/cars/:id/driver", axum::routing::delete(cars::remove_driver))
        .route("/cars/:id/driver/:driver_id", post(cars::assign_driver))
        .route("/car-types", get(car_types::list).post(car_types::create))
        .route("/car-types/:id", get(car_types::get).put(car_types::update).delete(car_types::delete))
}

/// Build the full application router: health, OpenAPI document and the fleet API.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest(API_PREFIX, fleet_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                        // 5xx and friends at ERROR
                        .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
                )
                .layer(cors),
        )
}
