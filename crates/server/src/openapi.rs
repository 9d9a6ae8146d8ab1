use utoipa::OpenApi;
use utoipa::ToSchema;

use service::fleet::domain::{CarInput, CarTypeInput, DriverInput, EntityRef};
use service::fleet::views::{CarRecord, CarTypeView, CarView, DriverView};

use crate::errors::ErrorBody;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(OpenApi)]
#[openapi(
    info(title = "Car Service", description = "Drivers, cars and car types"),
    paths(
        crate::routes::health,
        crate::routes::drivers::list,
        crate::routes::drivers::get,
        crate::routes::drivers::create,
        crate::routes::drivers::update,
        crate::routes::drivers::delete,
        crate::routes::drivers::cars,
        crate::routes::cars::list,
        crate::routes::cars::get,
        crate::routes::cars::create,
        crate::routes::cars::update,
        crate::routes::cars::delete,
        crate::routes::cars::assign_driver,
        crate::routes::cars::remove_driver,
        crate::routes::car_types::list,
        crate::routes::car_types::get,
        crate::routes::car_types::create,
        crate::routes::car_types::update,
        crate::routes::car_types::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
            EntityRef,
            DriverInput,
            CarInput,
            CarTypeInput,
            DriverView,
            CarView,
            CarRecord,
            CarTypeView,
        )
    ),
    tags(
        (name = "health"),
        (name = "drivers"),
        (name = "cars"),
        (name = "car-types")
    )
)]
pub struct ApiDoc;
