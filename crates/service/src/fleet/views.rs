//! Response shapes returned to API clients. Flat and cycle-free: a car
//! carries its driver's id and name, never the driver record itself.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::domain::{Car, CarType, Driver, EntityRef};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DriverView {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

impl From<Driver> for DriverView {
    fn from(d: Driver) -> Self {
        Self { id: d.id, name: d.name, age: d.age }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarTypeView {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<CarType> for CarTypeView {
    fn from(t: CarType) -> Self {
        Self { id: t.id, name: t.name, description: t.description }
    }
}

/// Denormalized car: referenced names are looked up when the view is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarView {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub driver_id: Option<i32>,
    pub driver_name: Option<String>,
    pub car_type_id: Option<i32>,
    pub car_type_name: Option<String>,
}

impl CarView {
    pub fn new(car: Car, driver_name: Option<String>, car_type_name: Option<String>) -> Self {
        Self {
            id: car.id,
            brand: car.brand,
            model: car.model,
            year: car.year,
            driver_id: car.driver_id,
            driver_name,
            car_type_id: car.car_type_id,
            car_type_name,
        }
    }
}

/// Entity shape of a car, as echoed by create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarRecord {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub driver: Option<EntityRef>,
    pub car_type: Option<EntityRef>,
}

impl From<Car> for CarRecord {
    fn from(c: Car) -> Self {
        Self {
            id: c.id,
            brand: c.brand,
            model: c.model,
            year: c.year,
            driver: c.driver_id.map(|id| EntityRef { id }),
            car_type: c.car_type_id.map(|id| EntityRef { id }),
        }
    }
}
