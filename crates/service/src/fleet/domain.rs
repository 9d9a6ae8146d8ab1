use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stored driver (business view)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

/// Stored car type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarType {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Stored car. References are ids only; names are resolved when a view is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub driver_id: Option<i32>,
    pub car_type_id: Option<i32>,
}

/// Car fields before the store assigns an id.
#[derive(Debug, Clone, PartialEq)]
pub struct CarDraft {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub driver_id: Option<i32>,
    pub car_type_id: Option<i32>,
}

/// Reference to another record by id, e.g. `{"id": 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EntityRef {
    pub id: i32,
}

/// Driver payload for create/update. A client-supplied `id` is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DriverInput {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    pub age: i32,
}

/// Car type payload for create/update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarTypeInput {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Car payload for create/update, with references as nested `{id}` objects.
/// `driver` is honoured on create only; use the assign endpoint afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarInput {
    #[serde(default)]
    pub id: Option<i32>,
    pub brand: String,
    pub model: String,
    pub year: i32,
    #[serde(default)]
    pub driver: Option<EntityRef>,
    #[serde(default)]
    pub car_type: Option<EntityRef>,
}
