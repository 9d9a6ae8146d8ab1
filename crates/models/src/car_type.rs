use sea_orm::{entity::prelude::*, ActiveValue::Unchanged, DatabaseConnection, QueryOrder, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{car, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "car_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Cars }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Cars => Entity::has_many(car::Entity).into(),
        }
    }
}

impl Related<car::Entity> for Entity {
    fn to() -> RelationDef { Relation::Cars.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("car type name required".into()));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, name: &str, description: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        description: Set(description.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn update(db: &DatabaseConnection, m: Model) -> Result<Model, errors::ModelError> {
    validate_name(&m.name)?;
    let am = ActiveModel { id: Unchanged(m.id), name: Set(m.name), description: Set(m.description) };
    Ok(am.update(db).await?)
}

/// Delete a car type; cars of that type become untyped.
pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<bool, errors::ModelError> {
    let txn = db.begin().await?;
    let detached = car::detach_car_type(&txn, id).await?;
    let res = Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    debug!(car_type_id = id, detached_cars = detached, deleted = res.rows_affected, "car_type_deleted");
    Ok(res.rows_affected > 0)
}
