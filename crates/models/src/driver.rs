use sea_orm::{entity::prelude::*, ActiveValue::Unchanged, DatabaseConnection, QueryOrder, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{car, errors};

pub const MAX_AGE: i32 = 150;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "drivers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: i32,
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

pub fn validate(name: &str, age: i32) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("driver name required".into()));
    }
    if !(0..=MAX_AGE).contains(&age) {
        return Err(errors::ModelError::Validation(format!("driver age must be within 0..={MAX_AGE}")));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, name: &str, age: i32) -> Result<Model, errors::ModelError> {
    validate(name, age)?;
    let am = ActiveModel { name: Set(name.to_string()), age: Set(age), ..Default::default() };
    Ok(am.insert(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

/// Persist every field of an existing record.
pub async fn update(db: &DatabaseConnection, m: Model) -> Result<Model, errors::ModelError> {
    validate(&m.name, m.age)?;
    let am = ActiveModel { id: Unchanged(m.id), name: Set(m.name), age: Set(m.age) };
    Ok(am.update(db).await?)
}

/// Delete a driver, clearing the driver column of every car that pointed at it.
/// Returns whether a driver row was removed.
pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<bool, errors::ModelError> {
    let txn = db.begin().await?;
    let detached = car::detach_driver(&txn, id).await?;
    let res = Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    debug!(driver_id = id, detached_cars = detached, deleted = res.rows_affected, "driver_deleted");
    Ok(res.rows_affected > 0)
}
