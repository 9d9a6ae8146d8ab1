use sea_orm::{
    entity::prelude::*, sea_query::Expr, ActiveValue::Unchanged, ConnectionTrait, DatabaseConnection, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

use crate::{car_type, driver, errors};

/// Oldest and newest model years accepted.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1886..=2100;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub brand: String,
    #[sea_orm(column_name = "model")]
    pub model_name: String,
    pub year: i32,
    pub driver_id: Option<i32>,
    pub car_type_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Driver, CarType }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Driver => Entity::belongs_to(driver::Entity)
                .from(Column::DriverId)
                .to(driver::Column::Id)
                .into(),
            Relation::CarType => Entity::belongs_to(car_type::Entity)
                .from(Column::CarTypeId)
                .to(car_type::Column::Id)
                .into(),
        }
    }
}

impl Related<driver::Entity> for Entity {
    fn to() -> RelationDef { Relation::Driver.def() }
}

impl Related<car_type::Entity> for Entity {
    fn to() -> RelationDef { Relation::CarType.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields of a car that do not come from the store.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCar {
    pub brand: String,
    pub model_name: String,
    pub year: i32,
    pub driver_id: Option<i32>,
    pub car_type_id: Option<i32>,
}

pub fn validate(brand: &str, model_name: &str, year: i32) -> Result<(), errors::ModelError> {
    if brand.trim().is_empty() {
        return Err(errors::ModelError::Validation("car brand required".into()));
    }
    if model_name.trim().is_empty() {
        return Err(errors::ModelError::Validation("car model required".into()));
    }
    if !YEAR_RANGE.contains(&year) {
        return Err(errors::ModelError::Validation(format!(
            "car year must be within {}..={}",
            YEAR_RANGE.start(),
            YEAR_RANGE.end()
        )));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, new: NewCar) -> Result<Model, errors::ModelError> {
    validate(&new.brand, &new.model_name, new.year)?;
    let am = ActiveModel {
        brand: Set(new.brand),
        model_name: Set(new.model_name),
        year: Set(new.year),
        driver_id: Set(new.driver_id),
        car_type_id: Set(new.car_type_id),
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

pub async fn find_by_driver_id(db: &DatabaseConnection, driver_id: i32) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find()
        .filter(Column::DriverId.eq(driver_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

pub async fn update(db: &DatabaseConnection, m: Model) -> Result<Model, errors::ModelError> {
    validate(&m.brand, &m.model_name, m.year)?;
    let am = ActiveModel {
        id: Unchanged(m.id),
        brand: Set(m.brand),
        model_name: Set(m.model_name),
        year: Set(m.year),
        driver_id: Set(m.driver_id),
        car_type_id: Set(m.car_type_id),
    };
    Ok(am.update(db).await?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

/// Clear `driver_id` on every car assigned to `driver_id`. Returns the number of cars touched.
pub async fn detach_driver<C: ConnectionTrait>(conn: &C, driver_id: i32) -> Result<u64, errors::ModelError> {
    let res = Entity::update_many()
        .col_expr(Column::DriverId, Expr::value(Option::<i32>::None))
        .filter(Column::DriverId.eq(driver_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

/// Clear `car_type_id` on every car of type `car_type_id`.
pub async fn detach_car_type<C: ConnectionTrait>(conn: &C, car_type_id: i32) -> Result<u64, errors::ModelError> {
    let res = Entity::update_many()
        .col_expr(Column::CarTypeId, Expr::value(Option::<i32>::None))
        .filter(Column::CarTypeId.eq(car_type_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
