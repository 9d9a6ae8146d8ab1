use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::{car, car_type, driver};

use crate::errors::ServiceError;
use crate::fleet::domain::{Car, CarDraft, CarType, Driver};
use crate::fleet::repository::{CarRepository, CarTypeRepository, DriverRepository};

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmFleetRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmFleetRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

impl From<driver::Model> for Driver {
    fn from(m: driver::Model) -> Self { Driver { id: m.id, name: m.name, age: m.age } }
}

impl From<car_type::Model> for CarType {
    fn from(m: car_type::Model) -> Self { CarType { id: m.id, name: m.name, description: m.description } }
}

impl From<car::Model> for Car {
    fn from(m: car::Model) -> Self {
        Car {
            id: m.id,
            brand: m.brand,
            model: m.model_name,
            year: m.year,
            driver_id: m.driver_id,
            car_type_id: m.car_type_id,
        }
    }
}

fn all<M, T: From<M>>(rows: Vec<M>) -> Vec<T> {
    rows.into_iter().map(T::from).collect()
}

#[async_trait]
impl DriverRepository for SeaOrmFleetRepository {
    async fn insert_driver(&self, name: &str, age: i32) -> Result<Driver, ServiceError> {
        Ok(driver::create(&self.db, name, age).await?.into())
    }

    async fn find_driver(&self, id: i32) -> Result<Option<Driver>, ServiceError> {
        Ok(driver::find_by_id(&self.db, id).await?.map(Driver::from))
    }

    async fn list_drivers(&self) -> Result<Vec<Driver>, ServiceError> {
        Ok(all(driver::find_all(&self.db).await?))
    }

    async fn save_driver(&self, d: Driver) -> Result<Driver, ServiceError> {
        let m = driver::Model { id: d.id, name: d.name, age: d.age };
        Ok(driver::update(&self.db, m).await?.into())
    }

    async fn delete_driver(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(driver::delete_by_id(&self.db, id).await?)
    }
}

#[async_trait]
impl CarRepository for SeaOrmFleetRepository {
    async fn insert_car(&self, draft: CarDraft) -> Result<Car, ServiceError> {
        let new = car::NewCar {
            brand: draft.brand,
            model_name: draft.model,
            year: draft.year,
            driver_id: draft.driver_id,
            car_type_id: draft.car_type_id,
        };
        Ok(car::create(&self.db, new).await?.into())
    }

    async fn find_car(&self, id: i32) -> Result<Option<Car>, ServiceError> {
        Ok(car::find_by_id(&self.db, id).await?.map(Car::from))
    }

    async fn list_cars(&self) -> Result<Vec<Car>, ServiceError> {
        Ok(all(car::find_all(&self.db).await?))
    }

    async fn list_cars_by_driver(&self, driver_id: i32) -> Result<Vec<Car>, ServiceError> {
        Ok(all(car::find_by_driver_id(&self.db, driver_id).await?))
    }

    async fn save_car(&self, c: Car) -> Result<Car, ServiceError> {
        let m = car::Model {
            id: c.id,
            brand: c.brand,
            model_name: c.model,
            year: c.year,
            driver_id: c.driver_id,
            car_type_id: c.car_type_id,
        };
        Ok(car::update(&self.db, m).await?.into())
    }

    async fn delete_car(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(car::delete_by_id(&self.db, id).await?)
    }
}

#[async_trait]
impl CarTypeRepository for SeaOrmFleetRepository {
    async fn insert_car_type(&self, name: &str, description: &str) -> Result<CarType, ServiceError> {
        Ok(car_type::create(&self.db, name, description).await?.into())
    }

    async fn find_car_type(&self, id: i32) -> Result<Option<CarType>, ServiceError> {
        Ok(car_type::find_by_id(&self.db, id).await?.map(CarType::from))
    }

    async fn list_car_types(&self) -> Result<Vec<CarType>, ServiceError> {
        Ok(all(car_type::find_all(&self.db).await?))
    }

    async fn save_car_type(&self, t: CarType) -> Result<CarType, ServiceError> {
        let m = car_type::Model { id: t.id, name: t.name, description: t.description };
        Ok(car_type::update(&self.db, m).await?.into())
    }

    async fn delete_car_type(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(car_type::delete_by_id(&self.db, id).await?)
    }
}
