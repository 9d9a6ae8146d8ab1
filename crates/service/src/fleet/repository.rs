use async_trait::async_trait;

use super::domain::{Car, CarDraft, CarType, Driver};
use crate::errors::ServiceError;

/// Driver persistence.
#[async_trait]
pub trait DriverRepository: Send + Sync {
    async fn insert_driver(&self, name: &str, age: i32) -> Result<Driver, ServiceError>;
    async fn find_driver(&self, id: i32) -> Result<Option<Driver>, ServiceError>;
    async fn list_drivers(&self) -> Result<Vec<Driver>, ServiceError>;
    async fn save_driver(&self, driver: Driver) -> Result<Driver, ServiceError>;
    /// Removes the driver and clears it from every car. Returns whether a row existed.
    async fn delete_driver(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Car persistence.
#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn insert_car(&self, draft: CarDraft) -> Result<Car, ServiceError>;
    async fn find_car(&self, id: i32) -> Result<Option<Car>, ServiceError>;
    async fn list_cars(&self) -> Result<Vec<Car>, ServiceError>;
    async fn list_cars_by_driver(&self, driver_id: i32) -> Result<Vec<Car>, ServiceError>;
    async fn save_car(&self, car: Car) -> Result<Car, ServiceError>;
    async fn delete_car(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Car type persistence.
#[async_trait]
pub trait CarTypeRepository: Send + Sync {
    async fn insert_car_type(&self, name: &str, description: &str) -> Result<CarType, ServiceError>;
    async fn find_car_type(&self, id: i32) -> Result<Option<CarType>, ServiceError>;
    async fn list_car_types(&self) -> Result<Vec<CarType>, ServiceError>;
    async fn save_car_type(&self, car_type: CarType) -> Result<CarType, ServiceError>;
    /// Removes the car type and clears it from every car.
    async fn delete_car_type(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Everything the fleet service needs from storage.
pub trait FleetRepository: DriverRepository + CarRepository + CarTypeRepository {}

impl<T: DriverRepository + CarRepository + CarTypeRepository> FleetRepository for T {}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct State {
        last_id: i32,
        drivers: BTreeMap<i32, Driver>,
        cars: BTreeMap<i32, Car>,
        car_types: BTreeMap<i32, CarType>,
    }

    impl State {
        // one counter for every table keeps ids unique and increasing
        fn next_id(&mut self) -> i32 {
            self.last_id += 1;
            self.last_id
        }
    }

    #[derive(Default)]
    pub struct MockFleetRepository {
        state: Mutex<State>,
    }

    impl MockFleetRepository {
        fn state(&self) -> Result<MutexGuard<'_, State>, ServiceError> {
            self.state.lock().map_err(|_| ServiceError::Db("mock repository lock poisoned".into()))
        }
    }

    fn missing(entity: &'static str, id: i32) -> ServiceError {
        ServiceError::Db(format!("{entity} {id} does not exist"))
    }

    #[async_trait]
    impl DriverRepository for MockFleetRepository {
        async fn insert_driver(&self, name: &str, age: i32) -> Result<Driver, ServiceError> {
            let mut st = self.state()?;
            let d = Driver { id: st.next_id(), name: name.to_string(), age };
            st.drivers.insert(d.id, d.clone());
            Ok(d)
        }

        async fn find_driver(&self, id: i32) -> Result<Option<Driver>, ServiceError> {
            Ok(self.state()?.drivers.get(&id).cloned())
        }

        async fn list_drivers(&self) -> Result<Vec<Driver>, ServiceError> {
            Ok(self.state()?.drivers.values().cloned().collect())
        }

        async fn save_driver(&self, driver: Driver) -> Result<Driver, ServiceError> {
            let mut st = self.state()?;
            let slot = st.drivers.get_mut(&driver.id).ok_or_else(|| missing("driver", driver.id))?;
            *slot = driver.clone();
            Ok(driver)
        }

        async fn delete_driver(&self, id: i32) -> Result<bool, ServiceError> {
            let mut st = self.state()?;
            for car in st.cars.values_mut().filter(|c| c.driver_id == Some(id)) {
                car.driver_id = None;
            }
            Ok(st.drivers.remove(&id).is_some())
        }
    }

    #[async_trait]
    impl CarRepository for MockFleetRepository {
        async fn insert_car(&self, draft: CarDraft) -> Result<Car, ServiceError> {
            let mut st = self.state()?;
            let car = Car {
                id: st.next_id(),
                brand: draft.brand,
                model: draft.model,
                year: draft.year,
                driver_id: draft.driver_id,
                car_type_id: draft.car_type_id,
            };
            st.cars.insert(car.id, car.clone());
            Ok(car)
        }

        async fn find_car(&self, id: i32) -> Result<Option<Car>, ServiceError> {
            Ok(self.state()?.cars.get(&id).cloned())
        }

        async fn list_cars(&self) -> Result<Vec<Car>, ServiceError> {
            Ok(self.state()?.cars.values().cloned().collect())
        }

        async fn list_cars_by_driver(&self, driver_id: i32) -> Result<Vec<Car>, ServiceError> {
            Ok(self.state()?.cars.values().filter(|c| c.driver_id == Some(driver_id)).cloned().collect())
        }

        async fn save_car(&self, car: Car) -> Result<Car, ServiceError> {
            let mut st = self.state()?;
            let slot = st.cars.get_mut(&car.id).ok_or_else(|| missing("car", car.id))?;
            *slot = car.clone();
            Ok(car)
        }

        async fn delete_car(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.state()?.cars.remove(&id).is_some())
        }
    }

    #[async_trait]
    impl CarTypeRepository for MockFleetRepository {
        async fn insert_car_type(&self, name: &str, description: &str) -> Result<CarType, ServiceError> {
            let mut st = self.state()?;
            let t = CarType { id: st.next_id(), name: name.to_string(), description: description.to_string() };
            st.car_types.insert(t.id, t.clone());
            Ok(t)
        }

        async fn find_car_type(&self, id: i32) -> Result<Option<CarType>, ServiceError> {
            Ok(self.state()?.car_types.get(&id).cloned())
        }

        async fn list_car_types(&self) -> Result<Vec<CarType>, ServiceError> {
            Ok(self.state()?.car_types.values().cloned().collect())
        }

        async fn save_car_type(&self, car_type: CarType) -> Result<CarType, ServiceError> {
            let mut st = self.state()?;
            let slot = st.car_types.get_mut(&car_type.id).ok_or_else(|| missing("car type", car_type.id))?;
            *slot = car_type.clone();
            Ok(car_type)
        }

        async fn delete_car_type(&self, id: i32) -> Result<bool, ServiceError> {
            let mut st = self.state()?;
            for car in st.cars.values_mut().filter(|c| c.car_type_id == Some(id)) {
                car.car_type_id = None;
            }
            Ok(st.car_types.remove(&id).is_some())
        }
    }
}
