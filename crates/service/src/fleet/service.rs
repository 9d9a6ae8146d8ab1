use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Car, CarDraft, CarInput, CarType, CarTypeInput, Driver, DriverInput, EntityRef};
use super::repository::FleetRepository;
use super::views::{CarRecord, CarTypeView, CarView, DriverView};
use crate::errors::ServiceError;

pub const DRIVER: &str = "driver";
pub const CAR: &str = "car";
pub const CAR_TYPE: &str = "car type";

/// Fleet business service independent of web framework.
///
/// Updates copy a fixed set of fields onto the stored record and never replace
/// it wholesale. A car's driver is changed only through [`FleetService::assign_driver`]
/// and [`FleetService::remove_driver`].
pub struct FleetService<R: FleetRepository> {
    repo: Arc<R>,
}

impl<R: FleetRepository> Clone for FleetService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: FleetRepository> FleetService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    // ---- drivers ----

    pub async fn list_drivers(&self) -> Result<Vec<DriverView>, ServiceError> {
        let drivers = self.repo.list_drivers().await?;
        debug!(count = drivers.len(), "list drivers");
        Ok(drivers.into_iter().map(DriverView::from).collect())
    }

    pub async fn get_driver(&self, id: i32) -> Result<DriverView, ServiceError> {
        Ok(self.require_driver(id).await?.into())
    }

    /// Create a driver.
    ///
    /// # Examples
    /// ```
    /// use service::fleet::{FleetService, domain::DriverInput, repository::mock::MockFleetRepository};
    /// use std::sync::Arc;
    /// let svc = FleetService::new(Arc::new(MockFleetRepository::default()));
    /// let d = tokio_test::block_on(svc.create_driver(DriverInput { id: None, name: "Ivan".into(), age: 30 })).unwrap();
    /// assert_eq!(d.name, "Ivan");
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_driver(&self, input: DriverInput) -> Result<DriverView, ServiceError> {
        models::driver::validate(&input.name, input.age)?;
        let created = self.repo.insert_driver(&input.name, input.age).await?;
        info!(driver_id = created.id, "driver_created");
        Ok(created.into())
    }

    #[instrument(skip(self, input))]
    pub async fn update_driver(&self, id: i32, input: DriverInput) -> Result<DriverView, ServiceError> {
        let mut driver = self.require_driver(id).await?;
        models::driver::validate(&input.name, input.age)?;
        driver.name = input.name;
        driver.age = input.age;
        let saved = self.repo.save_driver(driver).await?;
        info!(driver_id = saved.id, "driver_updated");
        Ok(saved.into())
    }

    /// Succeeds whether or not the driver existed. Cars assigned to the driver become driverless.
    #[instrument(skip(self))]
    pub async fn delete_driver(&self, id: i32) -> Result<(), ServiceError> {
        let existed = self.repo.delete_driver(id).await?;
        info!(driver_id = id, existed, "driver_deleted");
        Ok(())
    }

    /// Cars currently assigned to the driver. Empty when there are none,
    /// including when the driver does not exist.
    pub async fn driver_cars(&self, driver_id: i32) -> Result<Vec<CarView>, ServiceError> {
        let cars = self.repo.list_cars_by_driver(driver_id).await?;
        self.car_views(cars).await
    }

    // ---- cars ----

    pub async fn list_cars(&self) -> Result<Vec<CarView>, ServiceError> {
        let cars = self.repo.list_cars().await?;
        debug!(count = cars.len(), "list cars");
        self.car_views(cars).await
    }

    pub async fn get_car(&self, id: i32) -> Result<CarView, ServiceError> {
        let car = self.require_car(id).await?;
        self.car_view(car).await
    }

    /// Create a car. Referenced driver and car type must exist.
    ///
    /// # Examples
    /// ```
    /// use service::fleet::{FleetService, domain::{CarInput, CarTypeInput, EntityRef}, repository::mock::MockFleetRepository};
    /// use std::sync::Arc;
    /// let svc = FleetService::new(Arc::new(MockFleetRepository::default()));
    /// let sedan = tokio_test::block_on(svc.create_car_type(CarTypeInput { id: None, name: "Sedan".into(), description: "4-door".into() })).unwrap();
    /// let input = CarInput { id: None, brand: "Toyota".into(), model: "Camry".into(), year: 2020, driver: None, car_type: Some(EntityRef { id: sedan.id }) };
    /// let car = tokio_test::block_on(svc.create_car(input)).unwrap();
    /// let view = tokio_test::block_on(svc.get_car(car.id)).unwrap();
    /// assert_eq!(view.car_type_name.as_deref(), Some("Sedan"));
    /// ```
    #[instrument(skip(self, input), fields(brand = %input.brand, model = %input.model))]
    pub async fn create_car(&self, input: CarInput) -> Result<CarRecord, ServiceError> {
        models::car::validate(&input.brand, &input.model, input.year)?;
        let driver_id = self.resolve_driver_ref(input.driver).await?;
        let car_type_id = self.resolve_car_type_ref(input.car_type).await?;
        let draft = CarDraft { brand: input.brand, model: input.model, year: input.year, driver_id, car_type_id };
        let created = self.repo.insert_car(draft).await?;
        info!(car_id = created.id, "car_created");
        Ok(created.into())
    }

    /// Copies brand, model, year and car type. The driver assignment is left as is.
    #[instrument(skip(self, input))]
    pub async fn update_car(&self, id: i32, input: CarInput) -> Result<CarRecord, ServiceError> {
        let mut car = self.require_car(id).await?;
        models::car::validate(&input.brand, &input.model, input.year)?;
        car.car_type_id = self.resolve_car_type_ref(input.car_type).await?;
        car.brand = input.brand;
        car.model = input.model;
        car.year = input.year;
        let saved = self.repo.save_car(car).await?;
        info!(car_id = saved.id, "car_updated");
        Ok(saved.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_car(&self, id: i32) -> Result<(), ServiceError> {
        let existed = self.repo.delete_car(id).await?;
        info!(car_id = id, existed, "car_deleted");
        Ok(())
    }

    /// Assign a driver to a car. Nothing is written unless both exist.
    ///
    /// # Examples
    /// ```
    /// use service::fleet::{FleetService, domain::{CarInput, DriverInput}, repository::mock::MockFleetRepository};
    /// use std::sync::Arc;
    /// let svc = FleetService::new(Arc::new(MockFleetRepository::default()));
    /// let d = tokio_test::block_on(svc.create_driver(DriverInput { id: None, name: "Anna".into(), age: 28 })).unwrap();
    /// let c = tokio_test::block_on(svc.create_car(CarInput { id: None, brand: "Lada".into(), model: "Niva".into(), year: 2010, driver: None, car_type: None })).unwrap();
    /// let view = tokio_test::block_on(svc.assign_driver(c.id, d.id)).unwrap();
    /// assert_eq!(view.driver_id, Some(d.id));
    /// assert_eq!(view.driver_name.as_deref(), Some("Anna"));
    /// ```
    #[instrument(skip(self))]
    pub async fn assign_driver(&self, car_id: i32, driver_id: i32) -> Result<CarView, ServiceError> {
        let mut car = self.require_car(car_id).await?;
        let driver = self.require_driver(driver_id).await?;
        car.driver_id = Some(driver.id);
        let saved = self.repo.save_car(car).await?;
        info!(car_id, driver_id, "driver_assigned");
        let car_type_name = self.car_type_name(saved.car_type_id).await?;
        Ok(CarView::new(saved, Some(driver.name), car_type_name))
    }

    /// Clear the car's driver, whether or not one was set.
    #[instrument(skip(self))]
    pub async fn remove_driver(&self, car_id: i32) -> Result<CarView, ServiceError> {
        let mut car = self.require_car(car_id).await?;
        let previous = car.driver_id.take();
        let saved = self.repo.save_car(car).await?;
        info!(car_id, previous_driver_id = ?previous, "driver_removed");
        self.car_view(saved).await
    }

    // ---- car types ----

    pub async fn list_car_types(&self) -> Result<Vec<CarTypeView>, ServiceError> {
        let types = self.repo.list_car_types().await?;
        debug!(count = types.len(), "list car types");
        Ok(types.into_iter().map(CarTypeView::from).collect())
    }

    pub async fn get_car_type(&self, id: i32) -> Result<CarTypeView, ServiceError> {
        Ok(self.require_car_type(id).await?.into())
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_car_type(&self, input: CarTypeInput) -> Result<CarTypeView, ServiceError> {
        models::car_type::validate_name(&input.name)?;
        let created = self.repo.insert_car_type(&input.name, &input.description).await?;
        info!(car_type_id = created.id, "car_type_created");
        Ok(created.into())
    }

    #[instrument(skip(self, input))]
    pub async fn update_car_type(&self, id: i32, input: CarTypeInput) -> Result<CarTypeView, ServiceError> {
        let mut car_type = self.require_car_type(id).await?;
        models::car_type::validate_name(&input.name)?;
        car_type.name = input.name;
        car_type.description = input.description;
        let saved = self.repo.save_car_type(car_type).await?;
        info!(car_type_id = saved.id, "car_type_updated");
        Ok(saved.into())
    }

    /// Succeeds whether or not the type existed. Cars of that type become untyped.
    #[instrument(skip(self))]
    pub async fn delete_car_type(&self, id: i32) -> Result<(), ServiceError> {
        let existed = self.repo.delete_car_type(id).await?;
        info!(car_type_id = id, existed, "car_type_deleted");
        Ok(())
    }

    // ---- helpers ----

    async fn require_driver(&self, id: i32) -> Result<Driver, ServiceError> {
        self.repo.find_driver(id).await?.ok_or_else(|| ServiceError::not_found(DRIVER, id))
    }

    async fn require_car(&self, id: i32) -> Result<Car, ServiceError> {
        self.repo.find_car(id).await?.ok_or_else(|| ServiceError::not_found(CAR, id))
    }

    async fn require_car_type(&self, id: i32) -> Result<CarType, ServiceError> {
        self.repo.find_car_type(id).await?.ok_or_else(|| ServiceError::not_found(CAR_TYPE, id))
    }

    async fn resolve_driver_ref(&self, r: Option<EntityRef>) -> Result<Option<i32>, ServiceError> {
        match r {
            Some(EntityRef { id }) => Ok(Some(self.require_driver(id).await?.id)),
            None => Ok(None),
        }
    }

    async fn resolve_car_type_ref(&self, r: Option<EntityRef>) -> Result<Option<i32>, ServiceError> {
        match r {
            Some(EntityRef { id }) => Ok(Some(self.require_car_type(id).await?.id)),
            None => Ok(None),
        }
    }

    async fn driver_name(&self, id: Option<i32>) -> Result<Option<String>, ServiceError> {
        match id {
            Some(id) => Ok(self.repo.find_driver(id).await?.map(|d| d.name)),
            None => Ok(None),
        }
    }

    async fn car_type_name(&self, id: Option<i32>) -> Result<Option<String>, ServiceError> {
        match id {
            Some(id) => Ok(self.repo.find_car_type(id).await?.map(|t| t.name)),
            None => Ok(None),
        }
    }

    async fn car_view(&self, car: Car) -> Result<CarView, ServiceError> {
        let driver_name = self.driver_name(car.driver_id).await?;
        let car_type_name = self.car_type_name(car.car_type_id).await?;
        Ok(CarView::new(car, driver_name, car_type_name))
    }

    /// Views for many cars, looking up each referenced driver and type once.
    async fn car_views(&self, cars: Vec<Car>) -> Result<Vec<CarView>, ServiceError> {
        let mut drivers: HashMap<i32, Option<String>> = HashMap::new();
        let mut types: HashMap<i32, Option<String>> = HashMap::new();
        let mut out = Vec::with_capacity(cars.len());
        for car in cars {
            if let Some(id) = car.driver_id {
                if !drivers.contains_key(&id) {
                    drivers.insert(id, self.driver_name(Some(id)).await?);
                }
            }
            if let Some(id) = car.car_type_id {
                if !types.contains_key(&id) {
                    types.insert(id, self.car_type_name(Some(id)).await?);
                }
            }
            let driver_name = car.driver_id.and_then(|id| drivers.get(&id).cloned().flatten());
            let car_type_name = car.car_type_id.and_then(|id| types.get(&id).cloned().flatten());
            out.push(CarView::new(car, driver_name, car_type_name));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::repository::mock::MockFleetRepository;

    fn svc() -> FleetService<MockFleetRepository> {
        FleetService::new(Arc::new(MockFleetRepository::default()))
    }

    fn driver_input(name: &str, age: i32) -> DriverInput {
        DriverInput { id: None, name: name.into(), age }
    }

    fn car_input(brand: &str, car_type: Option<i32>) -> CarInput {
        CarInput {
            id: None,
            brand: brand.into(),
            model: "Model".into(),
            year: 2018,
            driver: None,
            car_type: car_type.map(|id| EntityRef { id }),
        }
    }

    #[tokio::test]
    async fn driver_crud_round_trip() -> Result<(), anyhow::Error> {
        let svc = svc();
        let d = svc.create_driver(driver_input("Ivan", 30)).await?;
        assert_eq!(svc.get_driver(d.id).await?, d);

        let updated = svc.update_driver(d.id, DriverInput { id: Some(999), name: "X".into(), age: 31 }).await?;
        assert_eq!(updated, DriverView { id: d.id, name: "X".into(), age: 31 });
        assert_eq!(svc.get_driver(d.id).await?, updated);

        svc.delete_driver(d.id).await?;
        assert!(matches!(svc.get_driver(d.id).await, Err(ServiceError::NotFound { entity: DRIVER, id }) if id == d.id));
        // deleting an absent driver still succeeds
        svc.delete_driver(d.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn create_ignores_client_supplied_id() -> Result<(), anyhow::Error> {
        let svc = svc();
        let a = svc.create_driver(DriverInput { id: Some(77), name: "A".into(), age: 20 }).await?;
        let b = svc.create_driver(DriverInput { id: Some(77), name: "B".into(), age: 21 }).await?;
        assert_ne!(a.id, b.id);
        assert_eq!(svc.list_drivers().await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_driver_is_not_found() {
        let svc = svc();
        let err = svc.update_driver(5, driver_input("X", 30)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { entity: DRIVER, id: 5 }));
    }

    #[tokio::test]
    async fn update_missing_car_or_car_type_is_not_found() {
        let svc = svc();
        let err = svc.update_car(3, car_input("Lada", None)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { entity: CAR, id: 3 }));

        let input = CarTypeInput { id: None, name: "SUV".into(), description: "".into() };
        let err = svc.update_car_type(4, input).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { entity: CAR_TYPE, id: 4 }));
        assert!(svc.list_cars().await.unwrap().is_empty());
        assert!(svc.list_car_types().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_car_with_unknown_car_type_leaves_car_unchanged() -> Result<(), anyhow::Error> {
        let svc = svc();
        let sedan = svc.create_car_type(CarTypeInput { id: None, name: "Sedan".into(), description: "".into() }).await?;
        let car = svc.create_car(car_input("Volvo", Some(sedan.id))).await?;
        let before = svc.get_car(car.id).await?;

        let mut input = car_input("Saab", Some(777));
        input.year = 1999;
        let err = svc.update_car(car.id, input).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { entity: CAR_TYPE, id: 777 }));
        assert_eq!(svc.get_car(car.id).await?, before);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_payloads_are_rejected() {
        let svc = svc();
        assert!(matches!(svc.create_driver(driver_input(" ", 30)).await, Err(ServiceError::Validation(_))));
        assert!(matches!(svc.create_driver(driver_input("A", -3)).await, Err(ServiceError::Validation(_))));
        let mut bad_year = car_input("Toyota", None);
        bad_year.year = 1700;
        assert!(matches!(svc.create_car(bad_year).await, Err(ServiceError::Validation(_))));
        assert!(matches!(
            svc.create_car_type(CarTypeInput { id: None, name: "".into(), description: "".into() }).await,
            Err(ServiceError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn sedan_scenario_denormalizes_car_type_name() -> Result<(), anyhow::Error> {
        let svc = svc();
        let sedan = svc.create_car_type(CarTypeInput { id: None, name: "Sedan".into(), description: "4-door".into() }).await?;
        let car = svc
            .create_car(CarInput { id: None, brand: "Toyota".into(), model: "Camry".into(), year: 2020, driver: None, car_type: Some(EntityRef { id: sedan.id }) })
            .await?;
        assert_eq!(car.car_type, Some(EntityRef { id: sedan.id }));

        let view = svc.get_car(car.id).await?;
        assert_eq!(
            view,
            CarView {
                id: car.id,
                brand: "Toyota".into(),
                model: "Camry".into(),
                year: 2020,
                driver_id: None,
                driver_name: None,
                car_type_id: Some(sedan.id),
                car_type_name: Some("Sedan".into()),
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn create_car_with_unknown_references_is_not_found() {
        let svc = svc();
        let err = svc.create_car(car_input("Toyota", Some(42))).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { entity: CAR_TYPE, id: 42 }));

        let mut with_driver = car_input("Toyota", None);
        with_driver.driver = Some(EntityRef { id: 8 });
        let err = svc.create_car(with_driver).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { entity: DRIVER, id: 8 }));
        assert!(svc.list_cars().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_car_keeps_driver_and_replaces_type() -> Result<(), anyhow::Error> {
        let svc = svc();
        let d = svc.create_driver(driver_input("Anna", 40)).await?;
        let suv = svc.create_car_type(CarTypeInput { id: None, name: "SUV".into(), description: "".into() }).await?;
        let car = svc.create_car(car_input("Lada", Some(suv.id))).await?;
        svc.assign_driver(car.id, d.id).await?;

        let mut input = car_input("Lada", None);
        input.model = "Vesta".into();
        input.year = 2022;
        input.driver = Some(EntityRef { id: 12345 });
        let updated = svc.update_car(car.id, input).await?;
        assert_eq!(updated.model, "Vesta");
        assert_eq!(updated.year, 2022);
        assert_eq!(updated.car_type, None);
        assert_eq!(updated.driver, Some(EntityRef { id: d.id }));
        Ok(())
    }

    #[tokio::test]
    async fn assign_and_remove_driver() -> Result<(), anyhow::Error> {
        let svc = svc();
        let d = svc.create_driver(driver_input("Petr", 45)).await?;
        let car = svc.create_car(car_input("Volga", None)).await?;

        let view = svc.assign_driver(car.id, d.id).await?;
        assert_eq!(view.driver_id, Some(d.id));
        assert_eq!(view.driver_name.as_deref(), Some("Petr"));
        assert_eq!(svc.get_car(car.id).await?.driver_name.as_deref(), Some("Petr"));

        let cleared = svc.remove_driver(car.id).await?;
        assert_eq!(cleared.driver_id, None);
        assert_eq!(cleared.driver_name, None);
        // clearing twice is fine
        assert_eq!(svc.remove_driver(car.id).await?.driver_id, None);
        Ok(())
    }

    #[tokio::test]
    async fn assign_unknown_driver_leaves_car_untouched() -> Result<(), anyhow::Error> {
        let svc = svc();
        let d = svc.create_driver(driver_input("Olga", 33)).await?;
        let car = svc.create_car(car_input("Moskvich", None)).await?;
        svc.assign_driver(car.id, d.id).await?;

        let err = svc.assign_driver(car.id, 9_999).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { entity: DRIVER, id: 9_999 }));
        assert_eq!(svc.get_car(car.id).await?.driver_id, Some(d.id));

        let err = svc.assign_driver(9_998, d.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { entity: CAR, .. }));
        assert!(matches!(svc.remove_driver(9_998).await, Err(ServiceError::NotFound { entity: CAR, .. })));
        Ok(())
    }

    #[tokio::test]
    async fn driver_cars_lists_only_assigned_cars() -> Result<(), anyhow::Error> {
        let svc = svc();
        let c1 = svc.create_car(car_input("one", None)).await?;
        let a = svc.create_driver(driver_input("A", 30)).await?;
        let c2 = svc.create_car(car_input("two", None)).await?;
        let b = svc.create_driver(driver_input("B", 31)).await?;
        let c3 = svc.create_car(car_input("three", None)).await?;

        svc.assign_driver(c3.id, a.id).await?;
        svc.assign_driver(c1.id, a.id).await?;
        svc.assign_driver(c2.id, b.id).await?;

        let ids: Vec<i32> = svc.driver_cars(a.id).await?.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![c1.id, c3.id]);
        assert!(svc.driver_cars(12_345).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn deleting_referenced_records_nulls_car_references() -> Result<(), anyhow::Error> {
        let svc = svc();
        let d = svc.create_driver(driver_input("Temp", 50)).await?;
        let t = svc.create_car_type(CarTypeInput { id: None, name: "Coupe".into(), description: "2-door".into() }).await?;
        let car = svc.create_car(car_input("BMW", Some(t.id))).await?;
        svc.assign_driver(car.id, d.id).await?;

        svc.delete_driver(d.id).await?;
        svc.delete_car_type(t.id).await?;

        let view = svc.get_car(car.id).await?;
        assert_eq!((view.driver_id, view.driver_name), (None, None));
        assert_eq!((view.car_type_id, view.car_type_name), (None, None));
        Ok(())
    }

    #[tokio::test]
    async fn car_type_crud_round_trip() -> Result<(), anyhow::Error> {
        let svc = svc();
        let t = svc.create_car_type(CarTypeInput { id: None, name: "Van".into(), description: "cargo".into() }).await?;
        let updated = svc.update_car_type(t.id, CarTypeInput { id: None, name: "Minivan".into(), description: "people".into() }).await?;
        assert_eq!(updated.id, t.id);
        assert_eq!(svc.list_car_types().await?, vec![updated]);
        svc.delete_car_type(t.id).await?;
        assert!(matches!(svc.get_car_type(t.id).await, Err(ServiceError::NotFound { entity: CAR_TYPE, .. })));
        Ok(())
    }
}
