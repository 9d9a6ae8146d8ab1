use anyhow::Result;

use super::setup_test_db;
use crate::{car, car_type, driver};

async fn make_car(db: &sea_orm::DatabaseConnection, brand: &str, driver_id: Option<i32>, car_type_id: Option<i32>) -> Result<car::Model> {
    Ok(car::create(
        db,
        car::NewCar { brand: brand.into(), model_name: "X".into(), year: 2015, driver_id, car_type_id },
    )
    .await?)
}

/// Cars are found by driver regardless of how drivers and cars were interleaved.
#[tokio::test]
async fn test_find_by_driver_id() -> Result<()> {
    let db = setup_test_db().await?;

    let a = driver::create(&db, "A", 30).await?;
    let c1 = make_car(&db, "one", Some(a.id), None).await?;
    let b = driver::create(&db, "B", 40).await?;
    let _c2 = make_car(&db, "two", Some(b.id), None).await?;
    let c3 = make_car(&db, "three", Some(a.id), None).await?;
    let _c4 = make_car(&db, "four", None, None).await?;

    let cars = car::find_by_driver_id(&db, a.id).await?;
    assert_eq!(cars.iter().map(|c| c.id).collect::<Vec<_>>(), vec![c1.id, c3.id]);
    assert!(car::find_by_driver_id(&db, 9_999).await?.is_empty());
    Ok(())
}

/// Deleting a driver leaves its cars driverless instead of dangling.
#[tokio::test]
async fn test_delete_driver_clears_car_reference() -> Result<()> {
    let db = setup_test_db().await?;

    let d = driver::create(&db, "Gone", 50).await?;
    let keep = driver::create(&db, "Stays", 51).await?;
    let c1 = make_car(&db, "one", Some(d.id), None).await?;
    let c2 = make_car(&db, "two", Some(keep.id), None).await?;

    assert!(driver::delete_by_id(&db, d.id).await?);

    let c1 = car::find_by_id(&db, c1.id).await?.expect("car survives driver delete");
    assert_eq!(c1.driver_id, None);
    let c2 = car::find_by_id(&db, c2.id).await?.expect("other car untouched");
    assert_eq!(c2.driver_id, Some(keep.id));
    assert!(car::find_by_driver_id(&db, d.id).await?.is_empty());
    Ok(())
}

/// Deleting a car type leaves its cars untyped.
#[tokio::test]
async fn test_delete_car_type_clears_car_reference() -> Result<()> {
    let db = setup_test_db().await?;

    let suv = car_type::create(&db, "SUV", "big").await?;
    let c = make_car(&db, "one", None, Some(suv.id)).await?;
    assert_eq!(car::find_by_id(&db, c.id).await?.and_then(|c| c.car_type_id), Some(suv.id));

    assert!(car_type::delete_by_id(&db, suv.id).await?);

    let c = car::find_by_id(&db, c.id).await?.expect("car survives type delete");
    assert_eq!(c.car_type_id, None);
    Ok(())
}

#[tokio::test]
async fn test_detach_driver_reports_rows_touched() -> Result<()> {
    let db = setup_test_db().await?;

    let d = driver::create(&db, "Multi", 33).await?;
    for brand in ["a", "b", "c"] {
        make_car(&db, brand, Some(d.id), None).await?;
    }
    assert_eq!(car::detach_driver(&db, d.id).await?, 3);
    assert_eq!(car::detach_driver(&db, d.id).await?, 0);
    Ok(())
}
