use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Cars: lookup by assigned driver
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_cars_driver_id")
                    .table(Cars::Table)
                    .col(Cars::DriverId)
                    .to_owned(),
            )
            .await?;

        // Cars: lookup by car type, used when a type is deleted
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_cars_car_type_id")
                    .table(Cars::Table)
                    .col(Cars::CarTypeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_cars_car_type_id").table(Cars::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_cars_driver_id").table(Cars::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Cars { Table, DriverId, CarTypeId }
