use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cars::Table)
                    .if_not_exists()
                    .col(pk_auto(Cars::Id))
                    .col(string_len(Cars::Brand, 255))
                    .col(string_len(Cars::Model, 255))
                    .col(integer(Cars::Year))
                    .col(integer_null(Cars::DriverId))
                    .col(integer_null(Cars::CarTypeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cars_driver")
                            .from(Cars::Table, Cars::DriverId)
                            .to(Drivers::Table, Drivers::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cars_car_type")
                            .from(Cars::Table, Cars::CarTypeId)
                            .to(CarTypes::Table, CarTypes::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cars::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Cars {
    Table,
    Id,
    Brand,
    Model,
    Year,
    DriverId,
    CarTypeId,
}

#[derive(DeriveIden)]
enum Drivers { Table, Id }

#[derive(DeriveIden)]
enum CarTypes { Table, Id }
