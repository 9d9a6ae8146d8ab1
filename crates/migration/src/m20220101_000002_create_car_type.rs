//! Create `car_types` table.
//!
//! Classification of cars (sedan, SUV, ...). Referenced by `cars.car_type_id`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CarTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(CarTypes::Id))
                    .col(string_len(CarTypes::Name, 255))
                    .col(text(CarTypes::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CarTypes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CarTypes { Table, Id, Name, Description }
