use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transient::Table)
                    .if_not_exists()
                    .col(string(Transient::Key).primary_key())
                    .col(text(Transient::Value))
                    .col(timestamp_with_time_zone_null(Transient::ExpiresAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transient::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Transient {
    Table,
    Key,
    Value,
    ExpiresAt,
}
