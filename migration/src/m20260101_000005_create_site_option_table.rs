use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SiteOption::Table)
                    .if_not_exists()
                    .col(string(SiteOption::Name).primary_key())
                    .col(text(SiteOption::Value))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiteOption::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SiteOption {
    Table,
    Name,
    Value,
}
