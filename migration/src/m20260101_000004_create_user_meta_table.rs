use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserMeta::Table)
                    .if_not_exists()
                    .col(pk_auto(UserMeta::Id))
                    .col(integer(UserMeta::UserId))
                    .col(string(UserMeta::MetaKey))
                    .col(text(UserMeta::MetaValue))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_meta_user_id")
                            .from(UserMeta::Table, UserMeta::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_user_meta_unique")
                            .col(UserMeta::UserId)
                            .col(UserMeta::MetaKey),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserMeta::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserMeta {
    Table,
    Id,
    UserId,
    MetaKey,
    MetaValue,
}
