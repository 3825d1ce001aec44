pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_role_table;
mod m20260101_000003_create_user_role_table;
mod m20260101_000004_create_user_meta_table;
mod m20260101_000005_create_site_option_table;
mod m20260101_000006_create_transient_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_role_table::Migration),
            Box::new(m20260101_000003_create_user_role_table::Migration),
            Box::new(m20260101_000004_create_user_meta_table::Migration),
            Box::new(m20260101_000005_create_site_option_table::Migration),
            Box::new(m20260101_000006_create_transient_table::Migration),
        ]
    }
}
