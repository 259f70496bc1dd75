use sea_orm_migration::prelude::*;

pub use sea_orm_migration::MigratorTrait;

mod m20261019_000001_create_users;
mod m20261019_000002_create_orders;
mod m20261019_000003_create_offers;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_users::Migration),
            Box::new(m20261019_000002_create_orders::Migration),
            Box::new(m20261019_000003_create_offers::Migration),
        ]
    }
}
