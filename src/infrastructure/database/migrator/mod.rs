//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_entreprises;
mod m20240101_000002_create_borne_bases;
mod m20240101_000003_create_locations;
mod m20240101_000004_create_voitures;
mod m20240101_000005_create_recharge_bases;
mod m20240101_000006_create_bornes_view;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_entreprises::Migration),
            Box::new(m20240101_000002_create_borne_bases::Migration),
            Box::new(m20240101_000003_create_locations::Migration),
            Box::new(m20240101_000004_create_voitures::Migration),
            Box::new(m20240101_000005_create_recharge_bases::Migration),
            Box::new(m20240101_000006_create_bornes_view::Migration),
        ]
    }
}
