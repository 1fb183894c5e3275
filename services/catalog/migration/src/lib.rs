use sea_orm_migration::prelude::*;

mod m20250601_000001_create_admins;
mod m20250601_000002_create_site_settings;
mod m20250601_000003_create_sellers;
mod m20250601_000004_create_cars;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_admins::Migration),
            Box::new(m20250601_000002_create_site_settings::Migration),
            Box::new(m20250601_000003_create_sellers::Migration),
            Box::new(m20250601_000004_create_cars::Migration),
        ]
    }
}
