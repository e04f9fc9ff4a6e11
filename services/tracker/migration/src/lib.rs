pub use sea_orm_migration::prelude::*;

mod m20250116_000001_create_users;
mod m20250116_000002_create_intensity;
mod m20250116_000003_create_weight;
mod m20250116_000004_create_nutrition;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250116_000001_create_users::Migration),
            Box::new(m20250116_000002_create_intensity::Migration),
            Box::new(m20250116_000003_create_weight::Migration),
            Box::new(m20250116_000004_create_nutrition::Migration),
        ]
    }
}
