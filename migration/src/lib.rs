pub use sea_orm_migration::prelude::*;

mod m20260101_000001_users;
mod m20260101_000002_runs;
mod m20260101_000003_rune_drops;
mod m20260101_000004_sessions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_users::Migration),
            Box::new(m20260101_000002_runs::Migration),
            Box::new(m20260101_000003_rune_drops::Migration),
            Box::new(m20260101_000004_sessions::Migration),
        ]
    }
}
