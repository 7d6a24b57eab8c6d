pub use sea_orm_migration::prelude::*;

mod m20260301_000001_person;
mod m20260301_000002_timebook_user;
mod m20260301_000003_timebook_group;
mod m20260301_000004_timebook_user_group;
mod m20260301_000005_project;
mod m20260301_000006_booking;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_person::Migration),
            Box::new(m20260301_000002_timebook_user::Migration),
            Box::new(m20260301_000003_timebook_group::Migration),
            Box::new(m20260301_000004_timebook_user_group::Migration),
            Box::new(m20260301_000005_project::Migration),
            Box::new(m20260301_000006_booking::Migration),
        ]
    }
}
