pub use sea_orm_migration::prelude::*;

mod m20260815_000001_family;
mod m20260815_000002_profile;
mod m20260815_000003_family_member;
mod m20260815_000004_family_invite;
mod m20260815_000005_child;
mod m20260815_000006_profile_measurement;
mod m20260815_000007_child_measurement;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_family::Migration),
            Box::new(m20260815_000002_profile::Migration),
            Box::new(m20260815_000003_family_member::Migration),
            Box::new(m20260815_000004_family_invite::Migration),
            Box::new(m20260815_000005_child::Migration),
            Box::new(m20260815_000006_profile_measurement::Migration),
            Box::new(m20260815_000007_child_measurement::Migration),
        ]
    }
}
