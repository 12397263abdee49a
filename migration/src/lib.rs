pub use sea_orm_migration::prelude::*;

mod m20250905_000001_branch;
mod m20250905_000002_branch_business_hour;
mod m20250905_000003_branch_duration;
mod m20250905_000004_branch_timetable;
mod m20250905_000005_user;
mod m20250905_000006_user_license_type;
mod m20250905_000007_user_plan_type;
mod m20250905_000008_user_branch;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250905_000001_branch::Migration),
            Box::new(m20250905_000002_branch_business_hour::Migration),
            Box::new(m20250905_000003_branch_duration::Migration),
            Box::new(m20250905_000004_branch_timetable::Migration),
            Box::new(m20250905_000005_user::Migration),
            Box::new(m20250905_000006_user_license_type::Migration),
            Box::new(m20250905_000007_user_plan_type::Migration),
            Box::new(m20250905_000008_user_branch::Migration),
        ]
    }
}
