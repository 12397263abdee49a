//! SeaORM entities for the IMX schema.

pub mod prelude;

pub mod branch;
pub mod branch_business_hour;
pub mod branch_duration;
pub mod branch_timetable;
pub mod user;
pub mod user_branch;
pub mod user_license_type;
pub mod user_plan_type;
