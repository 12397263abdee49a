pub use super::branch::Entity as Branch;
pub use super::branch_business_hour::Entity as BranchBusinessHour;
pub use super::branch_duration::Entity as BranchDuration;
pub use super::branch_timetable::Entity as BranchTimetable;
pub use super::user::Entity as User;
pub use super::user_branch::Entity as UserBranch;
pub use super::user_license_type::Entity as UserLicenseType;
pub use super::user_plan_type::Entity as UserPlanType;
