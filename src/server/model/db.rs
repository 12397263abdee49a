//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate.

/// Branch (physical driving-school location).
///
/// # Fields (from `entity::branch::Model`)
/// - `id` - Primary key
/// - `name` - Globally unique branch name
/// - `postcode`, `street_address`, `detailed_address` - Postal address
/// - `phone_number_1`, `phone_number_2` - Validated contact numbers, the second optional
/// - `equipment_count` - Number of trainees the branch can serve at once
/// - `is_active` - Whether the branch is open
/// - `created_at`, `updated_at` - Record timestamps
pub type BranchModel = entity::branch::Model;

/// Weekday or weekend opening hours of a branch.
pub type BusinessHourModel = entity::branch_business_hour::Model;

/// Lesson and break length of a branch, in minutes.
pub type DurationModel = entity::branch_duration::Model;

/// Numbered lesson period of a branch.
pub type TimetableModel = entity::branch_timetable::Model;

/// Authenticatable user account.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `username` - Unique login identifier
/// - `password` - argon2id hash, or `!` when the account has no usable password
/// - `surname`, `given_name`, `email`, `birthday`, `gender`, `phone_number` - Personal details
/// - `branch_id` - Branch the user belongs to, reset to the default branch on branch deletion
/// - `is_active`, `is_staff`, `is_superuser` - Permission flags
/// - `last_login`, `date_joined` - Account timestamps
pub type UserModel = entity::user::Model;

pub type UserBranchModel = entity::user_branch::Model;
pub type UserLicenseTypeModel = entity::user_license_type::Model;
pub type UserPlanTypeModel = entity::user_plan_type::Model;
