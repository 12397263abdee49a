//! Factory functions for generating mock user models.

use chrono::{NaiveDate, Utc};
use entity::user::Gender;

use crate::model::UserModel;

/// Password hash that never verifies against any input.
pub static UNUSABLE_PASSWORD: &str = "!";

/// Create a mock user model with standard test values.
///
/// # Arguments
/// - `id` - Primary key to assign
/// - `username` - Login identifier
/// - `branch_id` - Branch the user belongs to
pub fn mock_user_model(id: i32, username: &str, branch_id: i32) -> UserModel {
    let now = Utc::now().naive_utc();
    UserModel {
        id,
        username: username.to_string(),
        password: UNUSABLE_PASSWORD.to_string(),
        surname: "홍".to_string(),
        given_name: "길동".to_string(),
        email: None,
        birthday: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
        gender: Gender::Male,
        phone_number: "010-1234-5678".to_string(),
        branch_id,
        is_active: true,
        is_staff: false,
        is_superuser: false,
        last_login: now,
        date_joined: now,
    }
}
