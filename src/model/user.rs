use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub surname: String,
    pub given_name: String,
    pub email: Option<String>,
    pub birthday: NaiveDate,
    /// Stored gender code, `1` male or `2` female
    pub gender: i32,
    pub gender_label: String,
    pub phone_number: String,
    pub branch_id: i32,
    pub license_type: Option<String>,
    pub plan_type: Option<String>,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub last_login: NaiveDateTime,
    pub date_joined: NaiveDateTime,
}
