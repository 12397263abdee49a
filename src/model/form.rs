//! Raw HTML form payloads.
//!
//! Every field is kept as the submitted string so a rejected form can be rendered again with
//! exactly what the visitor typed. Parsing and validation happen in the service layer.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchForm {
    pub name: String,
    pub equipment_count: String,
    pub postcode: String,
    pub street_address: String,
    pub detailed_address: String,
    pub phone_number_1: String,
    pub phone_number_2: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserForm {
    pub username: String,
    pub password: String,
    pub branch: String,
    pub license_type: String,
    pub plan_type: String,
    pub surname: String,
    pub given_name: String,
    pub email: String,
    pub birthday: String,
    pub gender: String,
    pub phone_number: String,
    pub is_staff: Option<String>,
    pub is_superuser: Option<String>,
}

/// Edit form for an existing account; the login identifier and password are not editable here.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserChangeForm {
    pub surname: String,
    pub given_name: String,
    pub birthday: String,
    pub gender: String,
    pub phone_number: String,
    pub is_active: Option<String>,
    pub is_staff: Option<String>,
    pub is_superuser: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessHourForm {
    pub is_weekday: Option<String>,
    pub open_time: String,
    pub close_time: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationForm {
    pub lesson_minutes: String,
    pub break_minutes: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableForm {
    pub is_weekday: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveForm {
    pub is_active: Option<String>,
}

/// Checkbox values are only submitted when ticked.
pub fn is_checked(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty() && v != "false")
}

/// Query string of the back-office user list.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserListQuery {
    /// Substring of a name or phone number
    pub q: String,
    pub gender: String,
    pub year: String,
}

/// Query string of the back-office branch list.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchListQuery {
    pub q: String,
    /// `1` open only, `0` closed only, empty for all
    pub is_active: String,
}
