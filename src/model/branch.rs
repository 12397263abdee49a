use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BranchDto {
    pub id: i32,
    pub name: String,
    /// Name as shown to visitors, always ending in `점`
    pub display_name: String,
    pub postcode: String,
    pub street_address: String,
    pub detailed_address: String,
    pub phone_number_1: String,
    pub phone_number_2: Option<String>,
    pub equipment_count: i16,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusinessHourDto {
    pub is_weekday: bool,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DurationDto {
    pub lesson_minutes: i16,
    pub break_minutes: i16,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimetablePeriodDto {
    pub is_weekday: bool,
    pub period: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Operational metadata of a single branch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchOperationDto {
    pub business_hours: Vec<BusinessHourDto>,
    pub duration: Option<DurationDto>,
    pub timetable: Vec<TimetablePeriodDto>,
}
