//! Field validators for submitted forms.
//!
//! Each helper records its message in a [`FormErrors`] under the field name and returns whether
//! the value passed, so callers can skip follow-up checks on a rejected field.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::server::error::validation::FormErrors;

/// 2–4 digit area or carrier prefix, 3–4 digit exchange, 4 digit line, hyphens optional.
static PHONE_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{2,4}-?\d{3,4}-?\d{4}$").expect("phone number pattern is a valid regex")
});

pub const PHONE_NUMBER_MESSAGE: &str = "올바른 전화번호 형식이 아닙니다.";
pub const REQUIRED_MESSAGE: &str = "필수 항목입니다.";
pub const INVALID_NUMBER_MESSAGE: &str = "올바른 숫자를 입력해 주세요.";
pub const INVALID_DATE_MESSAGE: &str = "올바른 날짜(YYYY-MM-DD)를 입력해 주세요.";
pub const INVALID_TIME_MESSAGE: &str = "올바른 시간(HH:MM)을 입력해 주세요.";
pub const INVALID_CHOICE_MESSAGE: &str = "올바른 항목을 선택해 주세요.";

/// Check a Korean phone number such as `02-1234-5678` or `01012345678`.
///
/// # Returns
/// - `Ok(())` - The whole value matches the phone number pattern
/// - `Err(&str)` - Localized message to show next to the field
pub fn validate_phone_number(value: &str) -> Result<(), &'static str> {
    if PHONE_NUMBER_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(PHONE_NUMBER_MESSAGE)
    }
}

pub fn required(errors: &mut FormErrors, field: &str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.add(field, REQUIRED_MESSAGE);
        return false;
    }

    true
}

/// Length is counted in characters, matching the column limits of the schema.
pub fn max_length(errors: &mut FormErrors, field: &str, value: &str, max: usize) -> bool {
    if value.chars().count() > max {
        errors.add(field, format!("{max}자 이하로 입력해 주세요."));
        return false;
    }

    true
}

pub fn phone_number(errors: &mut FormErrors, field: &str, value: &str) -> bool {
    match validate_phone_number(value) {
        Ok(()) => true,
        Err(message) => {
            errors.add(field, message);
            false
        }
    }
}

/// Parse a non-negative integer that fits in `i16`.
pub fn small_unsigned(errors: &mut FormErrors, field: &str, value: &str) -> Option<i16> {
    match value.trim().parse::<i16>() {
        Ok(number) if number >= 0 => Some(number),
        _ => {
            errors.add(field, INVALID_NUMBER_MESSAGE);
            None
        }
    }
}

pub fn date(errors: &mut FormErrors, field: &str, value: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add(field, INVALID_DATE_MESSAGE);
            None
        }
    }
}

/// Accepts `HH:MM` as submitted by `<input type="time">`, or `HH:MM:SS`.
pub fn time(errors: &mut FormErrors, field: &str, value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    let parsed = NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"));

    match parsed {
        Ok(time) => Some(time),
        Err(_) => {
            errors.add(field, INVALID_TIME_MESSAGE);
            None
        }
    }
}

/// Empty optional inputs become `None`.
pub fn optional(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}
