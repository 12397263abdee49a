//! Language and time zone pages are rendered in.
//!
//! Timestamps are stored in UTC. The configured time zone is installed once at startup and
//! used to show them as local wall-clock time. Before [`init`] runs, `ko-kr` and
//! `Asia/Seoul` apply.

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

pub static DEFAULT_LANGUAGE_CODE: &str = "ko-kr";
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Asia::Seoul;

#[derive(Clone, Debug)]
pub struct Locale {
    pub language_code: String,
    pub time_zone: Tz,
}

static LOCALE: OnceLock<Locale> = OnceLock::new();

/// Install the configured locale. Only the first call takes effect.
pub fn init(locale: Locale) {
    if let Err(locale) = LOCALE.set(locale) {
        tracing::warn!(
            language = %locale.language_code,
            time_zone = %locale.time_zone,
            "Locale already initialized, keeping the first one"
        );
    }
}

pub fn time_zone() -> Tz {
    LOCALE
        .get()
        .map(|locale| locale.time_zone)
        .unwrap_or(DEFAULT_TIME_ZONE)
}

/// Primary language subtag, e.g. `ko` for `ko-kr`
pub fn language() -> &'static str {
    let code = LOCALE
        .get()
        .map(|locale| locale.language_code.as_str())
        .unwrap_or(DEFAULT_LANGUAGE_CODE);

    code.split('-').next().unwrap_or(code)
}

/// Wall-clock time in `tz` of a UTC timestamp
pub fn to_local(utc: NaiveDateTime, tz: Tz) -> NaiveDateTime {
    Utc.from_utc_datetime(&utc).with_timezone(&tz).naive_local()
}

/// UTC range `[start, end)` covering the calendar `year` as observed in `tz`
pub fn year_bounds(year: i32, tz: Tz) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let new_year = |year: i32| {
        let midnight = NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)?;
        tz.from_local_datetime(&midnight)
            .earliest()
            .map(|start| start.naive_utc())
    };

    Some((new_year(year)?, new_year(year.checked_add(1)?)?))
}
