//! Business hours, lesson durations and generated timetables of a branch.

use chrono::{NaiveTime, TimeDelta};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        branch::{BranchOperationDto, BusinessHourDto, DurationDto, TimetablePeriodDto},
        form::{is_checked, BusinessHourForm, DurationForm},
    },
    server::{
        data::branch::{
            schedule::{BusinessHourRepository, DurationRepository, TimetableRepository},
            BranchRepository,
        },
        error::{branch::BranchError, validation::FormErrors, Error},
        model::db::{BusinessHourModel, DurationModel, TimetableModel},
        util::validate,
    },
};

pub const CLOSE_BEFORE_OPEN_MESSAGE: &str = "마감 시간은 개점 시간보다 늦어야 합니다.";
pub const LESSON_TOO_SHORT_MESSAGE: &str = "수업 시간은 1분 이상이어야 합니다.";

impl From<BusinessHourModel> for BusinessHourDto {
    fn from(hour: BusinessHourModel) -> Self {
        Self {
            is_weekday: hour.is_weekday,
            open_time: hour.open_time,
            close_time: hour.close_time,
        }
    }
}

impl From<DurationModel> for DurationDto {
    fn from(duration: DurationModel) -> Self {
        Self {
            lesson_minutes: duration.lesson_minutes,
            break_minutes: duration.break_minutes,
        }
    }
}

impl From<TimetableModel> for TimetablePeriodDto {
    fn from(period: TimetableModel) -> Self {
        Self {
            is_weekday: period.is_weekday,
            period: period.period,
            start_time: period.start_time,
            end_time: period.end_time,
        }
    }
}

/// Lesson slots fitting between `open` and `close`.
///
/// Lesson `k` (from 0) starts at `open + k * (lesson + break)` and is kept while it ends no later
/// than `close`. Slots never wrap past midnight.
pub fn timetable_periods(
    open: NaiveTime,
    close: NaiveTime,
    lesson_minutes: i16,
    break_minutes: i16,
) -> Vec<(NaiveTime, NaiveTime)> {
    let mut periods = Vec::new();
    if lesson_minutes <= 0 || break_minutes < 0 {
        return periods;
    }

    let lesson = TimeDelta::minutes(lesson_minutes.into());
    let step = TimeDelta::minutes(i64::from(lesson_minutes) + i64::from(break_minutes));

    let mut start = open;
    loop {
        let (end, wrapped) = start.overflowing_add_signed(lesson);
        if wrapped != 0 || end > close {
            break;
        }
        periods.push((start, end));

        let (next, wrapped) = start.overflowing_add_signed(step);
        if wrapped != 0 {
            break;
        }
        start = next;
    }

    periods
}

/// Parse the business hour form into `(is_weekday, open_time, close_time)`.
pub fn parse_business_hour_form(
    form: &BusinessHourForm,
) -> Result<(bool, NaiveTime, NaiveTime), FormErrors> {
    let mut errors = FormErrors::new();

    let open_time = validate::time(&mut errors, "open_time", &form.open_time);
    let close_time = validate::time(&mut errors, "close_time", &form.close_time);

    match (open_time, close_time) {
        (Some(open_time), Some(close_time)) => {
            Ok((is_checked(&form.is_weekday), open_time, close_time))
        }
        _ => Err(errors),
    }
}

/// Parse the duration form into `(lesson_minutes, break_minutes)`.
pub fn parse_duration_form(form: &DurationForm) -> Result<(i16, i16), FormErrors> {
    let mut errors = FormErrors::new();

    let lesson_minutes =
        validate::small_unsigned(&mut errors, "lesson_minutes", &form.lesson_minutes);
    let break_minutes =
        validate::small_unsigned(&mut errors, "break_minutes", &form.break_minutes);

    match (lesson_minutes, break_minutes) {
        (Some(lesson_minutes), Some(break_minutes)) => Ok((lesson_minutes, break_minutes)),
        _ => Err(errors),
    }
}

pub struct BranchScheduleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BranchScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ensure_branch(&self, branch_id: i32) -> Result<(), Error> {
        match BranchRepository::new(self.db).get_by_id(branch_id).await? {
            Some(_) => Ok(()),
            None => Err(BranchError::NotFound(branch_id).into()),
        }
    }

    /// Sets the weekday or weekend opening hours of a branch, replacing previous hours.
    ///
    /// # Returns
    /// - `Ok(BusinessHourDto)` - Stored hours
    /// - `Err(Error::Validation)` - `open_time` is not before `close_time`
    /// - `Err(Error::BranchError(BranchError::NotFound))` - No branch with this ID
    pub async fn set_business_hour(
        &self,
        branch_id: i32,
        is_weekday: bool,
        open_time: NaiveTime,
        close_time: NaiveTime,
    ) -> Result<BusinessHourDto, Error> {
        if open_time >= close_time {
            return Err(FormErrors::single("close_time", CLOSE_BEFORE_OPEN_MESSAGE).into());
        }
        self.ensure_branch(branch_id).await?;

        let hour = BusinessHourRepository::new(self.db)
            .upsert(branch_id, is_weekday, open_time, close_time)
            .await?;

        Ok(hour.into())
    }

    /// Sets the lesson and break length of a branch in minutes, replacing previous values.
    ///
    /// # Returns
    /// - `Ok(DurationDto)` - Stored durations
    /// - `Err(Error::Validation)` - Lesson shorter than a minute or negative break
    /// - `Err(Error::BranchError(BranchError::NotFound))` - No branch with this ID
    pub async fn set_duration(
        &self,
        branch_id: i32,
        lesson_minutes: i16,
        break_minutes: i16,
    ) -> Result<DurationDto, Error> {
        let mut errors = FormErrors::new();
        if lesson_minutes <= 0 {
            errors.add("lesson_minutes", LESSON_TOO_SHORT_MESSAGE);
        }
        if break_minutes < 0 {
            errors.add("break_minutes", validate::INVALID_NUMBER_MESSAGE);
        }
        errors.into_result()?;

        self.ensure_branch(branch_id).await?;

        let duration = DurationRepository::new(self.db)
            .upsert(branch_id, lesson_minutes, break_minutes)
            .await?;

        Ok(duration.into())
    }

    /// Business hours, durations and timetable of a branch.
    ///
    /// Missing metadata is returned empty rather than as an error.
    pub async fn get_operation(&self, branch_id: i32) -> Result<BranchOperationDto, Error> {
        let business_hours = BusinessHourRepository::new(self.db)
            .get_by_branch(branch_id)
            .await?;
        let duration = DurationRepository::new(self.db)
            .get_by_branch(branch_id)
            .await?;
        let timetable = TimetableRepository::new(self.db)
            .get_by_branch(branch_id)
            .await?;

        Ok(BranchOperationDto {
            business_hours: business_hours.into_iter().map(BusinessHourDto::from).collect(),
            duration: duration.map(DurationDto::from),
            timetable: timetable.into_iter().map(TimetablePeriodDto::from).collect(),
        })
    }

    /// Regenerates the weekday or weekend timetable from business hours and durations.
    ///
    /// Previous periods for the flag are replaced within one transaction.
    ///
    /// # Returns
    /// - `Ok(Vec<TimetablePeriodDto>)` - New periods numbered from 1, possibly empty when no
    ///   lesson fits the opening hours
    /// - `Err(Error::BranchError(BranchError::MissingBusinessHour))` - No hours for the flag
    /// - `Err(Error::BranchError(BranchError::MissingDuration))` - No durations for the branch
    pub async fn generate_timetable(
        &self,
        branch_id: i32,
        is_weekday: bool,
    ) -> Result<Vec<TimetablePeriodDto>, Error> {
        let txn = self.db.begin().await?;

        let hour = BusinessHourRepository::new(&txn)
            .get(branch_id, is_weekday)
            .await?
            .ok_or(BranchError::MissingBusinessHour {
                branch_id,
                is_weekday,
            })?;
        let duration = DurationRepository::new(&txn)
            .get_by_branch(branch_id)
            .await?
            .ok_or(BranchError::MissingDuration(branch_id))?;

        let periods = timetable_periods(
            hour.open_time,
            hour.close_time,
            duration.lesson_minutes,
            duration.break_minutes,
        );

        let timetable = TimetableRepository::new(&txn)
            .replace(branch_id, is_weekday, periods)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            branch_id = branch_id,
            is_weekday = is_weekday,
            periods = timetable.len(),
            "Generated branch timetable"
        );

        Ok(timetable.into_iter().map(TimetablePeriodDto::from).collect())
    }
}
