//! Operational metadata of a branch: business hours, lesson durations and timetable periods.

use chrono::NaiveTime;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct BusinessHourRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BusinessHourRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(
        &self,
        branch_id: i32,
        is_weekday: bool,
    ) -> Result<Option<entity::branch_business_hour::Model>, DbErr> {
        entity::prelude::BranchBusinessHour::find()
            .filter(entity::branch_business_hour::Column::BranchId.eq(branch_id))
            .filter(entity::branch_business_hour::Column::IsWeekday.eq(is_weekday))
            .one(self.db)
            .await
    }

    /// Weekday hours first, then weekend hours
    pub async fn get_by_branch(
        &self,
        branch_id: i32,
    ) -> Result<Vec<entity::branch_business_hour::Model>, DbErr> {
        entity::prelude::BranchBusinessHour::find()
            .filter(entity::branch_business_hour::Column::BranchId.eq(branch_id))
            .order_by_desc(entity::branch_business_hour::Column::IsWeekday)
            .all(self.db)
            .await
    }

    /// Inserts or replaces the hours of a branch for the weekday/weekend flag
    pub async fn upsert(
        &self,
        branch_id: i32,
        is_weekday: bool,
        open_time: NaiveTime,
        close_time: NaiveTime,
    ) -> Result<entity::branch_business_hour::Model, DbErr> {
        match self.get(branch_id, is_weekday).await? {
            Some(existing) => {
                let mut hour_am = existing.into_active_model();
                hour_am.open_time = ActiveValue::Set(open_time);
                hour_am.close_time = ActiveValue::Set(close_time);

                hour_am.update(self.db).await
            }
            None => {
                entity::branch_business_hour::ActiveModel {
                    branch_id: ActiveValue::Set(branch_id),
                    is_weekday: ActiveValue::Set(is_weekday),
                    open_time: ActiveValue::Set(open_time),
                    close_time: ActiveValue::Set(close_time),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    pub async fn delete_by_branch(&self, branch_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::BranchBusinessHour::delete_many()
            .filter(entity::branch_business_hour::Column::BranchId.eq(branch_id))
            .exec(self.db)
            .await
    }
}

pub struct DurationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DurationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_branch(
        &self,
        branch_id: i32,
    ) -> Result<Option<entity::branch_duration::Model>, DbErr> {
        entity::prelude::BranchDuration::find()
            .filter(entity::branch_duration::Column::BranchId.eq(branch_id))
            .one(self.db)
            .await
    }

    /// Inserts or replaces the lesson and break lengths of a branch, in minutes
    pub async fn upsert(
        &self,
        branch_id: i32,
        lesson_minutes: i16,
        break_minutes: i16,
    ) -> Result<entity::branch_duration::Model, DbErr> {
        entity::prelude::BranchDuration::insert(entity::branch_duration::ActiveModel {
            branch_id: ActiveValue::Set(branch_id),
            lesson_minutes: ActiveValue::Set(lesson_minutes),
            break_minutes: ActiveValue::Set(break_minutes),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::branch_duration::Column::BranchId)
                .update_columns([
                    entity::branch_duration::Column::LessonMinutes,
                    entity::branch_duration::Column::BreakMinutes,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    pub async fn delete_by_branch(&self, branch_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::BranchDuration::delete_many()
            .filter(entity::branch_duration::Column::BranchId.eq(branch_id))
            .exec(self.db)
            .await
    }
}

pub struct TimetableRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimetableRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Weekday periods first, each group ordered by period number
    pub async fn get_by_branch(
        &self,
        branch_id: i32,
    ) -> Result<Vec<entity::branch_timetable::Model>, DbErr> {
        entity::prelude::BranchTimetable::find()
            .filter(entity::branch_timetable::Column::BranchId.eq(branch_id))
            .order_by_desc(entity::branch_timetable::Column::IsWeekday)
            .order_by_asc(entity::branch_timetable::Column::Period)
            .all(self.db)
            .await
    }

    /// Replaces every period of a branch for the weekday/weekend flag
    ///
    /// `periods` holds `(start_time, end_time)` pairs which are numbered from 1 in order.
    /// Run inside a transaction so readers never observe a partially written timetable.
    pub async fn replace(
        &self,
        branch_id: i32,
        is_weekday: bool,
        periods: Vec<(NaiveTime, NaiveTime)>,
    ) -> Result<Vec<entity::branch_timetable::Model>, DbErr> {
        entity::prelude::BranchTimetable::delete_many()
            .filter(entity::branch_timetable::Column::BranchId.eq(branch_id))
            .filter(entity::branch_timetable::Column::IsWeekday.eq(is_weekday))
            .exec(self.db)
            .await?;

        if periods.is_empty() {
            return Ok(Vec::new());
        }

        let rows = periods
            .into_iter()
            .enumerate()
            .map(
                |(index, (start_time, end_time))| entity::branch_timetable::ActiveModel {
                    branch_id: ActiveValue::Set(branch_id),
                    is_weekday: ActiveValue::Set(is_weekday),
                    period: ActiveValue::Set(index as i16 + 1),
                    start_time: ActiveValue::Set(start_time),
                    end_time: ActiveValue::Set(end_time),
                    ..Default::default()
                },
            );

        entity::prelude::BranchTimetable::insert_many(rows)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn delete_by_branch(&self, branch_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::BranchTimetable::delete_many()
            .filter(entity::branch_timetable::Column::BranchId.eq(branch_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    mod business_hour {
        use imx_test_utils::prelude::*;

        use super::hm;
        use crate::server::data::branch::schedule::BusinessHourRepository;

        /// Expect a second upsert for the same flag to replace the first
        #[tokio::test]
        async fn upsert_replaces_existing_hours() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_branch_tables().build().await?;
            let branch = test.branch().insert_mock_branch("강남").await?;

            let hour_repo = BusinessHourRepository::new(&test.db);
            let first = hour_repo.upsert(branch.id, true, hm(9, 0), hm(18, 0)).await?;
            let second = hour_repo.upsert(branch.id, true, hm(10, 0), hm(20, 0)).await?;

            assert_eq!(first.id, second.id);
            assert_eq!(second.open_time, hm(10, 0));
            assert_eq!(hour_repo.get_by_branch(branch.id).await?.len(), 1);

            Ok(())
        }

        /// Expect weekday and weekend hours to be stored separately, weekday first
        #[tokio::test]
        async fn keeps_weekday_and_weekend_apart() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_branch_tables().build().await?;
            let branch = test.branch().insert_mock_branch("강남").await?;

            let hour_repo = BusinessHourRepository::new(&test.db);
            hour_repo.upsert(branch.id, false, hm(10, 0), hm(15, 0)).await?;
            hour_repo.upsert(branch.id, true, hm(9, 0), hm(21, 0)).await?;

            let hours = hour_repo.get_by_branch(branch.id).await?;
            assert_eq!(hours.len(), 2);
            assert!(hours[0].is_weekday);
            assert!(!hours[1].is_weekday);

            Ok(())
        }
    }

    mod duration {
        use imx_test_utils::prelude::*;

        use crate::server::data::branch::schedule::DurationRepository;

        /// Expect the branch to keep a single duration row
        #[tokio::test]
        async fn upsert_keeps_single_row() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_branch_tables().build().await?;
            let branch = test.branch().insert_mock_branch("강남").await?;

            let duration_repo = DurationRepository::new(&test.db);
            duration_repo.upsert(branch.id, 50, 10).await?;
            let updated = duration_repo.upsert(branch.id, 40, 5).await?;

            assert_eq!(updated.lesson_minutes, 40);
            assert_eq!(updated.break_minutes, 5);
            let stored = duration_repo.get_by_branch(branch.id).await?;
            assert_eq!(stored, Some(updated));

            Ok(())
        }

        /// Expect None for a branch without durations
        #[tokio::test]
        async fn returns_none_without_row() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_branch_tables().build().await?;
            let branch = test.branch().insert_mock_branch("강남").await?;

            let duration_repo = DurationRepository::new(&test.db);

            assert!(duration_repo.get_by_branch(branch.id).await?.is_none());

            Ok(())
        }
    }

    mod timetable {
        use imx_test_utils::prelude::*;

        use super::hm;
        use crate::server::data::branch::schedule::TimetableRepository;

        /// Expect periods to be numbered from 1 and previous periods of the flag to be dropped
        #[tokio::test]
        async fn replace_renumbers_periods() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_branch_tables().build().await?;
            let branch = test.branch().insert_mock_branch("강남").await?;

            let timetable_repo = TimetableRepository::new(&test.db);
            timetable_repo
                .replace(
                    branch.id,
                    true,
                    vec![(hm(9, 0), hm(9, 50)), (hm(10, 0), hm(10, 50))],
                )
                .await?;
            let replaced = timetable_repo
                .replace(branch.id, true, vec![(hm(13, 0), hm(13, 50))])
                .await?;

            assert_eq!(replaced.len(), 1);
            let stored = timetable_repo.get_by_branch(branch.id).await?;
            assert_eq!(stored.len(), 1);
            assert_eq!(stored[0].period, 1);
            assert_eq!(stored[0].start_time, hm(13, 0));

            Ok(())
        }

        /// Expect replacing weekend periods to leave weekday periods untouched
        #[tokio::test]
        async fn replace_only_touches_flag() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_branch_tables().build().await?;
            let branch = test.branch().insert_mock_branch("강남").await?;

            let timetable_repo = TimetableRepository::new(&test.db);
            timetable_repo
                .replace(branch.id, true, vec![(hm(9, 0), hm(9, 50))])
                .await?;
            timetable_repo.replace(branch.id, false, Vec::new()).await?;

            let stored = timetable_repo.get_by_branch(branch.id).await?;
            assert_eq!(stored.len(), 1);
            assert!(stored[0].is_weekday);

            Ok(())
        }
    }
}
