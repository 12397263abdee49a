//! Branch fixture utilities.

pub mod factory;

use chrono::NaiveTime;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn branch<'a>(&'a mut self) -> BranchFixtures<'a> {
        BranchFixtures { setup: self }
    }
}

pub struct BranchFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> BranchFixtures<'a> {
    /// Insert a branch with standard test values and the provided name.
    pub async fn insert_mock_branch(
        &self,
        name: &str,
    ) -> Result<entity::branch::Model, TestError> {
        let model = factory::mock_branch_model(0, name);

        Ok(
            entity::prelude::Branch::insert(entity::branch::ActiveModel {
                name: ActiveValue::Set(model.name),
                postcode: ActiveValue::Set(model.postcode),
                street_address: ActiveValue::Set(model.street_address),
                detailed_address: ActiveValue::Set(model.detailed_address),
                phone_number_1: ActiveValue::Set(model.phone_number_1),
                phone_number_2: ActiveValue::Set(model.phone_number_2),
                equipment_count: ActiveValue::Set(model.equipment_count),
                is_active: ActiveValue::Set(model.is_active),
                created_at: ActiveValue::Set(model.created_at),
                updated_at: ActiveValue::Set(model.updated_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert the weekday or weekend business hours of a branch.
    pub async fn insert_business_hour(
        &self,
        branch_id: i32,
        is_weekday: bool,
        open_time: NaiveTime,
        close_time: NaiveTime,
    ) -> Result<entity::branch_business_hour::Model, TestError> {
        Ok(entity::prelude::BranchBusinessHour::insert(
            entity::branch_business_hour::ActiveModel {
                branch_id: ActiveValue::Set(branch_id),
                is_weekday: ActiveValue::Set(is_weekday),
                open_time: ActiveValue::Set(open_time),
                close_time: ActiveValue::Set(close_time),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert lesson and break durations (in minutes) for a branch.
    pub async fn insert_duration(
        &self,
        branch_id: i32,
        lesson_minutes: i16,
        break_minutes: i16,
    ) -> Result<entity::branch_duration::Model, TestError> {
        Ok(
            entity::prelude::BranchDuration::insert(entity::branch_duration::ActiveModel {
                branch_id: ActiveValue::Set(branch_id),
                lesson_minutes: ActiveValue::Set(lesson_minutes),
                break_minutes: ActiveValue::Set(break_minutes),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
