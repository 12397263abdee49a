//! License and plan type side tables of a user account.

use std::collections::HashMap;

use entity::{user_license_type::LicenseType, user_plan_type::PlanType};
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct UserLicenseTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserLicenseTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Sets the license type of a user, `None` clears it
    pub async fn upsert(
        &self,
        user_id: i32,
        license_type: Option<LicenseType>,
    ) -> Result<entity::user_license_type::Model, DbErr> {
        entity::prelude::UserLicenseType::insert(entity::user_license_type::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            license_type: ActiveValue::Set(license_type),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user_license_type::Column::UserId)
                .update_column(entity::user_license_type::Column::LicenseType)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Option<LicenseType>, DbErr> {
        let row = entity::prelude::UserLicenseType::find()
            .filter(entity::user_license_type::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(row.and_then(|row| row.license_type))
    }

    /// Set values keyed by user ID, users without a value are left out
    pub async fn get_by_users(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, LicenseType>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::UserLicenseType::find()
            .filter(entity::user_license_type::Column::UserId.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| row.license_type.map(|value| (row.user_id, value)))
            .collect())
    }
}

pub struct UserPlanTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserPlanTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Sets the plan type of a user, `None` clears it
    pub async fn upsert(
        &self,
        user_id: i32,
        plan_type: Option<PlanType>,
    ) -> Result<entity::user_plan_type::Model, DbErr> {
        entity::prelude::UserPlanType::insert(entity::user_plan_type::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            plan_type: ActiveValue::Set(plan_type),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user_plan_type::Column::UserId)
                .update_column(entity::user_plan_type::Column::PlanType)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Option<PlanType>, DbErr> {
        let row = entity::prelude::UserPlanType::find()
            .filter(entity::user_plan_type::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(row.and_then(|row| row.plan_type))
    }

    /// Set values keyed by user ID, users without a value are left out
    pub async fn get_by_users(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, PlanType>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::UserPlanType::find()
            .filter(entity::user_plan_type::Column::UserId.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| row.plan_type.map(|value| (row.user_id, value)))
            .collect())
    }
}
