pub mod schedule;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

/// Validated column values for inserting or updating a branch.
#[derive(Clone, Debug)]
pub struct BranchParams {
    pub name: String,
    pub postcode: String,
    pub street_address: String,
    pub detailed_address: String,
    pub phone_number_1: String,
    pub phone_number_2: Option<String>,
    pub equipment_count: i16,
}

pub struct BranchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BranchRepository<'a, C> {
    /// Creates a new instance of [`BranchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new, active branch
    pub async fn create(&self, params: BranchParams) -> Result<entity::branch::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let branch = entity::branch::ActiveModel {
            name: ActiveValue::Set(params.name),
            postcode: ActiveValue::Set(params.postcode),
            street_address: ActiveValue::Set(params.street_address),
            detailed_address: ActiveValue::Set(params.detailed_address),
            phone_number_1: ActiveValue::Set(params.phone_number_1),
            phone_number_2: ActiveValue::Set(params.phone_number_2),
            equipment_count: ActiveValue::Set(params.equipment_count),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        branch.insert(self.db).await
    }

    pub async fn get_by_id(&self, branch_id: i32) -> Result<Option<entity::branch::Model>, DbErr> {
        entity::prelude::Branch::find_by_id(branch_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::branch::Model>, DbErr> {
        entity::prelude::Branch::find()
            .filter(entity::branch::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Lists every branch ordered by name
    pub async fn list(&self) -> Result<Vec<entity::branch::Model>, DbErr> {
        entity::prelude::Branch::find()
            .order_by_asc(entity::branch::Column::Name)
            .all(self.db)
            .await
    }

    /// Lists branches for the back-office
    ///
    /// `search` matches a substring of the name or street address, `is_active` filters on the
    /// open status. Results are ordered by name.
    pub async fn search(
        &self,
        search: Option<&str>,
        is_active: Option<bool>,
    ) -> Result<Vec<entity::branch::Model>, DbErr> {
        let mut query = entity::prelude::Branch::find();

        if let Some(search) = search {
            query = query.filter(
                Condition::any()
                    .add(entity::branch::Column::Name.contains(search))
                    .add(entity::branch::Column::StreetAddress.contains(search)),
            );
        }
        if let Some(is_active) = is_active {
            query = query.filter(entity::branch::Column::IsActive.eq(is_active));
        }

        query
            .order_by_asc(entity::branch::Column::Name)
            .all(self.db)
            .await
    }

    /// Replaces the editable columns of a branch and refreshes `updated_at`
    ///
    /// Returns `Ok(None)` when the branch does not exist.
    pub async fn update(
        &self,
        branch_id: i32,
        params: BranchParams,
    ) -> Result<Option<entity::branch::Model>, DbErr> {
        let branch = match entity::prelude::Branch::find_by_id(branch_id)
            .one(self.db)
            .await?
        {
            Some(branch) => branch,
            None => return Ok(None),
        };

        let mut branch_am = branch.into_active_model();
        branch_am.name = ActiveValue::Set(params.name);
        branch_am.postcode = ActiveValue::Set(params.postcode);
        branch_am.street_address = ActiveValue::Set(params.street_address);
        branch_am.detailed_address = ActiveValue::Set(params.detailed_address);
        branch_am.phone_number_1 = ActiveValue::Set(params.phone_number_1);
        branch_am.phone_number_2 = ActiveValue::Set(params.phone_number_2);
        branch_am.equipment_count = ActiveValue::Set(params.equipment_count);
        branch_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let branch = branch_am.update(self.db).await?;

        Ok(Some(branch))
    }

    /// Opens or closes a branch
    ///
    /// Returns `Ok(None)` when the branch does not exist.
    pub async fn set_active(
        &self,
        branch_id: i32,
        is_active: bool,
    ) -> Result<Option<entity::branch::Model>, DbErr> {
        let branch = match entity::prelude::Branch::find_by_id(branch_id)
            .one(self.db)
            .await?
        {
            Some(branch) => branch,
            None => return Ok(None),
        };

        let mut branch_am = branch.into_active_model();
        branch_am.is_active = ActiveValue::Set(is_active);
        branch_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let branch = branch_am.update(self.db).await?;

        Ok(Some(branch))
    }

    /// Deletes a branch
    ///
    /// Returns OK regardless of branch existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, branch_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Branch::delete_by_id(branch_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use imx_test_utils::prelude::*;

    use super::*;

    mod create;
    mod delete;
    mod get;
    mod list;
    mod update;

    fn params(name: &str) -> BranchParams {
        BranchParams {
            name: name.to_string(),
            postcode: "06236".to_string(),
            street_address: "서울특별시 강남구 테헤란로 152".to_string(),
            detailed_address: String::new(),
            phone_number_1: "02-1234-5678".to_string(),
            phone_number_2: None,
            equipment_count: 8,
        }
    }
}
