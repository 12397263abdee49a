use migration::{Expr, OnConflict};
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

/// Redundant user to branch association, mirrored from `user.branch_id`.
pub struct UserBranchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserBranchRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records the branch of a user, replacing any previous association
    pub async fn upsert(
        &self,
        user_id: i32,
        branch_id: i32,
    ) -> Result<entity::user_branch::Model, DbErr> {
        entity::prelude::UserBranch::insert(entity::user_branch::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            branch_id: ActiveValue::Set(branch_id),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user_branch::Column::UserId)
                .update_column(entity::user_branch::Column::BranchId)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get_by_user(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::user_branch::Model>, DbErr> {
        entity::prelude::UserBranch::find()
            .filter(entity::user_branch::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Moves every association of `from_branch_id` to `to_branch_id`
    pub async fn reassign_branch(
        &self,
        from_branch_id: i32,
        to_branch_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::UserBranch::update_many()
            .col_expr(
                entity::user_branch::Column::BranchId,
                Expr::value(to_branch_id),
            )
            .filter(entity::user_branch::Column::BranchId.eq(from_branch_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
