use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250905_000001_branch::Branch, m20250905_000005_user::User};

static FK_USER_BRANCH_USER_ID: &str = "fk-user_branch-user_id";
static FK_USER_BRANCH_BRANCH_ID: &str = "fk-user_branch-branch_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserBranch::Table)
                    .if_not_exists()
                    .col(pk_auto(UserBranch::Id))
                    .col(integer_uniq(UserBranch::UserId))
                    .col(integer(UserBranch::BranchId).default(1))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_BRANCH_USER_ID)
                            .from(UserBranch::Table, UserBranch::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_BRANCH_BRANCH_ID)
                            .from(UserBranch::Table, UserBranch::BranchId)
                            .to(Branch::Table, Branch::Id)
                            .on_delete(ForeignKeyAction::SetDefault),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserBranch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserBranch {
    Table,
    Id,
    UserId,
    BranchId,
}
