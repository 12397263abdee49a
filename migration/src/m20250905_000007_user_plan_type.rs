use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250905_000005_user::User;

static FK_PLAN_TYPE_USER_ID: &str = "fk-user_plan_type-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPlanType::Table)
                    .if_not_exists()
                    .col(pk_auto(UserPlanType::Id))
                    .col(integer_uniq(UserPlanType::UserId))
                    .col(string_len_null(UserPlanType::PlanType, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLAN_TYPE_USER_ID)
                            .from(UserPlanType::Table, UserPlanType::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserPlanType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserPlanType {
    Table,
    Id,
    UserId,
    PlanType,
}
