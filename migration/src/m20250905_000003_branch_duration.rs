use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250905_000001_branch::Branch;

static FK_DURATION_BRANCH_ID: &str = "fk-branch_duration-branch_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BranchDuration::Table)
                    .if_not_exists()
                    .col(pk_auto(BranchDuration::Id))
                    .col(integer_uniq(BranchDuration::BranchId))
                    .col(small_integer(BranchDuration::LessonMinutes).default(50))
                    .col(small_integer(BranchDuration::BreakMinutes).default(10))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DURATION_BRANCH_ID)
                            .from(BranchDuration::Table, BranchDuration::BranchId)
                            .to(Branch::Table, Branch::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BranchDuration::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum BranchDuration {
    Table,
    Id,
    BranchId,
    LessonMinutes,
    BreakMinutes,
}
