use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250905_000001_branch::Branch;

static IDX_BUSINESS_HOUR_BRANCH_WEEKDAY: &str = "idx-branch_business_hour-branch_id-is_weekday";
static FK_BUSINESS_HOUR_BRANCH_ID: &str = "fk-branch_business_hour-branch_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BranchBusinessHour::Table)
                    .if_not_exists()
                    .col(pk_auto(BranchBusinessHour::Id))
                    .col(integer(BranchBusinessHour::BranchId))
                    .col(boolean(BranchBusinessHour::IsWeekday))
                    .col(time(BranchBusinessHour::OpenTime))
                    .col(time(BranchBusinessHour::CloseTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BUSINESS_HOUR_BRANCH_ID)
                            .from(BranchBusinessHour::Table, BranchBusinessHour::BranchId)
                            .to(Branch::Table, Branch::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BUSINESS_HOUR_BRANCH_WEEKDAY)
                    .table(BranchBusinessHour::Table)
                    .col(BranchBusinessHour::BranchId)
                    .col(BranchBusinessHour::IsWeekday)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BUSINESS_HOUR_BRANCH_WEEKDAY)
                    .table(BranchBusinessHour::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BranchBusinessHour::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum BranchBusinessHour {
    Table,
    Id,
    BranchId,
    IsWeekday,
    OpenTime,
    CloseTime,
}
