use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250905_000001_branch::Branch;

static IDX_TIMETABLE_BRANCH_WEEKDAY_PERIOD: &str =
    "idx-branch_timetable-branch_id-is_weekday-period";
static FK_TIMETABLE_BRANCH_ID: &str = "fk-branch_timetable-branch_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BranchTimetable::Table)
                    .if_not_exists()
                    .col(pk_auto(BranchTimetable::Id))
                    .col(integer(BranchTimetable::BranchId))
                    .col(boolean(BranchTimetable::IsWeekday))
                    .col(small_integer(BranchTimetable::Period))
                    .col(time(BranchTimetable::StartTime))
                    .col(time(BranchTimetable::EndTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TIMETABLE_BRANCH_ID)
                            .from(BranchTimetable::Table, BranchTimetable::BranchId)
                            .to(Branch::Table, Branch::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TIMETABLE_BRANCH_WEEKDAY_PERIOD)
                    .table(BranchTimetable::Table)
                    .col(BranchTimetable::BranchId)
                    .col(BranchTimetable::IsWeekday)
                    .col(BranchTimetable::Period)
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
                    .name(IDX_TIMETABLE_BRANCH_WEEKDAY_PERIOD)
                    .table(BranchTimetable::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BranchTimetable::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum BranchTimetable {
    Table,
    Id,
    BranchId,
    IsWeekday,
    Period,
    StartTime,
    EndTime,
}
