use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250905_000001_branch::Branch;

static IDX_USER_BRANCH_ID: &str = "idx-user-branch_id";
static FK_USER_BRANCH_ID: &str = "fk-user-branch_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len_uniq(User::Username, 20))
                    .col(text(User::Password))
                    .col(string_len(User::Surname, 20))
                    .col(string_len(User::GivenName, 20))
                    .col(string_null(User::Email))
                    .col(date(User::Birthday))
                    .col(integer(User::Gender))
                    .col(string_len(User::PhoneNumber, 14))
                    .col(integer(User::BranchId).default(1))
                    .col(boolean(User::IsActive).default(true))
                    .col(boolean(User::IsStaff).default(false))
                    .col(boolean(User::IsSuperuser).default(false))
                    .col(timestamp(User::LastLogin))
                    .col(timestamp(User::DateJoined))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_BRANCH_ID)
                            .from(User::Table, User::BranchId)
                            .to(Branch::Table, Branch::Id)
                            .on_delete(ForeignKeyAction::SetDefault),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_BRANCH_ID)
                    .table(User::Table)
                    .col(User::BranchId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_BRANCH_ID)
                    .table(User::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Username,
    Password,
    Surname,
    GivenName,
    Email,
    Birthday,
    Gender,
    PhoneNumber,
    BranchId,
    IsActive,
    IsStaff,
    IsSuperuser,
    LastLogin,
    DateJoined,
}
