use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250905_000005_user::User;

static FK_LICENSE_TYPE_USER_ID: &str = "fk-user_license_type-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserLicenseType::Table)
                    .if_not_exists()
                    .col(pk_auto(UserLicenseType::Id))
                    .col(integer_uniq(UserLicenseType::UserId))
                    .col(string_len_null(UserLicenseType::LicenseType, 3))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LICENSE_TYPE_USER_ID)
                            .from(UserLicenseType::Table, UserLicenseType::UserId)
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
            .drop_table(Table::drop().table(UserLicenseType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserLicenseType {
    Table,
    Id,
    UserId,
    LicenseType,
}
