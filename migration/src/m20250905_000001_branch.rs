use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Branch::Table)
                    .if_not_exists()
                    .col(pk_auto(Branch::Id))
                    .col(string_len_uniq(Branch::Name, 100))
                    .col(string_len(Branch::Postcode, 10))
                    .col(string_len(Branch::StreetAddress, 255))
                    .col(string_len(Branch::DetailedAddress, 255))
                    .col(string_len(Branch::PhoneNumber1, 15))
                    .col(string_len_null(Branch::PhoneNumber2, 15))
                    .col(small_integer(Branch::EquipmentCount))
                    .col(boolean(Branch::IsActive).default(true))
                    .col(timestamp(Branch::CreatedAt))
                    .col(timestamp(Branch::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Branch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Branch {
    Table,
    Id,
    Name,
    Postcode,
    StreetAddress,
    DetailedAddress,
    #[sea_orm(iden = "phone_number_1")]
    PhoneNumber1,
    #[sea_orm(iden = "phone_number_2")]
    PhoneNumber2,
    EquipmentCount,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
