use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_license_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
    #[sea_orm(nullable)]
    pub license_type: Option<LicenseType>,
}

/// Driving-license category a student is pursuing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(3))")]
pub enum LicenseType {
    #[sea_orm(string_value = "1L")]
    FirstClassLarge,
    #[sea_orm(string_value = "1O")]
    FirstClassOrdinary,
    #[sea_orm(string_value = "1OA")]
    FirstClassOrdinaryAutomatic,
    #[sea_orm(string_value = "2O")]
    SecondClassOrdinary,
    #[sea_orm(string_value = "2OA")]
    SecondClassOrdinaryAutomatic,
    #[sea_orm(string_value = "P")]
    Paper,
}

impl LicenseType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstClassLarge => "1종 대형",
            Self::FirstClassOrdinary => "1종 보통",
            Self::FirstClassOrdinaryAutomatic => "1종 보통 (자동)",
            Self::SecondClassOrdinary => "2종 보통",
            Self::SecondClassOrdinaryAutomatic => "2종 보통 (자동)",
            Self::Paper => "장롱 면허",
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
