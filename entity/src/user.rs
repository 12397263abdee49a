use sea_orm::entity::prelude::*;

/// Branch every account falls back to when its own branch is deleted.
pub const DEFAULT_BRANCH_ID: i32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, column_type = "String(StringLen::N(20))")]
    pub username: String,
    #[sea_orm(column_type = "Text")]
    pub password: String,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub surname: String,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub given_name: String,
    #[sea_orm(nullable)]
    pub email: Option<String>,
    pub birthday: Date,
    pub gender: Gender,
    #[sea_orm(column_type = "String(StringLen::N(14))")]
    pub phone_number: String,
    #[sea_orm(default_value = 1)]
    pub branch_id: i32,
    #[sea_orm(default_value = true)]
    pub is_active: bool,
    #[sea_orm(default_value = false)]
    pub is_staff: bool,
    #[sea_orm(default_value = false)]
    pub is_superuser: bool,
    pub last_login: DateTime,
    pub date_joined: DateTime,
}

impl Model {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.surname, self.given_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum Gender {
    Male = 1,
    Female = 2,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "남성",
            Self::Female => "여성",
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::branch::Entity",
        from = "Column::BranchId",
        to = "super::branch::Column::Id",
        on_update = "NoAction",
        on_delete = "SetDefault"
    )]
    Branch,
    #[sea_orm(has_one = "super::user_branch::Entity")]
    UserBranch,
    #[sea_orm(has_one = "super::user_license_type::Entity")]
    UserLicenseType,
    #[sea_orm(has_one = "super::user_plan_type::Entity")]
    UserPlanType,
}

impl Related<super::branch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Branch.def()
    }
}

impl Related<super::user_branch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserBranch.def()
    }
}

impl Related<super::user_license_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserLicenseType.def()
    }
}

impl Related<super::user_plan_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserPlanType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
