use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "branch")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, column_type = "String(StringLen::N(100))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(10))")]
    pub postcode: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub street_address: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub detailed_address: String,
    #[sea_orm(column_type = "String(StringLen::N(15))")]
    pub phone_number_1: String,
    #[sea_orm(column_type = "String(StringLen::N(15))", nullable)]
    pub phone_number_2: Option<String>,
    pub equipment_count: i16,
    #[sea_orm(default_value = true)]
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::branch_business_hour::Entity")]
    BranchBusinessHour,
    #[sea_orm(has_one = "super::branch_duration::Entity")]
    BranchDuration,
    #[sea_orm(has_many = "super::branch_timetable::Entity")]
    BranchTimetable,
    #[sea_orm(has_many = "super::user::Entity")]
    User,
    #[sea_orm(has_many = "super::user_branch::Entity")]
    UserBranch,
}

impl Related<super::branch_business_hour::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BranchBusinessHour.def()
    }
}

impl Related<super::branch_duration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BranchDuration.def()
    }
}

impl Related<super::branch_timetable::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BranchTimetable.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::user_branch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserBranch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
