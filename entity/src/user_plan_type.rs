use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_plan_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
    #[sea_orm(nullable)]
    pub plan_type: Option<PlanType>,
}

/// Fee or guarantee plan a student is enrolled under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum PlanType {
    #[sea_orm(string_value = "T")]
    Hourly,
    #[sea_orm(string_value = "GA")]
    GuaranteedPass,
    #[sea_orm(string_value = "GC")]
    GuaranteedCourse,
    #[sea_orm(string_value = "GR")]
    GuaranteedRoad,
    #[sea_orm(string_value = "P")]
    Paper,
}

impl PlanType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hourly => "시간제",
            Self::GuaranteedPass => "합격 보장제",
            Self::GuaranteedCourse => "기능 보장제",
            Self::GuaranteedRoad => "도로주행 보장제",
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
