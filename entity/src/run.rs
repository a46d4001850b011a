use sea_orm::entity::prelude::*;

use crate::difficulty::Difficulty;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "runs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub user_id: i32,
    pub area: String,
    pub difficulty: Difficulty,
    pub unique_count: i32,
    pub set_count: i32,
    /// Sum of the quantities of high rune drops logged with this run
    pub high_rune_count: i32,
    pub session_secs: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::rune_drop::Entity")]
    RuneDrop,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::rune_drop::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RuneDrop.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
