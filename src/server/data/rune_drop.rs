use sea_orm::{
    sea_query::{Expr, Func},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::run::RuneDropInput;

pub struct RuneDropRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RuneDropRepository<'a, C> {
    /// Creates a new instance of [`RuneDropRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts every drop for the provided run, no-op for an empty list
    pub async fn create_many(&self, run_id: i32, drops: &[RuneDropInput]) -> Result<(), DbErr> {
        if drops.is_empty() {
            return Ok(());
        }

        let models = drops.iter().map(|drop| entity::rune_drop::ActiveModel {
            run_id: ActiveValue::Set(run_id),
            rune: ActiveValue::Set(drop.rune.clone()),
            quantity: ActiveValue::Set(drop.quantity as i32),
            ..Default::default()
        });

        entity::prelude::RuneDrop::insert_many(models)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_many_by_run_ids(
        &self,
        run_ids: &[i32],
    ) -> Result<Vec<entity::rune_drop::Model>, DbErr> {
        if run_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::RuneDrop::find()
            .filter(entity::rune_drop::Column::RunId.is_in(run_ids.iter().copied()))
            .order_by_asc(entity::rune_drop::Column::Id)
            .all(self.db)
            .await
    }

    /// Lifetime quantity per rune name across all runs of a user
    pub async fn get_tally_by_user_id(&self, user_id: i32) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::RuneDrop::find()
            .select_only()
            .column(entity::rune_drop::Column::Rune)
            .column_as(
                Expr::from(Func::sum(Expr::col((
                    entity::rune_drop::Entity,
                    entity::rune_drop::Column::Quantity,
                )))),
                "quantity",
            )
            .join(JoinType::InnerJoin, entity::rune_drop::Relation::Run.def())
            .filter(entity::run::Column::UserId.eq(user_id))
            .group_by(entity::rune_drop::Column::Rune)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await
    }
}
