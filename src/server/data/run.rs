use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::run::RunSubmission;

/// Lifetime run totals of a single user.
///
/// Sums are `None` when the user has not logged any run yet.
#[derive(Debug, FromQueryResult)]
pub struct RunTotals {
    pub runs: i64,
    pub total_high_runes: Option<i64>,
    pub total_uniques: Option<i64>,
    pub total_sets: Option<i64>,
}

#[derive(Debug, FromQueryResult)]
pub struct LeaderboardRow {
    pub user_id: i32,
    pub username: String,
    pub total_high_runes: i64,
    pub runs: i64,
}

pub struct RunRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RunRepository<'a, C> {
    /// Creates a new instance of [`RunRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a run for the user, timestamped now
    pub async fn create(
        &self,
        user_id: i32,
        submission: &RunSubmission,
        high_rune_count: i32,
    ) -> Result<entity::run::Model, DbErr> {
        let run = entity::run::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            area: ActiveValue::Set(submission.area.clone()),
            difficulty: ActiveValue::Set(submission.difficulty),
            unique_count: ActiveValue::Set(submission.unique_count),
            set_count: ActiveValue::Set(submission.set_count),
            high_rune_count: ActiveValue::Set(high_rune_count),
            session_secs: ActiveValue::Set(submission.session_secs),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        run.insert(self.db).await
    }

    /// Sums run count, high runes, uniques and sets over all runs of a user
    pub async fn get_totals_by_user_id(&self, user_id: i32) -> Result<RunTotals, DbErr> {
        let totals = entity::prelude::Run::find()
            .select_only()
            .column_as(Expr::from(Func::count(Expr::col(entity::run::Column::Id))), "runs")
            .column_as(
                Expr::from(Func::sum(Expr::col(entity::run::Column::HighRuneCount))),
                "total_high_runes",
            )
            .column_as(
                Expr::from(Func::sum(Expr::col(entity::run::Column::UniqueCount))),
                "total_uniques",
            )
            .column_as(
                Expr::from(Func::sum(Expr::col(entity::run::Column::SetCount))),
                "total_sets",
            )
            .filter(entity::run::Column::UserId.eq(user_id))
            .into_model::<RunTotals>()
            .one(self.db)
            .await?;

        Ok(totals.unwrap_or(RunTotals {
            runs: 0,
            total_high_runes: None,
            total_uniques: None,
            total_sets: None,
        }))
    }

    /// Top users by lifetime high rune total
    ///
    /// Ties are ordered by ascending user ID. Users without runs are not ranked.
    pub async fn get_leaderboard(&self, limit: u64) -> Result<Vec<LeaderboardRow>, DbErr> {
        let high_rune_sum = || {
            Expr::from(Func::sum(Expr::col((
                entity::run::Entity,
                entity::run::Column::HighRuneCount,
            ))))
        };

        entity::prelude::Run::find()
            .select_only()
            .column(entity::run::Column::UserId)
            .column(entity::user::Column::Username)
            .column_as(high_rune_sum(), "total_high_runes")
            .column_as(
                Expr::from(Func::count(Expr::col((
                    entity::run::Entity,
                    entity::run::Column::Id,
                )))),
                "runs",
            )
            .join(JoinType::InnerJoin, entity::run::Relation::User.def())
            .group_by(entity::run::Column::UserId)
            .group_by(entity::user::Column::Username)
            .order_by_desc(high_rune_sum())
            .order_by_asc(entity::run::Column::UserId)
            .limit(limit)
            .into_model::<LeaderboardRow>()
            .all(self.db)
            .await
    }

    /// Most recent runs of a user, newest first
    pub async fn get_recent_by_user_id(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::run::Model>, DbErr> {
        entity::prelude::Run::find()
            .filter(entity::run::Column::UserId.eq(user_id))
            .order_by_desc(entity::run::Column::CreatedAt)
            .order_by_desc(entity::run::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Timestamp and high rune count of every run a user logged at or after `since`
    pub async fn get_high_runes_since(
        &self,
        user_id: i32,
        since: NaiveDateTime,
    ) -> Result<Vec<(NaiveDateTime, i32)>, DbErr> {
        entity::prelude::Run::find()
            .select_only()
            .column(entity::run::Column::CreatedAt)
            .column(entity::run::Column::HighRuneCount)
            .filter(entity::run::Column::UserId.eq(user_id))
            .filter(entity::run::Column::CreatedAt.gte(since))
            .order_by_asc(entity::run::Column::CreatedAt)
            .into_tuple::<(NaiveDateTime, i32)>()
            .all(self.db)
            .await
    }
}
