use chrono::{NaiveDateTime, Utc};
use entity::prelude::Difficulty;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn run(&self) -> RunFixtures<'_> {
        RunFixtures { context: self }
    }
}

pub struct RunFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> RunFixtures<'a> {
    /// Insert a Hell Mephisto run with the given high rune count, timestamped now
    pub async fn insert_run(
        &self,
        user_id: i32,
        high_rune_count: i32,
    ) -> Result<entity::run::Model, TestError> {
        self.insert_run_at(user_id, high_rune_count, Utc::now().naive_utc())
            .await
    }

    pub async fn insert_run_at(
        &self,
        user_id: i32,
        high_rune_count: i32,
        created_at: NaiveDateTime,
    ) -> Result<entity::run::Model, TestError> {
        Ok(entity::prelude::Run::insert(entity::run::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            area: ActiveValue::Set("Mephisto".to_string()),
            difficulty: ActiveValue::Set(Difficulty::Hell),
            unique_count: ActiveValue::Set(0),
            set_count: ActiveValue::Set(0),
            high_rune_count: ActiveValue::Set(high_rune_count),
            session_secs: ActiveValue::Set(0),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    pub async fn insert_drop(
        &self,
        run_id: i32,
        rune: &str,
        quantity: i32,
    ) -> Result<entity::rune_drop::Model, TestError> {
        Ok(
            entity::prelude::RuneDrop::insert(entity::rune_drop::ActiveModel {
                run_id: ActiveValue::Set(run_id),
                rune: ActiveValue::Set(rune.to_string()),
                quantity: ActiveValue::Set(quantity),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
