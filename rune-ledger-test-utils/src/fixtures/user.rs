use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

/// Password hash stored for fixture users, never a valid argon2 hash.
pub const PLACEHOLDER_PASSWORD_HASH: &str = "placeholder_hash";

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(&self, username: &str) -> Result<entity::user::Model, TestError> {
        self.insert_user_with_hash(username, PLACEHOLDER_PASSWORD_HASH)
            .await
    }

    pub async fn insert_user_with_hash(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<entity::user::Model, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }
}
