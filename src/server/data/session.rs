use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct SessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SessionRepository<'a, C> {
    /// Creates a new instance of [`SessionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a session that has not expired as of `now`
    pub async fn get_unexpired(
        &self,
        id: &str,
        now: i64,
    ) -> Result<Option<entity::session::Model>, DbErr> {
        entity::prelude::Session::find_by_id(id.to_string())
            .filter(entity::session::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await
    }

    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Session::find_by_id(id.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts the session or replaces its data & expiry if the ID already exists
    pub async fn upsert(&self, id: &str, data: Vec<u8>, expires_at: i64) -> Result<(), DbErr> {
        let session = entity::session::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            data: ActiveValue::Set(data),
            expires_at: ActiveValue::Set(expires_at),
        };

        entity::prelude::Session::insert(session)
            .on_conflict(
                OnConflict::column(entity::session::Column::Id)
                    .update_columns([
                        entity::session::Column::Data,
                        entity::session::Column::ExpiresAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), DbErr> {
        entity::prelude::Session::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes every session expired as of `now`, returning the number removed
    pub async fn delete_expired(&self, now: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::Session::delete_many()
            .filter(entity::session::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
