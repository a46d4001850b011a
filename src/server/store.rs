//! Session persistence for `tower-sessions` backed by the `sessions` table.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use time::OffsetDateTime;
use tower_sessions::{
    session::{Id, Record},
    session_store::{self, SessionStore},
};

use crate::server::data::session::SessionRepository;

/// Stores session records as JSON in the application database so sessions survive
/// restarts and are shared by every instance using the same database.
#[derive(Clone, Debug)]
pub struct DatabaseSessionStore {
    db: DatabaseConnection,
}

impl DatabaseSessionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Removes every expired session, returning how many were deleted
    pub async fn delete_expired(&self) -> Result<u64, sea_orm::DbErr> {
        let now = OffsetDateTime::now_utc().unix_timestamp();

        SessionRepository::new(&self.db).delete_expired(now).await
    }
}

fn backend(err: sea_orm::DbErr) -> session_store::Error {
    session_store::Error::Backend(err.to_string())
}

#[async_trait]
impl SessionStore for DatabaseSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        let repository = SessionRepository::new(&self.db);

        while repository
            .exists(&record.id.to_string())
            .await
            .map_err(backend)?
        {
            record.id = Id::default();
        }

        self.save(record).await
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        let data =
            serde_json::to_vec(record).map_err(|e| session_store::Error::Encode(e.to_string()))?;

        SessionRepository::new(&self.db)
            .upsert(
                &record.id.to_string(),
                data,
                record.expiry_date.unix_timestamp(),
            )
            .await
            .map_err(backend)
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let Some(session) = SessionRepository::new(&self.db)
            .get_unexpired(&session_id.to_string(), now)
            .await
            .map_err(backend)?
        else {
            return Ok(None);
        };

        let record = serde_json::from_slice(&session.data)
            .map_err(|e| session_store::Error::Decode(e.to_string()))?;

        Ok(Some(record))
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        SessionRepository::new(&self.db)
            .delete(&session_id.to_string())
            .await
            .map_err(backend)
    }
}
