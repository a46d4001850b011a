//! Declarative test builder.
//!
//! Configuration methods are queued and executed in the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for an in-memory test database.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_ledger_tables: bool,
    users: Vec<String>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_ledger_tables: false,
            users: Vec::new(),
        }
    }

    /// Add every ledger table: users, runs, rune drops and sessions.
    pub fn with_ledger_tables(mut self) -> Self {
        self.include_ledger_tables = true;
        self
    }

    /// Add a single entity table.
    ///
    /// Chain multiple calls to add multiple tables. Tables are created in call order so
    /// referenced tables must be added first.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with a placeholder password hash during `build()`.
    pub fn with_user(mut self, username: &str) -> Self {
        self.users.push(username.to_string());
        self
    }

    /// Execute all queued configuration and return the [`TestContext`].
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database with the configured tables & fixtures
    /// - `Err(TestError::DbErr)` - Connecting, creating tables or inserting fixtures failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_ledger_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Run),
                schema.create_table_from_entity(entity::prelude::RuneDrop),
                schema.create_table_from_entity(entity::prelude::Session),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        for username in self.users {
            context.user().insert_user(&username).await?;
        }

        Ok(context)
    }
}
