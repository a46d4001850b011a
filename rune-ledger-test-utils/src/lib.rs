//! Shared test tooling for the rune ledger workspace.
//!
//! Tests build an in-memory SQLite database through [`TestBuilder`] and insert rows
//! through the fixture helpers on [`TestContext`].

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{test_setup_with_tables, TestBuilder, TestContext, TestError};
}

/// Builds a [`TestContext`] with database tables already created.
///
/// Without arguments every ledger table is created, otherwise only the provided entities.
///
/// ```ignore
/// let test = test_setup_with_tables!()?;
/// let test = test_setup_with_tables!(entity::prelude::User)?;
/// ```
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().with_ledger_tables().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}
