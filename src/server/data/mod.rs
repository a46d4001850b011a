//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per table. They are generic over
//! [`sea_orm::ConnectionTrait`] so the same repository works on a pooled connection or
//! inside a transaction.

pub mod run;
pub mod rune_drop;
pub mod session;
pub mod user;
