//! SeaORM entities for the rune ledger database.

pub mod prelude;

pub mod difficulty;
pub mod rune_drop;
pub mod run;
pub mod session;
pub mod user;
