//! Database fixtures inserted during test execution.

pub mod run;
pub mod user;
