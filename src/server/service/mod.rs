//! Service layer for business logic.
//!
//! Services validate input, coordinate repositories and own transaction boundaries.
//! Controllers call services, services never touch HTTP types.

pub mod auth;
pub mod run;
pub mod stats;
