//! Session data models.
//!
//! Type-safe wrappers for values stored in the tower-sessions session.

pub mod user;
