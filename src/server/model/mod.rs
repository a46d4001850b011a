//! Server application models and type definitions.
//!
//! Application state, database model aliases, session data wrappers and the parsed run
//! submission that flows from the controllers into the services.

pub mod app;
pub mod db;
pub mod run;
pub mod session;
