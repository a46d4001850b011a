//! HTTP controllers.
//!
//! Handlers extract form input and the session, call into the service layer and either
//! render a page, return JSON or redirect. Protected handlers take an
//! [`AuthenticatedUser`](util::gate::AuthenticatedUser).

pub mod auth;
pub mod dashboard;
pub mod run;
pub mod stats;
pub mod util;
