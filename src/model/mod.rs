//! Data transfer objects shared by the HTTP API and the rendered pages.

pub mod api;
pub mod form;
pub mod run;
pub mod stats;
