//! Server application core modules.
//!
//! HTTP routing and controllers, the service and data layers, session persistence,
//! rendered views and the maintenance scheduler.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod reference;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod store;
pub mod view;
