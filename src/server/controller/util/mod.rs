//! Helpers shared by controllers.

pub mod gate;
