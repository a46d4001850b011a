//! Database model type aliases.

/// Registered account, see `entity::user::Model`.
pub type UserModel = entity::user::Model;

/// Logged farming run, see `entity::run::Model`.
pub type RunModel = entity::run::Model;

/// Single rune drop of a run, see `entity::rune_drop::Model`.
pub type RuneDropModel = entity::rune_drop::Model;

/// Persisted session record, see `entity::session::Model`.
pub type SessionModel = entity::session::Model;
