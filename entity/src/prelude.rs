pub use super::difficulty::Difficulty;
pub use super::rune_drop::Entity as RuneDrop;
pub use super::run::Entity as Run;
pub use super::session::Entity as Session;
pub use super::user::Entity as User;
