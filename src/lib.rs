//! Rune Ledger: log Diablo II: Resurrected farming runs, track high rune drops and
//! compete on a lifetime leaderboard.

pub mod model;
pub mod server;
