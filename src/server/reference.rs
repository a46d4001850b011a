//! Static game reference data.
//!
//! [`ReferenceData`] is built once at startup and shared read-only through the
//! application state; nothing in here is mutated after construction.

use std::{collections::HashSet, fmt, str::FromStr};

use entity::prelude::Difficulty;
use sea_orm::Iterable;

/// Farming areas offered by the run logging form.
pub const AREAS: [&str; 19] = [
    "Countess",
    "Radament",
    "Travincal Council",
    "Lower Kurast",
    "Mephisto",
    "Chaos Sanctuary",
    "Baal Waves",
    "Cow Level",
    "Pindleskin",
    "Nihlathak",
    "The Pit",
    "Ancient Tunnels",
    "Eldritch + Shenk",
    "Andariel",
    "Arcane Sanctuary",
    "Stony Tomb",
    "Arachnid Lair",
    "Maggot Lair",
    "Other",
];

/// All runes from lowest (El) to highest (Zod).
pub const RUNES: [&str; 33] = [
    "El", "Eld", "Tir", "Nef", "Eth", "Ith", "Tal", "Ral", "Ort", "Thul", "Amn", "Sol", "Shael",
    "Dol", "Hel", "Io", "Lum", "Ko", "Fal", "Lem", "Pul", "Um", "Mal", "Ist", "Gul", "Vex", "Ohm",
    "Lo", "Sur", "Ber", "Jah", "Cham", "Zod",
];

/// Runes counted towards a run's high rune total.
pub const HIGH_RUNES: [&str; 12] = [
    "Um", "Mal", "Ist", "Gul", "Vex", "Ohm", "Lo", "Sur", "Ber", "Jah", "Cham", "Zod",
];

/// How run submissions containing rune names outside of [`RUNES`] are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownRunePolicy {
    /// Store the drop but never count it as a high rune
    #[default]
    Lenient,
    /// Reject the whole submission with a validation error
    Reject,
}

impl FromStr for UnknownRunePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "expected \"lenient\" or \"reject\", got {:?}",
                other
            )),
        }
    }
}

impl fmt::Display for UnknownRunePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReferenceData {
    areas: Vec<String>,
    difficulties: Vec<Difficulty>,
    runes: Vec<String>,
    high_runes: HashSet<String>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            areas: AREAS.iter().map(|area| area.to_string()).collect(),
            difficulties: Difficulty::iter().collect(),
            runes: RUNES.iter().map(|rune| rune.to_string()).collect(),
            high_runes: HIGH_RUNES.iter().map(|rune| rune.to_string()).collect(),
        }
    }
}

impl ReferenceData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn areas(&self) -> &[String] {
        &self.areas
    }

    pub fn difficulties(&self) -> &[Difficulty] {
        &self.difficulties
    }

    /// Runes in ascending order of value.
    pub fn runes(&self) -> &[String] {
        &self.runes
    }

    pub fn is_known_area(&self, area: &str) -> bool {
        self.areas.iter().any(|known| known == area)
    }

    pub fn is_known_rune(&self, rune: &str) -> bool {
        self.rune_rank(rune).is_some()
    }

    pub fn is_high_rune(&self, rune: &str) -> bool {
        self.high_runes.contains(rune)
    }

    /// Position of the rune in the ordered rune list, El being 0.
    pub fn rune_rank(&self, rune: &str) -> Option<usize> {
        self.runes.iter().position(|known| known == rune)
    }

    /// Sums the quantities of all high rune drops.
    ///
    /// Unknown rune names are ignored rather than rejected. The sum is widened to `i64` so
    /// callers decide what to do with totals beyond the `i32` column.
    pub fn high_rune_count<'a, I>(&self, drops: I) -> i64
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        drops
            .into_iter()
            .filter(|(rune, _)| self.is_high_rune(rune))
            .map(|(_, quantity)| quantity)
            .sum()
    }
}
