use sea_orm::{entity::prelude::*, Iterable};

/// Game difficulty a run was played on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Difficulty {
    #[sea_orm(string_value = "Normal")]
    Normal,
    #[sea_orm(string_value = "Nightmare")]
    Nightmare,
    #[sea_orm(string_value = "Hell")]
    Hell,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Nightmare => "Nightmare",
            Self::Hell => "Hell",
        }
    }

    /// Parses the display name of a difficulty, e.g. `"Hell"`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|difficulty| difficulty.as_str() == name)
    }
}
