use entity::prelude::Difficulty;
use serde::Deserialize;

use crate::{model::form::LogRunForm, server::error::validation::ValidationError};

/// A rune drop as submitted by the run logging form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RuneDropInput {
    pub rune: String,
    #[serde(rename = "qty")]
    pub quantity: i64,
}

impl RuneDropInput {
    pub fn new(rune: impl Into<String>, quantity: i64) -> Self {
        Self {
            rune: rune.into(),
            quantity,
        }
    }
}

/// Parses the JSON encoded `[{"rune": "Jah", "qty": 1}]` drop list.
///
/// Blank or malformed input yields no drops at all.
pub fn parse_rune_drops(raw: &str) -> Vec<RuneDropInput> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    serde_json::from_str(raw).unwrap_or_default()
}

/// A run submission with its fields parsed, not yet checked against reference data.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSubmission {
    pub area: String,
    pub difficulty: Difficulty,
    pub unique_count: i32,
    pub set_count: i32,
    pub session_secs: i32,
    pub drops: Vec<RuneDropInput>,
}

/// Parses a submitted count, blank meaning zero.
fn parse_count(field: &'static str, value: &str) -> Result<i32, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }

    match value.parse::<i32>() {
        Ok(count) if count >= 0 => Ok(count),
        _ => Err(ValidationError::InvalidCount {
            field,
            value: value.to_string(),
        }),
    }
}

impl TryFrom<LogRunForm> for RunSubmission {
    type Error = ValidationError;

    fn try_from(form: LogRunForm) -> Result<Self, Self::Error> {
        let difficulty = Difficulty::from_name(form.difficulty.trim())
            .ok_or_else(|| ValidationError::UnknownDifficulty(form.difficulty.clone()))?;

        Ok(Self {
            area: form.area.trim().to_string(),
            difficulty,
            unique_count: parse_count("uniques", &form.uniques)?,
            set_count: parse_count("sets", &form.sets)?,
            session_secs: parse_count("session_secs", &form.session_secs)?,
            drops: parse_rune_drops(&form.runes),
        })
    }
}

#[cfg(test)]
mod tests {
    use entity::prelude::Difficulty;

    use crate::{
        model::form::LogRunForm,
        server::{
            error::validation::ValidationError,
            model::run::{parse_rune_drops, RunSubmission, RuneDropInput},
        },
    };

    fn form() -> LogRunForm {
        LogRunForm {
            area: "Mephisto".to_string(),
            difficulty: "Hell".to_string(),
            uniques: "2".to_string(),
            sets: "1".to_string(),
            runes: r#"[{"rune":"Jah","qty":1}]"#.to_string(),
            session_secs: String::new(),
        }
    }

    #[test]
    fn converts_form() {
        let submission = RunSubmission::try_from(form()).unwrap();

        assert_eq!(submission.difficulty, Difficulty::Hell);
        assert_eq!(submission.unique_count, 2);
        assert_eq!(submission.set_count, 1);
        assert_eq!(submission.session_secs, 0);
        assert_eq!(submission.drops, vec![RuneDropInput::new("Jah", 1)]);
    }

    #[test]
    fn blank_counts_are_zero() {
        let mut form = form();
        form.uniques = " ".to_string();
        form.sets = String::new();

        let submission = RunSubmission::try_from(form).unwrap();

        assert_eq!(submission.unique_count, 0);
        assert_eq!(submission.set_count, 0);
    }

    #[test]
    fn rejects_negative_or_malformed_counts() {
        let mut negative = form();
        negative.uniques = "-1".to_string();
        let mut malformed = form();
        malformed.sets = "two".to_string();

        assert!(matches!(
            RunSubmission::try_from(negative),
            Err(ValidationError::InvalidCount { field: "uniques", .. })
        ));
        assert!(matches!(
            RunSubmission::try_from(malformed),
            Err(ValidationError::InvalidCount { field: "sets", .. })
        ));
    }

    #[test]
    fn rejects_unknown_difficulty() {
        let mut form = form();
        form.difficulty = "Inferno".to_string();

        assert_eq!(
            RunSubmission::try_from(form),
            Err(ValidationError::UnknownDifficulty("Inferno".to_string()))
        );
    }

    #[test]
    fn parses_drop_list() {
        let drops = parse_rune_drops(r#"[{"rune":"Jah","qty":1},{"rune":"El","qty":5}]"#);

        assert_eq!(
            drops,
            vec![RuneDropInput::new("Jah", 1), RuneDropInput::new("El", 5)]
        );
    }

    #[test]
    fn malformed_json_yields_no_drops() {
        assert!(parse_rune_drops("[{\"rune\":\"Jah\"").is_empty());
        assert!(parse_rune_drops("{\"rune\":\"Jah\",\"qty\":1}").is_empty());
        assert!(parse_rune_drops("").is_empty());
    }
}
