//! Environment configuration.
//!
//! All settings are read once at startup. Only `SESSION_SECRET` is required; every other
//! variable falls back to a default suitable for a single-node deployment with a local
//! SQLite file.

use std::{str::FromStr, time::Duration};

use crate::server::{error::config::ConfigError, reference::UnknownRunePolicy};

/// Local file store used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://rune_ledger.db?mode=rwc";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DATABASE_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;
pub const DEFAULT_LEADERBOARD_LIMIT: u64 = 10;

/// Minimum length of the cookie signing secret in bytes.
pub const SESSION_SECRET_MIN_BYTES: usize = 64;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub session_secret: Vec<u8>,
    pub bind_addr: String,
    pub database_timeout: Duration,
    pub session_expiry_days: i64,
    pub leaderboard_limit: u64,
    pub unknown_rune_policy: UnknownRunePolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let session_secret = get("SESSION_SECRET")
            .ok_or_else(|| ConfigError::MissingEnvVar("SESSION_SECRET".to_string()))?
            .into_bytes();
        if session_secret.len() < SESSION_SECRET_MIN_BYTES {
            return Err(ConfigError::InvalidEnvValue {
                var: "SESSION_SECRET".to_string(),
                reason: format!(
                    "must be at least {} bytes, got {}",
                    SESSION_SECRET_MIN_BYTES,
                    session_secret.len()
                ),
            });
        }

        let database_timeout_secs: u64 = parse_or(
            get("DATABASE_TIMEOUT_SECS"),
            "DATABASE_TIMEOUT_SECS",
            DEFAULT_DATABASE_TIMEOUT_SECS,
        )?;
        if database_timeout_secs < 1 {
            return Err(ConfigError::InvalidEnvValue {
                var: "DATABASE_TIMEOUT_SECS".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        let session_expiry_days: i64 = parse_or(
            get("SESSION_EXPIRY_DAYS"),
            "SESSION_EXPIRY_DAYS",
            DEFAULT_SESSION_EXPIRY_DAYS,
        )?;
        if session_expiry_days < 1 {
            return Err(ConfigError::InvalidEnvValue {
                var: "SESSION_EXPIRY_DAYS".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            session_secret,
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            database_timeout: Duration::from_secs(database_timeout_secs),
            session_expiry_days,
            leaderboard_limit: parse_or(
                get("LEADERBOARD_LIMIT"),
                "LEADERBOARD_LIMIT",
                DEFAULT_LEADERBOARD_LIMIT,
            )?,
            unknown_rune_policy: parse_or(
                get("UNKNOWN_RUNE_POLICY"),
                "UNKNOWN_RUNE_POLICY",
                UnknownRunePolicy::default(),
            )?,
        })
    }
}

fn parse_or<T>(value: Option<String>, var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
    }
}
