//! Recurring maintenance jobs.

pub mod cron;
