//! Tests for HTTP controller endpoints, called directly with their extractors.

mod auth;
mod run;
mod stats;

use rune_ledger_test_utils::prelude::*;
