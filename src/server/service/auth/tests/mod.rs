use rune_ledger_test_utils::prelude::*;
