//! Integration test harness.

mod cli_test;
mod persistence_test;
mod session_test;
