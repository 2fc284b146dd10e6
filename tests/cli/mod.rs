//! CLI command integration tests
//!
//! Runs the `tabsweep` binary for each subcommand in both output formats.

pub mod classify_tests;
pub mod config_tests;
pub mod plan_tests;
