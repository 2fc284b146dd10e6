//! Common test utilities and fixtures for tabsweep-engine integration tests
//!
//! This module provides:
//! - `TestWorkspace` builder for snapshot and settings files in a temp dir
//! - Custom assertions for validating CLI output

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod assertions;
pub mod test_workspace;

pub use assertions::*;
pub use test_workspace::TestWorkspace;
