//! Command handler integration tests

pub mod help_test;
pub mod list_test;
pub mod start_test;
