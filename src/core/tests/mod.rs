//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Mode cycle and supported-mode tests
//! - Toggle strategy tests
//! - Command line and mode name parsing tests

#[cfg(test)]
mod parser_tests;
