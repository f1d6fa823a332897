//! eqgen command-line front end.

pub mod args;
pub mod driver;
pub mod report;
pub mod tracing_config;

#[cfg(test)]
#[path = "../tests/driver_tests.rs"]
mod driver_tests;
