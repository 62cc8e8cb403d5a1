//! mizan-cli library root.
//!
//! Re-exports the driver modules so integration tests can run
//! assessments and config migrations without going through the binary.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod prompt;
pub mod runner;
pub mod script;
