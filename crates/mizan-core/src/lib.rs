//! mizan-core
//!
//! Pure domain types for the Mizan self-assessment engine: modules,
//! questions, responses, sessions and results, plus the condition-expression
//! parser shared by question visibility and crisis triggers.

pub mod condition;
pub mod error;
pub mod models;
