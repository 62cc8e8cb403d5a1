//! mizan-export
//!
//! Plain-text result reports rendered from Tera templates.

pub mod error;
pub mod render;
pub mod report;
